#![allow(dead_code)]
use mstcluster::{
    BoundingBox, ClusterError, ClusterParams, ComponentStats, DistanceMetric, MstClusterer, Point,
};

pub(crate) type ClusterFn =
    fn(&MstClusterer<f64>) -> Result<Vec<ComponentStats<f64>>, ClusterError>;

pub(crate) fn four_points_on_a_line() -> Vec<Point<f64>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(6.0, 0.0),
    ]
}

pub(crate) fn three_blobs() -> Vec<Point<f64>> {
    vec![
        Point::new(1.0, 1.0),
        Point::new(20.0, 21.0),
        Point::new(1.2, 0.9),
        Point::new(40.0, 1.0),
        Point::new(20.3, 20.6),
        Point::new(0.8, 1.1),
        Point::new(40.2, 1.3),
        Point::new(19.9, 20.9),
        Point::new(39.8, 0.7),
    ]
}

pub(crate) fn test_two_clusters(cluster_fn: ClusterFn) {
    let data = four_points_on_a_line();
    let clusterer = MstClusterer::with_n_clusters(&data, 2);
    let stats = cluster_fn(&clusterer).unwrap();
    assert_eq!(
        vec![
            ComponentStats {
                size: 2,
                bbox: BoundingBox { min_x: 0.0, max_x: 1.0, min_y: 0.0, max_y: 0.0 },
                centroid: Point::new(0.5, 0.0),
            },
            ComponentStats {
                size: 2,
                bbox: BoundingBox { min_x: 5.0, max_x: 6.0, min_y: 0.0, max_y: 0.0 },
                centroid: Point::new(5.5, 0.0),
            },
        ],
        stats
    );
}

pub(crate) fn test_three_blobs(cluster_fn: ClusterFn) {
    let data = three_blobs();
    let clusterer = MstClusterer::with_n_clusters(&data, 3);
    let stats = cluster_fn(&clusterer).unwrap();
    assert_eq!(vec![3, 3, 3], stats.iter().map(|s| s.size).collect::<Vec<_>>());
    // Ordered by representative, which is the lowest index of each blob here
    assert!((stats[0].centroid.x - 1.0).abs() < 1e-9);
    assert!((stats[1].centroid.x - 20.066666666666666).abs() < 1e-9);
    assert!((stats[2].centroid.x - 40.0).abs() < 1e-9);
    assert_eq!(BoundingBox { min_x: 39.8, max_x: 40.2, min_y: 0.7, max_y: 1.3 }, stats[2].bbox);
}

pub(crate) fn test_single_cluster(cluster_fn: ClusterFn) {
    let data = three_blobs();
    let clusterer = MstClusterer::with_n_clusters(&data, 1);
    let stats = cluster_fn(&clusterer).unwrap();
    assert_eq!(1, stats.len());
    assert_eq!(9, stats[0].size);
    assert_eq!(BoundingBox { min_x: 0.8, max_x: 40.2, min_y: 0.7, max_y: 21.0 }, stats[0].bbox);
}

pub(crate) fn test_every_point_its_own_cluster(cluster_fn: ClusterFn) {
    let data = four_points_on_a_line();
    let clusterer = MstClusterer::with_n_clusters(&data, 4);
    let stats = cluster_fn(&clusterer).unwrap();
    assert_eq!(4, stats.len());
    for (point, stat) in data.iter().zip(&stats) {
        assert_eq!(1, stat.size);
        assert_eq!(*point, stat.centroid);
        assert_eq!(0.0, stat.bbox.width());
    }
}

pub(crate) fn test_single_point(cluster_fn: ClusterFn) {
    let data = vec![Point::new(2.0, 3.0)];
    let clusterer = MstClusterer::with_n_clusters(&data, 1);
    let stats = cluster_fn(&clusterer).unwrap();
    assert_eq!(1, stats.len());
    assert_eq!(Point::new(2.0, 3.0), stats[0].centroid);
}

pub(crate) fn test_empty_data(cluster_fn: ClusterFn) {
    let data: Vec<Point<f64>> = Vec::new();
    let zero_clusters = MstClusterer::with_n_clusters(&data, 0);
    assert!(cluster_fn(&zero_clusters).unwrap().is_empty());
    let one_cluster = MstClusterer::with_n_clusters(&data, 1);
    assert!(matches!(cluster_fn(&one_cluster), Err(ClusterError::InvalidArgument(..))));
}

pub(crate) fn test_too_many_clusters(cluster_fn: ClusterFn) {
    let data = four_points_on_a_line();
    let clusterer = MstClusterer::with_n_clusters(&data, 5);
    assert!(matches!(cluster_fn(&clusterer), Err(ClusterError::InvalidArgument(..))));
}

pub(crate) fn test_zero_clusters(cluster_fn: ClusterFn) {
    let data = four_points_on_a_line();
    let clusterer = MstClusterer::with_n_clusters(&data, 0);
    assert!(matches!(cluster_fn(&clusterer), Err(ClusterError::InvalidArgument(..))));
}

pub(crate) fn test_non_finite_coordinate(cluster_fn: ClusterFn) {
    let data = vec![Point::new(1.5, 2.0), Point::new(f64::INFINITY, 0.0)];
    let clusterer = MstClusterer::with_n_clusters(&data, 1);
    assert!(matches!(cluster_fn(&clusterer), Err(ClusterError::NonFiniteCoordinate(..))));

    let data = vec![Point::new(1.5, f64::NAN)];
    let clusterer = MstClusterer::with_n_clusters(&data, 1);
    assert!(matches!(cluster_fn(&clusterer), Err(ClusterError::NonFiniteCoordinate(..))));
}

pub(crate) fn test_manhattan_metric(cluster_fn: ClusterFn) {
    // Under Manhattan distance point 2 is closer to point 1, under Euclidean to point 3
    let data = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(6.0, 1.5),
    ];
    let params = ClusterParams::builder()
        .n_clusters(2)
        .dist_metric(DistanceMetric::Manhattan)
        .build();
    let manhattan = cluster_fn(&MstClusterer::new(&data, params)).unwrap();
    assert_eq!(vec![3, 1], manhattan.iter().map(|s| s.size).collect::<Vec<_>>());

    let euclidean = cluster_fn(&MstClusterer::with_n_clusters(&data, 2)).unwrap();
    assert_eq!(vec![2, 2], euclidean.iter().map(|s| s.size).collect::<Vec<_>>());
}
