use crate::components::{analyze, find_components};
use crate::data_wrappers::{ComponentStats, Edge, Point};
use crate::distance::get_dist_func;
use crate::graph::build_complete_graph;
use crate::kruskal::compute_mst;
use crate::partition::{partition_mst, validate_n_clusters};
use crate::point_supplier::PointSupplier;
use crate::validation::DataValidator;
use crate::{Center, ClusterError, ClusterParams};
use num_traits::Float;

/// Clusters points into a fixed number of groups by cutting their minimum spanning tree.
/// Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct MstClusterer<'a, T> {
    data: &'a [Point<T>],
    n_samples: usize,
    params: ClusterParams,
}

impl<'a, T: Float> MstClusterer<'a, T> {
    /// Creates an instance of the clustering model using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `data` - a reference to the points to cluster. The points must have finite
    ///            coordinates.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The model instance.
    ///
    /// # Examples
    /// ```
    ///use mstcluster::{ClusterParams, DistanceMetric, MstClusterer, Point};
    ///
    ///let data: Vec<Point<f32>> = vec![
    ///    Point::new(1.3, 1.1),
    ///    Point::new(1.2, 1.2),
    ///    Point::new(3.7, 4.0),
    ///    Point::new(3.9, 3.9),
    ///];
    ///let params = ClusterParams::builder()
    ///    .n_clusters(2)
    ///    .dist_metric(DistanceMetric::Manhattan)
    ///    .build();
    ///let clusterer = MstClusterer::new(&data, params);
    /// ```
    pub fn new(data: &'a [Point<T>], params: ClusterParams) -> Self {
        MstClusterer { data, n_samples: data.len(), params }
    }

    /// Creates an instance of the clustering model that splits the data into `n_clusters`
    /// clusters with Euclidean distances.
    pub fn with_n_clusters(data: &'a [Point<T>], n_clusters: usize) -> Self {
        let params = ClusterParams::builder().n_clusters(n_clusters).build();
        MstClusterer::new(data, params)
    }

    /// Performs clustering on the points passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains the size, bounding box and centroid of each
    ///   cluster, ordered as the clusters returned by [`MstClusterer::components`]. An error is
    ///   returned if a point has a non-finite coordinate or if the number of clusters is not
    ///   between 1 and the number of points.
    ///
    /// # Examples
    /// ```
    ///use mstcluster::{MstClusterer, Point};
    ///
    ///let data = vec![
    ///    Point::new(0.0, 0.0),
    ///    Point::new(1.0, 0.0),
    ///    Point::new(5.0, 0.0),
    ///    Point::new(6.0, 0.0),
    ///];
    ///let clusterer = MstClusterer::with_n_clusters(&data, 2);
    ///let stats = clusterer.cluster().unwrap();
    ///assert_eq!(2, stats.len());
    ///assert_eq!(Point::new(0.5, 0.0), stats[0].centroid);
    ///assert_eq!(Point::new(5.5, 0.0), stats[1].centroid);
    /// ```
    pub fn cluster(&self) -> Result<Vec<ComponentStats<T>>, ClusterError> {
        let components = self.components()?;
        analyze(&components, self.data)
    }

    /// Partitions the indices of the points into clusters. Members of each cluster are in
    /// ascending order.
    pub fn components(&self) -> Result<Vec<Vec<usize>>, ClusterError> {
        self.validate_input_data()?;
        let edges = build_complete_graph(self.data, self.params.dist_metric);
        let min_spanning_tree = compute_mst(self.n_samples, &edges)?;
        self.split_min_spanning_tree(&min_spanning_tree)
    }

    /// Labels each point with the position of its cluster in [`MstClusterer::components`].
    ///
    /// # Examples
    /// ```
    ///use mstcluster::{MstClusterer, Point};
    ///
    ///let data = vec![
    ///    Point::new(5.0, 0.0),
    ///    Point::new(0.0, 0.0),
    ///    Point::new(6.0, 0.0),
    ///    Point::new(1.0, 0.0),
    ///];
    ///let labels = MstClusterer::with_n_clusters(&data, 2).labels().unwrap();
    ///assert_eq!(vec![0, 1, 0, 1], labels);
    /// ```
    pub fn labels(&self) -> Result<Vec<usize>, ClusterError> {
        let components = self.components()?;
        Ok(self.label_data(&components))
    }

    /// Calculates the centers of the clusters just calculated.
    ///
    /// # Parameters
    /// * `center` - the type of center to calculate.
    /// * `labels` - a reference to the labels calculated by a call to `MstClusterer::labels`.
    ///
    /// # Returns
    /// * A vector of the cluster centers. The index of the center is the cluster label.
    ///
    /// # Examples
    /// ```
    ///use mstcluster::{Center, MstClusterer, Point};
    ///
    ///let data = vec![
    ///    Point::new(0.0, 0.0),
    ///    Point::new(1.0, 0.0),
    ///    Point::new(2.0, 0.0),
    ///    Point::new(9.0, 9.0),
    ///];
    ///let clusterer = MstClusterer::with_n_clusters(&data, 2);
    ///let labels = clusterer.labels().unwrap();
    ///let medoids = clusterer.calc_centers(Center::Medoid, &labels).unwrap();
    ///assert_eq!(vec![Point::new(1.0, 0.0), Point::new(9.0, 9.0)], medoids);
    /// ```
    pub fn calc_centers(
        &self,
        center: Center,
        labels: &[usize],
    ) -> Result<Vec<Point<T>>, ClusterError> {
        DataValidator::new(self.data, &self.params).validate_labels(labels)?;
        let dist_func = get_dist_func(&self.params.dist_metric);
        Ok(center.calc_centers(self.data, labels, dist_func))
    }

    fn validate_input_data(&self) -> Result<(), ClusterError> {
        DataValidator::new(self.data, &self.params).validate_input_data()
    }

    fn split_min_spanning_tree(
        &self,
        min_spanning_tree: &[Edge<T>],
    ) -> Result<Vec<Vec<usize>>, ClusterError> {
        let kept_edges =
            partition_mst(min_spanning_tree, self.n_samples, self.params.n_clusters)?;
        find_components(self.n_samples, kept_edges)
    }

    fn label_data(&self, components: &[Vec<usize>]) -> Vec<usize> {
        let mut labels = vec![0; self.n_samples];
        for (label, members) in components.iter().enumerate() {
            members.iter().for_each(|&id| labels[id] = label);
        }
        labels
    }
}

#[cfg(feature = "parallel")]
impl<'a, T: Float + Send + Sync> MstClusterer<'a, T> {
    /// Performs clustering on the points passed to the constructor, building and sorting the
    /// edges of the complete graph in parallel. The result is identical to
    /// [`MstClusterer::cluster`]. Not recommended for small datasets.
    ///
    /// # Examples
    /// ```
    ///use mstcluster::{MstClusterer, Point};
    ///
    ///let data = vec![
    ///    Point::new(0.0, 0.0),
    ///    Point::new(1.0, 0.0),
    ///    Point::new(5.0, 0.0),
    ///    Point::new(6.0, 0.0),
    ///];
    ///let clusterer = MstClusterer::with_n_clusters(&data, 2);
    ///assert_eq!(clusterer.cluster().unwrap(), clusterer.cluster_par().unwrap());
    /// ```
    pub fn cluster_par(&self) -> Result<Vec<ComponentStats<T>>, ClusterError> {
        let components = self.components_par()?;
        analyze(&components, self.data)
    }

    /// Parallel version of [`MstClusterer::components`].
    pub fn components_par(&self) -> Result<Vec<Vec<usize>>, ClusterError> {
        use crate::graph::parallel::build_complete_graph_par;
        use crate::kruskal::compute_mst_par;

        self.validate_input_data()?;
        let edges = build_complete_graph_par(self.data, self.params.dist_metric);
        let min_spanning_tree = compute_mst_par(self.n_samples, &edges)?;
        self.split_min_spanning_tree(&min_spanning_tree)
    }
}

/// Generates `n_points` points from `supplier` and clusters them into `n_clusters` clusters
/// with Euclidean distances.
///
/// # Errors
/// * `InvalidArgument` if `n_clusters` is not between 1 and `n_points`, or if the supplier
///   returns a different number of points than requested.
/// * `NonFiniteCoordinate` if a supplied point has a non-finite coordinate.
///
/// # Examples
/// ```
///use mstcluster::{cluster, ComponentStats, UniformPoints};
///
///let supplier = UniformPoints::new(0.0, 100.0).unwrap().with_seed(1);
///let stats: Vec<ComponentStats<f64>> = cluster(50, 4, supplier).unwrap();
///assert_eq!(4, stats.len());
///assert_eq!(50, stats.iter().map(|s| s.size).sum::<usize>());
/// ```
pub fn cluster<T, S>(
    n_points: usize,
    n_clusters: usize,
    mut supplier: S,
) -> Result<Vec<ComponentStats<T>>, ClusterError>
where
    T: Float,
    S: PointSupplier<T>,
{
    validate_n_clusters(n_points, n_clusters)?;
    let points = supplier.supply(n_points);
    if points.len() != n_points {
        return Err(ClusterError::InvalidArgument(format!(
            "Point supplier returned {} points, {n_points} were requested",
            points.len()
        )));
    }
    MstClusterer::with_n_clusters(&points, n_clusters).cluster()
}
