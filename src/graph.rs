use crate::data_wrappers::{Edge, Point};
use crate::distance::{get_dist_func, DistanceMetric};
use num_traits::Float;

#[cfg(feature = "parallel")]
pub(crate) mod parallel;

/// Builds the complete graph over the points: one edge for every unordered pair `(i, j)` with
/// `i < j`, weighted by the distance between the two points. Emits `n(n - 1) / 2` edges, so zero
/// or one points give an empty edge list.
///
/// # Examples
/// ```
///use mstcluster::{build_complete_graph, DistanceMetric, Point};
///
///let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 1.0)];
///let edges = build_complete_graph(&points, DistanceMetric::Euclidean);
///assert_eq!(3, edges.len());
///assert_eq!((0, 1, 5.0), (edges[0].left_node_id, edges[0].right_node_id, edges[0].weight));
/// ```
pub fn build_complete_graph<T: Float>(
    points: &[Point<T>],
    metric: DistanceMetric,
) -> Vec<Edge<T>> {
    let n_points = points.len();
    let dist_func = get_dist_func(&metric);
    let mut edges = Vec::with_capacity(n_edges(n_points));
    for i in 0..n_points {
        for j in (i + 1)..n_points {
            edges.push(Edge::new(i, j, dist_func(&points[i], &points[j])));
        }
    }
    edges
}

pub(crate) fn n_edges(n_points: usize) -> usize {
    n_points * n_points.saturating_sub(1) / 2
}
