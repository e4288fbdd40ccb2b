#![cfg(feature = "parallel")]
use crate::data_wrappers::{Edge, Point};
use crate::distance::{get_dist_func, DistanceMetric};
use num_traits::Float;
use rayon::prelude::*;

/// Parallel version of [`build_complete_graph`](crate::build_complete_graph). Rows of the
/// upper triangle are generated concurrently; the collected edge list has the same order as
/// the serial builder's.
pub fn build_complete_graph_par<T>(points: &[Point<T>], metric: DistanceMetric) -> Vec<Edge<T>>
where
    T: Float + Send + Sync,
{
    let n_points = points.len();
    let dist_func = get_dist_func(&metric);
    (0..n_points)
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..n_points).map(move |j| Edge::new(i, j, dist_func(&points[i], &points[j])))
        })
        .collect()
}
