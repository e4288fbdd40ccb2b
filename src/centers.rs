use crate::data_wrappers::{mean_point, Point};
use num_traits::Float;

/// Possible methodologies for calculating the center of clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    /// The elementwise mean of all data points in a cluster.
    /// The output is not guaranteed to be an observed data point.
    Centroid,
    /// The member point with the smallest total distance to all other members of its cluster.
    /// The output is always an observed data point.
    Medoid,
}

impl Center {
    /// Every label in `0..=max(labels)` must name at least one point.
    pub(crate) fn calc_centers<T: Float, F: Fn(&Point<T>, &Point<T>) -> T>(
        &self,
        data: &[Point<T>],
        labels: &[usize],
        dist_func: F,
    ) -> Vec<Point<T>> {
        let clusters = group_by_label(data, labels);
        match self {
            Center::Centroid => clusters.iter().filter_map(|members| mean_point(members)).collect(),
            Center::Medoid => {
                clusters.iter().filter_map(|members| medoid(members, &dist_func)).collect()
            }
        }
    }
}

fn group_by_label<T: Float>(data: &[Point<T>], labels: &[usize]) -> Vec<Vec<Point<T>>> {
    let n_clusters = labels.iter().max().map_or(0, |max| max + 1);
    let mut clusters = vec![Vec::new(); n_clusters];
    for (point, &label) in data.iter().zip(labels) {
        clusters[label].push(*point);
    }
    clusters
}

fn medoid<T: Float, F: Fn(&Point<T>, &Point<T>) -> T>(
    members: &[Point<T>],
    dist_func: &F,
) -> Option<Point<T>> {
    let mut best = None;
    let mut best_total = T::infinity();
    for candidate in members {
        let total = members
            .iter()
            .map(|other| dist_func(candidate, other))
            .fold(T::zero(), std::ops::Add::add);
        if best.is_none() || total < best_total {
            best_total = total;
            best = Some(*candidate);
        }
    }
    best
}
