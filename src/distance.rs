use crate::data_wrappers::Point;
use num_traits::Float;

/// Possible distance metrics that can be used when weighting the edges between points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Straight line distance. The default.
    #[default]
    Euclidean,
    /// Sum of the absolute coordinate differences.
    Manhattan,
}

impl DistanceMetric {
    pub fn calc_dist<T: Float>(&self, a: &Point<T>, b: &Point<T>) -> T {
        match *self {
            Self::Euclidean => distance(a, b),
            Self::Manhattan => manhattan_distance(a, b),
        }
    }
}

pub(crate) fn get_dist_func<T: Float>(metric: &DistanceMetric) -> fn(&Point<T>, &Point<T>) -> T {
    match metric {
        DistanceMetric::Euclidean => distance,
        DistanceMetric::Manhattan => manhattan_distance,
    }
}

/// Euclidean distance between two points.
///
/// # Examples
/// ```
///use mstcluster::{distance, Point};
///
///let d = distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
///assert_eq!(5.0, d);
/// ```
pub fn distance<T: Float>(a: &Point<T>, b: &Point<T>) -> T {
    (a.x - b.x).hypot(a.y - b.y)
}

pub(crate) fn manhattan_distance<T: Float>(a: &Point<T>, b: &Point<T>) -> T {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
