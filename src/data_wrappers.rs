use num_traits::Float;
use std::cmp::Ordering;

/// A point in the plane. Points are identified by their index in the collection they belong to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Elementwise mean of `points`, `None` when there are none.
///
/// Falls back to summing pre-divided coordinates when the plain sum overflows, so the mean of
/// finite points stays finite.
pub(crate) fn mean_point<T: Float>(points: &[Point<T>]) -> Option<Point<T>> {
    if points.is_empty() {
        return None;
    }
    let count = T::from(points.len())?;
    let x = mean(points.iter().map(|point| point.x), count);
    let y = mean(points.iter().map(|point| point.y), count);
    Some(Point::new(x, y))
}

fn mean<T: Float, I: Iterator<Item = T> + Clone>(values: I, count: T) -> T {
    let sum = values.clone().fold(T::zero(), |acc, value| acc + value);
    if sum.is_finite() {
        sum / count
    } else {
        values.fold(T::zero(), |acc, value| acc + value / count)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}

/// An undirected, weighted edge between two points, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
    pub left_node_id: usize,
    pub right_node_id: usize,
    pub weight: T,
}

impl<T: Float> Edge<T> {
    pub fn new(left_node_id: usize, right_node_id: usize, weight: T) -> Self {
        Edge { left_node_id, right_node_id, weight }
    }

    /// The node pair with the smaller index first, so `(u, v)` and `(v, u)` compare equal.
    pub(crate) fn ordered_nodes(&self) -> (usize, usize) {
        if self.left_node_id <= self.right_node_id {
            (self.left_node_id, self.right_node_id)
        } else {
            (self.right_node_id, self.left_node_id)
        }
    }

    /// Ascending by weight, ties broken by the ordered node pair. Weights must not be NaN.
    pub(crate) fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.ordered_nodes().cmp(&other.ordered_nodes()))
    }
}

/// Axis-aligned bounding box of a group of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T> {
    pub min_x: T,
    pub max_x: T,
    pub min_y: T,
    pub max_y: T,
}

impl<T: Float> BoundingBox<T> {
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }
}

/// Geometric summary of one cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentStats<T> {
    /// Number of points in the cluster.
    pub size: usize,
    pub bbox: BoundingBox<T>,
    /// Arithmetic mean of the member coordinates.
    pub centroid: Point<T>,
}
