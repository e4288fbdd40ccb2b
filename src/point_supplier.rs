use crate::data_wrappers::Point;
use crate::ClusterError;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A source of points to cluster.
///
/// Any `FnMut(usize) -> Vec<Point<T>>` closure is a supplier, which makes it easy to plug in
/// fixed data in tests.
pub trait PointSupplier<T> {
    /// Produces `n_points` points.
    fn supply(&mut self, n_points: usize) -> Vec<Point<T>>;
}

impl<T, F> PointSupplier<T> for F
where
    F: FnMut(usize) -> Vec<Point<T>>,
{
    fn supply(&mut self, n_points: usize) -> Vec<Point<T>> {
        self(n_points)
    }
}

/// Always supplies the same, fixed list of points, regardless of how many are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPoints<T> {
    points: Vec<Point<T>>,
}

impl<T> FixedPoints<T> {
    pub fn new(points: Vec<Point<T>>) -> Self {
        FixedPoints { points }
    }
}

impl<T: Copy> PointSupplier<T> for FixedPoints<T> {
    fn supply(&mut self, _n_points: usize) -> Vec<Point<T>> {
        self.points.clone()
    }
}

/// Supplies points drawn uniformly at random from the square `[low, high) x [low, high)`.
///
/// # Examples
/// ```
///use mstcluster::{PointSupplier, UniformPoints};
///
///let mut supplier = UniformPoints::new(0.0, 10.0).unwrap().with_seed(42);
///let points = supplier.supply(5);
///assert_eq!(5, points.len());
///assert!(points.iter().all(|p| (0.0..10.0).contains(&p.x) && (0.0..10.0).contains(&p.y)));
/// ```
pub struct UniformPoints<T: SampleUniform> {
    range: Uniform<T>,
    rng: StdRng,
}

impl<T: Float + SampleUniform> UniformPoints<T> {
    /// Creates a supplier seeded from system entropy.
    ///
    /// # Errors
    /// * `InvalidArgument` if either bound is not finite, `low >= high`, or `high - low`
    ///   overflows.
    pub fn new(low: T, high: T) -> Result<Self, ClusterError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ClusterError::InvalidArgument(String::from(
                "The bounds of the point range must be finite",
            )));
        }
        if low >= high {
            return Err(ClusterError::InvalidArgument(String::from(
                "The lower bound of the point range must be below the upper bound",
            )));
        }
        if !(high - low).is_finite() {
            return Err(ClusterError::InvalidArgument(String::from(
                "The width of the point range must be finite",
            )));
        }
        Ok(UniformPoints { range: Uniform::new(low, high), rng: StdRng::from_entropy() })
    }

    /// Reseeds the generator so the same sequence of points is produced on every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<T: Float + SampleUniform> PointSupplier<T> for UniformPoints<T> {
    fn supply(&mut self, n_points: usize) -> Vec<Point<T>> {
        (0..n_points)
            .map(|_| {
                let x = self.range.sample(&mut self.rng);
                let y = self.range.sample(&mut self.rng);
                Point::new(x, y)
            })
            .collect()
    }
}

impl Default for UniformPoints<f64> {
    /// Points in `[0, 100) x [0, 100)`.
    fn default() -> Self {
        UniformPoints { range: Uniform::new(0.0, 100.0), rng: StdRng::from_entropy() }
    }
}
