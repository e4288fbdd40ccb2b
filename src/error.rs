use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from invalid clustering input or misuse of the pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A parameter is outside its valid range, e.g. a cluster count of zero or more clusters
    /// than points.
    InvalidArgument(String),
    /// A node index outside `[0, n)` was passed to a disjoint set operation.
    IndexOutOfBounds(String),
    /// A point has an infinite or NaN coordinate.
    NonFiniteCoordinate(String),
}

impl Error for ClusterError {}

impl Display for ClusterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ClusterError::InvalidArgument(msg) => format!("Invalid argument: {msg}"),
            ClusterError::IndexOutOfBounds(msg) => format!("Index out of bounds: {msg}"),
            ClusterError::NonFiniteCoordinate(msg) => format!("Non finite coordinate: {msg}"),
        };
        write!(f, "{message}")
    }
}
