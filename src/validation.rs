use crate::data_wrappers::Point;
use crate::partition::validate_n_clusters;
use crate::{ClusterError, ClusterParams};
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Point<T>],
    params: &'a ClusterParams,
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Point<T>], params: &'a ClusterParams) -> Self {
        Self { data, params }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), ClusterError> {
        for (n, point) in self.data.iter().enumerate() {
            if !point.is_finite() {
                return Err(ClusterError::NonFiniteCoordinate(format!(
                    "{n}th point contains non-finite coordinate(s)"
                )));
            }
        }
        validate_n_clusters(self.data.len(), self.params.n_clusters)
    }

    pub(crate) fn validate_labels(&self, labels: &[usize]) -> Result<(), ClusterError> {
        if labels.len() != self.data.len() {
            return Err(ClusterError::InvalidArgument(String::from(
                "The length of the labels must equal the length of the original clustering data.",
            )));
        }
        if let Some(label) = labels.iter().find(|&&label| label >= self.params.n_clusters) {
            return Err(ClusterError::InvalidArgument(format!(
                "Label {label} is not below the number of clusters ({})",
                self.params.n_clusters
            )));
        }
        let mut used = vec![false; self.params.n_clusters];
        for &label in labels {
            used[label] = true;
        }
        if let Some(missing) = used.iter().position(|&is_used| !is_used) {
            return Err(ClusterError::InvalidArgument(format!(
                "Cluster {missing} has no labelled points"
            )));
        }
        Ok(())
    }
}
