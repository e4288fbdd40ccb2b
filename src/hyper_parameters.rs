use crate::distance::DistanceMetric;

// Defaults for parameters
const N_CLUSTERS_DEFAULT: usize = 1;
const DISTANCE_METRIC_DEFAULT: DistanceMetric = DistanceMetric::Euclidean;

/// A wrapper around the parameters used in minimum spanning tree clustering.
/// Values are not adjusted or clamped by the builder: a cluster count that cannot be satisfied
/// by the data is reported as an error when clustering runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterParams {
    pub(crate) n_clusters: usize,
    pub(crate) dist_metric: DistanceMetric,
}

/// Builder object to set custom parameters.
pub struct ClusterParamsBuilder {
    n_clusters: Option<usize>,
    dist_metric: Option<DistanceMetric>,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClusterParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ClusterParamsBuilder {
        ClusterParamsBuilder { n_clusters: None, dist_metric: None }
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    pub fn dist_metric(&self) -> DistanceMetric {
        self.dist_metric
    }
}

impl ClusterParamsBuilder {
    /// Sets the number of clusters, K. The minimum spanning tree over the data is cut into
    /// exactly this many connected pieces by removing its K - 1 heaviest edges. Must be between
    /// 1 and the number of data points. Defaults to 1.
    ///
    /// # Parameters
    /// * n_clusters - the desired number of clusters
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn n_clusters(mut self, n_clusters: usize) -> ClusterParamsBuilder {
        self.n_clusters = Some(n_clusters);
        self
    }

    /// Sets the distance metric used to weight the edges between data points.
    /// Defaults to Euclidean.
    ///
    /// # Parameters
    /// * dist_metric - the distance metric
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn dist_metric(mut self, dist_metric: DistanceMetric) -> ClusterParamsBuilder {
        self.dist_metric = Some(dist_metric);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> ClusterParams {
        ClusterParams {
            n_clusters: self.n_clusters.unwrap_or(N_CLUSTERS_DEFAULT),
            dist_metric: self.dist_metric.unwrap_or(DISTANCE_METRIC_DEFAULT),
        }
    }
}
