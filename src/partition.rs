use crate::data_wrappers::Edge;
use crate::ClusterError;

/// Cuts a minimum spanning tree into `n_clusters` pieces by dropping its `n_clusters - 1`
/// heaviest edges. The tree must be sorted ascending by weight, as returned by
/// [`compute_mst`](crate::compute_mst), and span `n_nodes` nodes.
///
/// `n_clusters == 1` keeps the whole tree; `n_clusters == n_nodes` keeps no edges. The empty
/// graph is only partitioned into zero clusters.
///
/// # Errors
/// * `InvalidArgument` if `n_clusters` is outside `[1, n_nodes]`, unless both are zero.
///
/// # Examples
/// ```
///use mstcluster::{partition_mst, Edge};
///
///let mst = vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0), Edge::new(1, 2, 4.0)];
///let kept = partition_mst(&mst, 4, 2).unwrap();
///assert_eq!(&mst[..2], kept);
/// ```
pub fn partition_mst<T>(
    mst: &[Edge<T>],
    n_nodes: usize,
    n_clusters: usize,
) -> Result<&[Edge<T>], ClusterError> {
    validate_n_clusters(n_nodes, n_clusters)?;
    if mst.len() + 1 < n_nodes {
        eprintln!(
            "MSTCLUSTER_WARNING: spanning forest of {} edges over {n_nodes} nodes is not \
            connected, more than {n_clusters} clusters will result.",
            mst.len()
        );
    }
    let n_kept = mst.len().saturating_sub(n_clusters.saturating_sub(1));
    Ok(&mst[..n_kept])
}

pub(crate) fn validate_n_clusters(n_nodes: usize, n_clusters: usize) -> Result<(), ClusterError> {
    if n_nodes == 0 && n_clusters == 0 {
        return Ok(());
    }
    if n_clusters < 1 {
        return Err(ClusterError::InvalidArgument(String::from(
            "The number of clusters must be at least 1",
        )));
    }
    if n_clusters > n_nodes {
        return Err(ClusterError::InvalidArgument(format!(
            "Cannot form {n_clusters} clusters from {n_nodes} points"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n_nodes: usize) -> Vec<Edge<f64>> {
        (1..n_nodes).map(|i| Edge::new(i - 1, i, i as f64)).collect()
    }

    #[test]
    fn single_cluster_keeps_whole_tree() {
        let mst = chain(5);
        assert_eq!(&mst[..], partition_mst(&mst, 5, 1).unwrap());
    }

    #[test]
    fn one_cluster_per_node_keeps_nothing() {
        let mst = chain(5);
        assert!(partition_mst(&mst, 5, 5).unwrap().is_empty());
    }

    #[test]
    fn drops_heaviest_edges() {
        let mst = chain(6);
        let kept = partition_mst(&mst, 6, 3).unwrap();
        assert_eq!(3, kept.len());
        assert!(kept.iter().all(|edge| edge.weight <= 3.0));
    }

    #[test]
    fn single_node() {
        let mst = chain(1);
        assert!(partition_mst(&mst, 1, 1).unwrap().is_empty());
    }

    #[test]
    fn cluster_count_out_of_range() {
        let mst = chain(4);
        assert!(matches!(partition_mst(&mst, 4, 0), Err(ClusterError::InvalidArgument(..))));
        assert!(matches!(partition_mst(&mst, 4, 5), Err(ClusterError::InvalidArgument(..))));
        assert!(matches!(partition_mst(&chain(0), 0, 1), Err(ClusterError::InvalidArgument(..))));
    }

    #[test]
    fn empty_graph_into_zero_clusters() {
        assert!(partition_mst(&chain(0), 0, 0).unwrap().is_empty());
    }
}
