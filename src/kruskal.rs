use crate::data_wrappers::Edge;
use crate::union_find::DisjointSet;
use crate::ClusterError;
use num_traits::Float;

/// Computes a minimum spanning forest over `n_nodes` nodes with Kruskal's algorithm.
///
/// The edges need not be sorted: a working copy is sorted ascending by weight, ties broken by
/// node pair, and each edge is accepted if it joins two previously separate components. The
/// accepted edges are returned in acceptance order, so ascending by weight. For a connected
/// graph this is a minimum spanning tree with `n_nodes - 1` edges; otherwise a spanning forest
/// with one tree per connected component.
///
/// # Errors
/// * `InvalidArgument` if any edge weight is NaN.
/// * `IndexOutOfBounds` if an edge names a node outside `[0, n_nodes)`.
///
/// # Examples
/// ```
///use mstcluster::{compute_mst, Edge};
///
///let edges = vec![Edge::new(0, 1, 2.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 3.0)];
///let mst = compute_mst(3, &edges).unwrap();
///assert_eq!(vec![Edge::new(1, 2, 1.0), Edge::new(0, 1, 2.0)], mst);
/// ```
pub fn compute_mst<T: Float>(
    n_nodes: usize,
    edges: &[Edge<T>],
) -> Result<Vec<Edge<T>>, ClusterError> {
    validate_weights(edges)?;
    let mut sorted_edges = edges.to_vec();
    sort_edges_by_weight(&mut sorted_edges);
    accept_edges(n_nodes, &sorted_edges)
}

/// Parallel version of [`compute_mst`]. Only the sort runs concurrently: it completes before
/// the acceptance pass starts, which then walks the edges strictly in ascending order.
#[cfg(feature = "parallel")]
pub fn compute_mst_par<T>(n_nodes: usize, edges: &[Edge<T>]) -> Result<Vec<Edge<T>>, ClusterError>
where
    T: Float + Send + Sync,
{
    use rayon::prelude::*;

    validate_weights(edges)?;
    let mut sorted_edges = edges.to_vec();
    sorted_edges.par_sort_unstable_by(|a, b| a.cmp_by_weight(b));
    accept_edges(n_nodes, &sorted_edges)
}

/// Sum of the weights of the edges.
pub fn total_weight<T: Float>(edges: &[Edge<T>]) -> T {
    edges.iter().map(|edge| edge.weight).fold(T::zero(), std::ops::Add::add)
}

pub(crate) fn sort_edges_by_weight<T: Float>(edges: &mut [Edge<T>]) {
    edges.sort_unstable_by(|a, b| a.cmp_by_weight(b));
}

fn validate_weights<T: Float>(edges: &[Edge<T>]) -> Result<(), ClusterError> {
    match edges.iter().position(|edge| edge.weight.is_nan()) {
        Some(n) => Err(ClusterError::InvalidArgument(format!("{n}th edge has a NaN weight"))),
        None => Ok(()),
    }
}

fn accept_edges<T: Float>(
    n_nodes: usize,
    sorted_edges: &[Edge<T>],
) -> Result<Vec<Edge<T>>, ClusterError> {
    let mut union_find = DisjointSet::new(n_nodes);
    let mut mst = Vec::with_capacity(n_nodes.saturating_sub(1));

    for edge in sorted_edges {
        if union_find.union(edge.left_node_id, edge.right_node_id)? {
            mst.push(*edge);
        }
    }
    Ok(mst)
}
