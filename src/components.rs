use crate::data_wrappers::{mean_point, BoundingBox, ComponentStats, Edge, Point};
use crate::union_find::DisjointSet;
use crate::ClusterError;
use num_traits::Float;
use std::collections::BTreeMap;

/// Groups the nodes `0..n_nodes` into the connected components of the given edges.
///
/// Every returned component is non-empty with its members in ascending order, and the
/// components are ordered by their disjoint set representative. Together they partition
/// `0..n_nodes`.
///
/// # Errors
/// * `IndexOutOfBounds` if an edge names a node outside `[0, n_nodes)`.
///
/// # Examples
/// ```
///use mstcluster::{find_components, Edge};
///
///let edges = vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)];
///let components = find_components(5, &edges).unwrap();
///assert_eq!(vec![vec![0, 1], vec![2, 3], vec![4]], components);
/// ```
pub fn find_components<T>(
    n_nodes: usize,
    edges: &[Edge<T>],
) -> Result<Vec<Vec<usize>>, ClusterError> {
    let mut union_find = DisjointSet::new(n_nodes);
    for edge in edges {
        union_find.union(edge.left_node_id, edge.right_node_id)?;
    }

    let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for node_id in 0..n_nodes {
        let root = union_find.find(node_id)?;
        components.entry(root).or_default().push(node_id);
    }
    Ok(components.into_values().collect())
}

/// Computes the size, bounding box and centroid of every component.
///
/// # Errors
/// * `IndexOutOfBounds` if a component names a point outside `points`.
/// * `InvalidArgument` if a component is empty.
pub fn analyze<T: Float>(
    components: &[Vec<usize>],
    points: &[Point<T>],
) -> Result<Vec<ComponentStats<T>>, ClusterError> {
    components.iter().map(|members| component_stats(members, points)).collect()
}

fn component_stats<T: Float>(
    members: &[usize],
    points: &[Point<T>],
) -> Result<ComponentStats<T>, ClusterError> {
    let mut bbox = BoundingBox {
        min_x: T::infinity(),
        max_x: T::neg_infinity(),
        min_y: T::infinity(),
        max_y: T::neg_infinity(),
    };
    let mut member_points = Vec::with_capacity(members.len());

    for &node_id in members {
        let point = points.get(node_id).ok_or_else(|| {
            ClusterError::IndexOutOfBounds(format!(
                "point {node_id} is outside a collection of {} points",
                points.len()
            ))
        })?;
        bbox.min_x = bbox.min_x.min(point.x);
        bbox.max_x = bbox.max_x.max(point.x);
        bbox.min_y = bbox.min_y.min(point.y);
        bbox.max_y = bbox.max_y.max(point.y);
        member_points.push(*point);
    }

    let centroid = mean_point(&member_points).ok_or_else(|| {
        ClusterError::InvalidArgument(String::from("Cannot summarise an empty component"))
    })?;
    Ok(ComponentStats { size: members.len(), bbox, centroid })
}
