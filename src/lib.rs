//! Spatial clustering of points in the plane by minimum spanning tree cutting. Generic over
//! floating point numeric types.
//!
//! The points are treated as the nodes of a complete graph whose edges are weighted by the
//! distance between their end points. Kruskal's algorithm extracts the minimum spanning tree of
//! that graph, and removing the K - 1 heaviest tree edges leaves exactly K connected components:
//! the clusters. Each cluster is then summarised by its size, bounding box and centroid.
//!
//! Unlike density based methods, the number of clusters is chosen up front and every point
//! belongs to exactly one cluster. Cutting the longest tree edges produces the partition into K
//! clusters with the largest possible minimum distance between any two clusters, so the method
//! works best for well separated groups of points.
//!
//! Each stage of the pipeline is also exposed on its own: [`build_complete_graph`],
//! [`compute_mst`], [`partition_mst`], [`find_components`] and [`analyze`], with
//! [`DisjointSet`] providing the connectivity bookkeeping.
//!
//! # Examples
//! ```
//!use mstcluster::{MstClusterer, Point};
//!
//!let data: Vec<Point<f32>> = vec![
//!    Point::new(1.5, 2.2),
//!    Point::new(1.0, 1.1),
//!    Point::new(1.2, 1.4),
//!    Point::new(0.8, 1.0),
//!    Point::new(3.7, 4.0),
//!    Point::new(3.9, 3.9),
//!    Point::new(3.6, 4.1),
//!    Point::new(10.0, 10.0),
//!];
//!let clusterer = MstClusterer::with_n_clusters(&data, 3);
//!let stats = clusterer.cluster().unwrap();
//!let sizes: Vec<usize> = stats.iter().map(|s| s.size).collect();
//!assert_eq!(vec![4, 3, 1], sizes);
//! ```
//!
//! # References
//! * [Kruskal, J.B. On the shortest spanning subtree of a graph and the traveling salesman problem.](https://doi.org/10.1090/S0002-9939-1956-0078686-7)
//! * [Zahn, C.T. Graph-theoretical methods for detecting and describing gestalt clusters.](https://doi.org/10.1109/T-C.1971.223083)

pub use crate::centers::Center;
pub use crate::clusterer::{cluster, MstClusterer};
pub use crate::components::{analyze, find_components};
pub use crate::data_wrappers::{BoundingBox, ComponentStats, Edge, Point};
pub use crate::distance::{distance, DistanceMetric};
pub use crate::error::ClusterError;
pub use crate::graph::build_complete_graph;
#[cfg(feature = "parallel")]
pub use crate::graph::parallel::build_complete_graph_par;
pub use crate::hyper_parameters::{ClusterParams, ClusterParamsBuilder};
pub use crate::kruskal::{compute_mst, total_weight};
#[cfg(feature = "parallel")]
pub use crate::kruskal::compute_mst_par;
pub use crate::partition::partition_mst;
pub use crate::point_supplier::{FixedPoints, PointSupplier, UniformPoints};
pub use crate::union_find::DisjointSet;

mod centers;
mod clusterer;
mod components;
mod data_wrappers;
mod distance;
mod error;
mod graph;
mod hyper_parameters;
mod kruskal;
mod partition;
mod point_supplier;
mod union_find;
mod validation;
