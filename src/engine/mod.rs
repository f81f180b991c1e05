//! Concrete storage engines. Each engine owns its own vertex/edge id
//! types and implements whichever capability traits from
//! [`crate::capability`] it can actually satisfy; algorithms are written
//! against those traits, not against any one engine.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod bipartite;
pub mod grid;
pub mod inline;
pub mod lazy;

pub use adjacency_list::{AdjacencyList, BinaryAdjacencyList, CachedAdjacencyList};
pub use adjacency_matrix::AdjacencyMatrix;
pub use bipartite::BipartiteAdjacencyList;
pub use grid::{Direction, GridGraph};
pub use inline::InlineGraph;
pub use lazy::LazyGraph;
