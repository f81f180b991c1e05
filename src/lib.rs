//! **graphlib** is a generic graph data-structure and algorithms library
//! in the style of the Boost Graph Library: a lattice of small capability
//! traits (see [`capability`]) that any storage engine or view can
//! implement a subset of, and a set of algorithm strategies written
//! against those traits rather than against one concrete graph type.
//!
//! The most common entry points are an [`engine::AdjacencyList`] or
//! [`engine::CachedAdjacencyList`] for construction, [`visit`] for
//! traversal and search, and the builders under [`algo`] (for example
//! [`algo::dijkstra::Dijkstra`]) for the reference algorithms.

pub mod algo;
pub mod capability;
pub mod container;
pub mod cost;
pub mod engine;
pub mod measure;
pub mod property;
pub mod views;
pub mod visit;

pub use capability::{
    AdjacencyGraph, BidirectionalGraph, BinaryIncidenceGraph, BipartiteGraph, EdgeListGraph,
    EdgeLookupGraph, EdgeRef, GraphBase, GraphRef, IncidenceGraph, MutableBipartiteGraph,
    MutableGraph, MutablePropertyGraph, Part, PropertyGraph, VertexListGraph,
};
pub use engine::{
    AdjacencyList, AdjacencyMatrix, BinaryAdjacencyList, BipartiteAdjacencyList,
    CachedAdjacencyList, Direction, GridGraph, InlineGraph, LazyGraph,
};
pub use views::{Complement, Computed, Filtered, Reversed};
pub use visit::{Control, Visitor};

pub use algo::Path;
