//! The capability lattice: small, single-purpose graph traits.
//!
//! Each trait here declares one coherent set of operations a graph can
//! support. Concrete storage engines (`crate::engine`) implement only the
//! capabilities they can satisfy; algorithm strategies (`crate::algo`) are
//! bounded only by the capabilities they actually need.
//!
//! Every trait is implemented for `&'a G` rather than `G` directly, so a
//! graph can be passed "by reference value" (`Copy`) into an algorithm
//! without forcing the underlying engine itself to be `Copy`.

/// No operations; typing only. Every other capability extends this.
pub trait GraphBase {
    /// Opaque handle identifying a vertex within this graph. Only valid
    /// within the graph that issued it.
    type VertexId: Copy + Eq;
    /// Opaque handle identifying an edge within this graph.
    type EdgeId: Copy + Eq;
}

/// A cheap, copyable reference to a graph — the `Self` type every other
/// capability trait is actually implemented for.
pub trait GraphRef: Copy + GraphBase {}

impl<'a, G: GraphBase> GraphBase for &'a G {
    type VertexId = G::VertexId;
    type EdgeId = G::EdgeId;
}

impl<'a, G: GraphBase> GraphRef for &'a G {}

/// A reference to one edge: its endpoints and its weight.
pub trait EdgeRef: Copy {
    type VertexId;
    type EdgeId;
    type Weight;
    fn source(&self) -> Self::VertexId;
    fn destination(&self) -> Self::VertexId;
    fn weight(&self) -> &Self::Weight;
    fn id(&self) -> Self::EdgeId;
}

/// Finite out-edge iteration from a single vertex, plus endpoint resolution.
///
/// Contract: iteration is finite; `destination`/`source` are defined for
/// every edge the graph itself hands back; `out_degree` agrees with the
/// length of `outgoing_edges`.
pub trait IncidenceGraph: GraphRef {
    type OutgoingEdges: Iterator<Item = Self::EdgeId>;
    fn outgoing_edges(self, v: Self::VertexId) -> Self::OutgoingEdges;
    fn destination(self, e: Self::EdgeId) -> Option<Self::VertexId>;
    fn source(self, e: Self::EdgeId) -> Option<Self::VertexId>;
    fn out_degree(self, v: Self::VertexId) -> usize;
}

/// Adds in-edge iteration. Contract: sum of in-degrees equals sum of
/// out-degrees equals the edge count.
pub trait BidirectionalGraph: IncidenceGraph {
    type IncomingEdges: Iterator<Item = Self::EdgeId>;
    fn incoming_edges(self, v: Self::VertexId) -> Self::IncomingEdges;
    fn in_degree(self, v: Self::VertexId) -> usize;
}

/// Full vertex enumeration.
pub trait VertexListGraph: GraphRef {
    type Vertices: Iterator<Item = Self::VertexId>;
    fn vertices(self) -> Self::Vertices;
    fn vertex_count(self) -> usize;
}

/// Full edge enumeration.
pub trait EdgeListGraph: GraphRef {
    type EdgeRefType: EdgeRef<VertexId = Self::VertexId, EdgeId = Self::EdgeId>;
    type Edges: Iterator<Item = Self::EdgeRefType>;
    fn edges(self) -> Self::Edges;
    fn edge_count(self) -> usize;
}

/// The set of vertices reachable from `v` by a single out-edge (or either
/// direction, for engines that are inherently undirected, e.g. the matrix
/// engine and the grid engine).
pub trait AdjacencyGraph: IncidenceGraph {
    type AdjacentVertices: Iterator<Item = Self::VertexId>;
    fn adjacent_vertices(self, v: Self::VertexId) -> Self::AdjacentVertices;
}

/// O(1)-to-O(degree) point lookup of an edge by its endpoints.
pub trait EdgeLookupGraph: GraphRef {
    fn edge(self, from: Self::VertexId, to: Self::VertexId) -> Option<Self::EdgeId>;
}

/// Mutation. `add_edge` fails (returns `None`) iff an endpoint is not a
/// live vertex of the graph; a storage engine that forbids parallel edges
/// (e.g. the adjacency matrix) instead returns the already-existing edge.
pub trait MutableGraph: GraphBase {
    fn add_vertex(&mut self) -> Self::VertexId;
    fn remove_vertex(&mut self, v: Self::VertexId) -> bool;
    fn add_edge(&mut self, from: Self::VertexId, to: Self::VertexId) -> Option<Self::EdgeId>;
    fn remove_edge(&mut self, e: Self::EdgeId) -> bool;
}

/// Read access to each element's property bag, keyed by this graph's own
/// descriptors.
pub trait PropertyGraph: GraphBase {
    type VertexProperties: crate::property::PropertyMap<Key = Self::VertexId>;
    type EdgeProperties: crate::property::PropertyMap<Key = Self::EdgeId>;
    fn vertex_properties(&self) -> &Self::VertexProperties;
    fn edge_properties(&self) -> &Self::EdgeProperties;
}

/// Write access to the same maps; a write is visible to any subsequent
/// read on the same graph.
pub trait MutablePropertyGraph: PropertyGraph {
    fn vertex_properties_mut(&mut self) -> &mut Self::VertexProperties;
    fn edge_properties_mut(&mut self) -> &mut Self::EdgeProperties;
}

/// An `IncidenceGraph` whose per-vertex out-edges are capped at two,
/// distinguished as `left`/`right`. Satisfied by the binary adjacency-list
/// engine.
pub trait BinaryIncidenceGraph: IncidenceGraph {
    fn left_edge(self, v: Self::VertexId) -> Option<Self::EdgeId>;
    fn right_edge(self, v: Self::VertexId) -> Option<Self::EdgeId>;
}

/// A two-sided partition tag on vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Left,
    Right,
}

impl Part {
    pub fn opposite(self) -> Part {
        match self {
            Part::Left => Part::Right,
            Part::Right => Part::Left,
        }
    }
}

/// A graph whose every edge connects distinct partitions.
pub trait BipartiteGraph: IncidenceGraph {
    fn partition(self, v: Self::VertexId) -> Option<Part>;
    type LeftPartition: Iterator<Item = Self::VertexId>;
    type RightPartition: Iterator<Item = Self::VertexId>;
    fn left_partition(self) -> Self::LeftPartition;
    fn right_partition(self) -> Self::RightPartition;
}

/// Mutation that preserves the bipartition invariant.
pub trait MutableBipartiteGraph: MutableGraph {
    fn add_vertex_to(&mut self, part: Part) -> Self::VertexId;
    /// Retag `vertex`'s partition. Existing edges are not touched; it is
    /// the caller's responsibility to ensure they still connect distinct
    /// partitions afterward.
    fn move_vertex(&mut self, vertex: Self::VertexId, to: Part) -> bool;
}
