//! A view that swaps every edge's direction: an out-edge of `v` in the
//! underlying graph is an in-edge of `v` here, and vice versa. Holds only
//! a copy of the underlying graph reference — no edges are copied.

use crate::capability::{
    BidirectionalGraph, EdgeListGraph, EdgeLookupGraph, EdgeRef as EdgeRefTrait, GraphBase,
    GraphRef, IncidenceGraph, VertexListGraph,
};

#[derive(Copy, Clone)]
pub struct Reversed<G>(pub G);

impl<G: GraphBase> GraphBase for Reversed<G> {
    type VertexId = G::VertexId;
    type EdgeId = G::EdgeId;
}

impl<G: GraphBase + Copy> GraphRef for Reversed<G> {}

impl<G: BidirectionalGraph> IncidenceGraph for Reversed<G> {
    type OutgoingEdges = G::IncomingEdges;
    fn outgoing_edges(self, v: G::VertexId) -> Self::OutgoingEdges {
        self.0.incoming_edges(v)
    }
    fn destination(self, e: G::EdgeId) -> Option<G::VertexId> {
        self.0.source(e)
    }
    fn source(self, e: G::EdgeId) -> Option<G::VertexId> {
        self.0.destination(e)
    }
    fn out_degree(self, v: G::VertexId) -> usize {
        self.0.in_degree(v)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for Reversed<G> {
    type IncomingEdges = G::OutgoingEdges;
    fn incoming_edges(self, v: G::VertexId) -> Self::IncomingEdges {
        self.0.outgoing_edges(v)
    }
    fn in_degree(self, v: G::VertexId) -> usize {
        self.0.out_degree(v)
    }
}

impl<G: VertexListGraph> VertexListGraph for Reversed<G> {
    type Vertices = G::Vertices;
    fn vertices(self) -> Self::Vertices {
        self.0.vertices()
    }
    fn vertex_count(self) -> usize {
        self.0.vertex_count()
    }
}

/// An edge reference whose source/destination are swapped relative to the
/// edge reference it wraps.
#[derive(Copy, Clone)]
pub struct ReversedEdgeRef<E>(pub E);

impl<E: EdgeRefTrait> EdgeRefTrait for ReversedEdgeRef<E> {
    type VertexId = E::VertexId;
    type EdgeId = E::EdgeId;
    type Weight = E::Weight;
    fn source(&self) -> E::VertexId {
        self.0.destination()
    }
    fn destination(&self) -> E::VertexId {
        self.0.source()
    }
    fn weight(&self) -> &E::Weight {
        self.0.weight()
    }
    fn id(&self) -> E::EdgeId {
        self.0.id()
    }
}

impl<G: EdgeListGraph> EdgeListGraph for Reversed<G> {
    type EdgeRefType = ReversedEdgeRef<G::EdgeRefType>;
    type Edges = std::iter::Map<G::Edges, fn(G::EdgeRefType) -> ReversedEdgeRef<G::EdgeRefType>>;
    fn edges(self) -> Self::Edges {
        self.0.edges().map(ReversedEdgeRef)
    }
    fn edge_count(self) -> usize {
        self.0.edge_count()
    }
}

impl<G: EdgeLookupGraph> EdgeLookupGraph for Reversed<G> {
    fn edge(self, from: G::VertexId, to: G::VertexId) -> Option<G::EdgeId> {
        self.0.edge(to, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    #[test]
    fn reversing_swaps_degrees() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        assert_eq!((&g).out_degree(a), 1);
        assert_eq!((&g).out_degree(b), 0);
        let r = Reversed(&g);
        assert_eq!(r.out_degree(a), 0);
        assert_eq!(r.out_degree(b), 1);
    }

    #[test]
    fn reversing_twice_matches_the_original() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        let rr = Reversed(Reversed(&g));
        assert_eq!(rr.out_degree(a), (&g).out_degree(a));
        assert_eq!(rr.out_degree(b), (&g).out_degree(b));
    }
}
