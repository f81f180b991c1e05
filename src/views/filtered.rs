//! A view that keeps only the vertices and edges two predicates accept.
//! An edge survives only if both its endpoints and the edge itself pass.

use crate::capability::{
    AdjacencyGraph, EdgeListGraph, EdgeRef as EdgeRefTrait, GraphBase, GraphRef, IncidenceGraph,
    VertexListGraph,
};

#[derive(Copy, Clone)]
pub struct Filtered<G, VF, EF> {
    graph: G,
    vertex_filter: VF,
    edge_filter: EF,
}

impl<G, VF, EF> Filtered<G, VF, EF> {
    pub fn new(graph: G, vertex_filter: VF, edge_filter: EF) -> Self {
        Filtered { graph, vertex_filter, edge_filter }
    }
}

/// Keep every vertex, filter only edges.
pub fn on_edges<G, EF>(graph: G, edge_filter: EF) -> Filtered<G, fn(G::VertexId) -> bool, EF>
where
    G: GraphBase,
    EF: Fn(G::EdgeId) -> bool + Copy,
{
    Filtered::new(graph, (|_| true) as fn(G::VertexId) -> bool, edge_filter)
}

/// Keep every edge whose endpoints both survive, filter only vertices.
pub fn on_vertices<G, VF>(graph: G, vertex_filter: VF) -> Filtered<G, VF, fn(G::EdgeId) -> bool>
where
    G: GraphBase,
    VF: Fn(G::VertexId) -> bool + Copy,
{
    Filtered::new(graph, vertex_filter, (|_| true) as fn(G::EdgeId) -> bool)
}

impl<G: GraphBase, VF, EF> GraphBase for Filtered<G, VF, EF> {
    type VertexId = G::VertexId;
    type EdgeId = G::EdgeId;
}

impl<G: GraphBase + Copy, VF: Copy, EF: Copy> GraphRef for Filtered<G, VF, EF> {}

impl<G, VF, EF> IncidenceGraph for Filtered<G, VF, EF>
where
    G: IncidenceGraph,
    VF: Fn(G::VertexId) -> bool + Copy,
    EF: Fn(G::EdgeId) -> bool + Copy,
{
    type OutgoingEdges = std::vec::IntoIter<G::EdgeId>;

    fn outgoing_edges(self, v: G::VertexId) -> Self::OutgoingEdges {
        if !(self.vertex_filter)(v) {
            return Vec::new().into_iter();
        }
        self.graph
            .outgoing_edges(v)
            .filter(|&e| {
                (self.edge_filter)(e)
                    && self.graph.destination(e).map_or(false, |d| (self.vertex_filter)(d))
            })
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn destination(self, e: G::EdgeId) -> Option<G::VertexId> {
        self.graph.destination(e).filter(|&d| (self.vertex_filter)(d))
    }

    fn source(self, e: G::EdgeId) -> Option<G::VertexId> {
        self.graph.source(e).filter(|&s| (self.vertex_filter)(s))
    }

    fn out_degree(self, v: G::VertexId) -> usize {
        self.outgoing_edges(v).count()
    }
}

impl<G, VF, EF> AdjacencyGraph for Filtered<G, VF, EF>
where
    G: AdjacencyGraph,
    VF: Fn(G::VertexId) -> bool + Copy,
    EF: Fn(G::EdgeId) -> bool + Copy,
{
    type AdjacentVertices = std::vec::IntoIter<G::VertexId>;
    fn adjacent_vertices(self, v: G::VertexId) -> Self::AdjacentVertices {
        self.outgoing_edges(v)
            .filter_map(|e| self.graph.destination(e))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<G, VF, EF> VertexListGraph for Filtered<G, VF, EF>
where
    G: VertexListGraph,
    VF: Fn(G::VertexId) -> bool + Copy,
    EF: Copy,
{
    type Vertices = std::vec::IntoIter<G::VertexId>;
    fn vertices(self) -> Self::Vertices {
        self.graph.vertices().filter(|&v| (self.vertex_filter)(v)).collect::<Vec<_>>().into_iter()
    }
    fn vertex_count(self) -> usize {
        self.graph.vertices().filter(|&v| (self.vertex_filter)(v)).count()
    }
}

impl<G, VF, EF> EdgeListGraph for Filtered<G, VF, EF>
where
    G: EdgeListGraph,
    VF: Fn(G::VertexId) -> bool + Copy,
    EF: Fn(G::EdgeId) -> bool + Copy,
{
    type EdgeRefType = G::EdgeRefType;
    type Edges = std::vec::IntoIter<G::EdgeRefType>;
    fn edges(self) -> Self::Edges {
        self.graph
            .edges()
            .filter(|e| {
                (self.edge_filter)(e.id())
                    && (self.vertex_filter)(e.source())
                    && (self.vertex_filter)(e.destination())
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn edge_count(self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    #[test]
    fn vertex_filter_hides_edges_through_excluded_vertices() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, c);
        let f = on_vertices(&g, move |v| v != b);
        assert_eq!(f.out_degree(a), 0);
        assert_eq!(f.vertex_count(), 2);
    }

    #[test]
    fn edge_filter_hides_only_matching_edges() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        g.add_edge(a, c);
        let f = on_edges(&g, move |e| e != ab);
        assert_eq!(f.out_degree(a), 1);
    }
}
