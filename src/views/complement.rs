//! The complement view: an edge exists from `u` to `v` here exactly when
//! no edge from `u` to `v` exists in the underlying graph (and `u != v`).
//! Computed entirely on demand by probing the underlying graph's edge
//! lookup; nothing is materialized.

use crate::capability::{
    AdjacencyGraph, EdgeListGraph, EdgeLookupGraph, EdgeRef as EdgeRefTrait, GraphBase, GraphRef,
    IncidenceGraph, VertexListGraph,
};

#[derive(Copy, Clone)]
pub struct Complement<G>(pub G);

impl<G: GraphBase> GraphBase for Complement<G> {
    type VertexId = G::VertexId;
    type EdgeId = (G::VertexId, G::VertexId);
}

impl<G: GraphBase + Copy> GraphRef for Complement<G> {}

#[derive(Copy, Clone)]
pub struct ComplementEdgeRef<V> {
    source: V,
    destination: V,
}

impl<V: Copy + Eq + 'static> EdgeRefTrait for ComplementEdgeRef<V> {
    type VertexId = V;
    type EdgeId = (V, V);
    type Weight = ();
    fn source(&self) -> V {
        self.source
    }
    fn destination(&self) -> V {
        self.destination
    }
    fn weight(&self) -> &() {
        &()
    }
    fn id(&self) -> (V, V) {
        (self.source, self.destination)
    }
}

impl<G> IncidenceGraph for Complement<G>
where
    G: AdjacencyGraph + VertexListGraph + EdgeLookupGraph + Copy,
{
    type OutgoingEdges = std::vec::IntoIter<(G::VertexId, G::VertexId)>;

    fn outgoing_edges(self, v: G::VertexId) -> Self::OutgoingEdges {
        self.0
            .vertices()
            .filter(|&w| w != v && self.0.edge(v, w).is_none())
            .map(|w| (v, w))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn destination(self, e: (G::VertexId, G::VertexId)) -> Option<G::VertexId> {
        Some(e.1)
    }

    fn source(self, e: (G::VertexId, G::VertexId)) -> Option<G::VertexId> {
        Some(e.0)
    }

    fn out_degree(self, v: G::VertexId) -> usize {
        self.0.vertices().filter(|&w| w != v && self.0.edge(v, w).is_none()).count()
    }
}

impl<G> VertexListGraph for Complement<G>
where
    G: VertexListGraph,
{
    type Vertices = G::Vertices;
    fn vertices(self) -> Self::Vertices {
        self.0.vertices()
    }
    fn vertex_count(self) -> usize {
        self.0.vertex_count()
    }
}

impl<G> EdgeListGraph for Complement<G>
where
    G: AdjacencyGraph + VertexListGraph + EdgeLookupGraph + Copy,
{
    type EdgeRefType = ComplementEdgeRef<G::VertexId>;
    type Edges = std::vec::IntoIter<ComplementEdgeRef<G::VertexId>>;

    fn edges(self) -> Self::Edges {
        let vertices: Vec<_> = self.0.vertices().collect();
        let mut out = Vec::new();
        for &u in &vertices {
            for &v in &vertices {
                if u != v && self.0.edge(u, v).is_none() {
                    out.push(ComplementEdgeRef { source: u, destination: v });
                }
            }
        }
        out.into_iter()
    }

    /// Assumes the underlying graph has no self-loops and no parallel
    /// edges, so the complement of a simple graph on `n` vertices has
    /// exactly `n*(n-1) - base.edge_count()` edges — computed in O(1)
    /// rather than by materializing every pair.
    fn edge_count(self) -> usize {
        let n = self.0.vertex_count();
        n.saturating_mul(n.saturating_sub(1)) - self.0.edge_count().min(n.saturating_mul(n.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    #[test]
    fn complement_contains_exactly_the_missing_edges() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        let comp = Complement(&g);
        let edges: Vec<_> = comp.outgoing_edges(a).collect();
        assert_eq!(edges, vec![(a, c)]);
    }

    #[test]
    fn complement_is_empty_for_a_complete_graph() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, a);
        let comp = Complement(&g);
        assert_eq!(comp.out_degree(a), 0);
        assert_eq!(comp.out_degree(b), 0);
    }

    #[test]
    fn edge_count_formula_matches_materialized_edges() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        let comp = Complement(&g);
        assert_eq!(comp.edge_count(), comp.edges().count());
        let _ = c;
    }
}
