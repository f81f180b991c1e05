//! A graph defined entirely by one closure `V -> Vec<V>` computing a
//! vertex's neighbors on demand — no vertex or edge is ever stored. Useful
//! for state spaces too large (or unbounded) to materialize, e.g. puzzle
//! states or an infinite grid.
//!
//! Because nothing is stored, only [`IncidenceGraph`]/[`AdjacencyGraph`]
//! are implemented: there is no way to enumerate "all vertices" or "all
//! edges" of a graph that was never built.

use std::marker::PhantomData;

use crate::capability::{AdjacencyGraph, EdgeRef as EdgeRefTrait, GraphBase, IncidenceGraph};

#[derive(Copy, Clone)]
pub struct LazyEdgeRef<V> {
    source: V,
    destination: V,
}

impl<V: Copy + 'static> EdgeRefTrait for LazyEdgeRef<V> {
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

pub struct LazyGraph<V, F> {
    neighbors: F,
    _marker: PhantomData<fn(V) -> V>,
}

impl<V, F> LazyGraph<V, F>
where
    F: Fn(V) -> Vec<V>,
{
    pub fn new(neighbors: F) -> Self {
        LazyGraph { neighbors, _marker: PhantomData }
    }
}

impl<V: Copy + Eq, F> GraphBase for LazyGraph<V, F> {
    type VertexId = V;
    type EdgeId = (V, V);
}

impl<'a, V: Copy + Eq, F> GraphBase for &'a LazyGraph<V, F> {
    type VertexId = V;
    type EdgeId = (V, V);
}

impl<'a, V, F> IncidenceGraph for &'a LazyGraph<V, F>
where
    V: Copy + Eq,
    F: Fn(V) -> Vec<V>,
{
    type OutgoingEdges = std::vec::IntoIter<(V, V)>;
    fn outgoing_edges(self, v: V) -> Self::OutgoingEdges {
        (self.neighbors)(v).into_iter().map(|to| (v, to)).collect::<Vec<_>>().into_iter()
    }
    fn destination(self, e: (V, V)) -> Option<V> {
        Some(e.1)
    }
    fn source(self, e: (V, V)) -> Option<V> {
        Some(e.0)
    }
    fn out_degree(self, v: V) -> usize {
        (self.neighbors)(v).len()
    }
}

impl<'a, V, F> AdjacencyGraph for &'a LazyGraph<V, F>
where
    V: Copy + Eq,
    F: Fn(V) -> Vec<V>,
{
    type AdjacentVertices = std::vec::IntoIter<V>;
    fn adjacent_vertices(self, v: V) -> Self::AdjacentVertices {
        (self.neighbors)(v).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_come_from_the_closure_each_call() {
        let g = LazyGraph::new(|v: i32| vec![v - 1, v + 1]);
        assert_eq!((&g).out_degree(0), 2);
        let neighbors: Vec<_> = (&g).adjacent_vertices(10).collect();
        assert_eq!(neighbors, vec![9, 11]);
    }

    #[test]
    fn lazy_graph_can_describe_an_unbounded_space() {
        let g = LazyGraph::new(|(x, y): (i64, i64)| {
            vec![(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
        });
        assert_eq!((&g).out_degree((1_000_000, -1_000_000)), 4);
    }
}
