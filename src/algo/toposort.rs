//! Topological ordering of a DAG via depth-first postorder, reversed.
//!
//! Not named as a strategy in the core algorithm list, but required by
//! the traversal framework's `Topo` walker and by the DAG testable
//! property ("topological sort existence iff acyclic"); promoted here to
//! a first-class algorithm entry point.

use std::collections::HashSet;
use std::hash::Hash;

use crate::capability::{IncidenceGraph, VertexListGraph};

/// `Toposort::new(graph).run()`.
pub struct Toposort<G> {
    graph: G,
}

impl<G> Toposort<G>
where
    G: IncidenceGraph + VertexListGraph + Copy,
    G::VertexId: Hash,
{
    pub fn new(graph: G) -> Self {
        Toposort { graph }
    }

    /// `Some(order)` with every live vertex appearing once, each before
    /// every vertex it has an edge to; `None` if a directed cycle exists.
    pub fn run(&self) -> Option<Vec<G::VertexId>> {
        #[derive(Copy, Clone, PartialEq, Eq)]
        enum Mark {
            InProgress,
            Done,
        }
        let mut mark: std::collections::HashMap<G::VertexId, Mark> = std::collections::HashMap::new();
        let mut order = Vec::new();
        let mut acyclic = true;

        fn visit<G>(
            graph: G,
            v: G::VertexId,
            mark: &mut std::collections::HashMap<G::VertexId, Mark>,
            order: &mut Vec<G::VertexId>,
            acyclic: &mut bool,
        ) where
            G: IncidenceGraph + Copy,
            G::VertexId: Hash + Eq,
        {
            if !*acyclic {
                return;
            }
            match mark.get(&v) {
                Some(Mark::Done) => return,
                Some(Mark::InProgress) => {
                    *acyclic = false;
                    return;
                }
                None => {}
            }
            mark.insert(v, Mark::InProgress);
            for e in graph.outgoing_edges(v) {
                if let Some(to) = graph.destination(e) {
                    visit(graph, to, mark, order, acyclic);
                }
            }
            mark.insert(v, Mark::Done);
            order.push(v);
        }

        let mut seen_starts = HashSet::new();
        for v in self.graph.vertices() {
            if seen_starts.insert(v) {
                visit(self.graph, v, &mut mark, &mut order, &mut acyclic);
            }
            if !acyclic {
                return None;
            }
        }
        order.reverse();
        Some(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AdjacencyList;

    #[test]
    fn linearizes_a_diamond_dag() {
        // A->C, B->C, B->D, C->E, D->E
        let mut g = AdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let d = g.add_vertex();
        let e = g.add_vertex();
        g.add_edge(a, c);
        g.add_edge(b, c);
        g.add_edge(b, d);
        g.add_edge(c, e);
        g.add_edge(d, e);
        let order = Toposort::new(&g).run().unwrap();
        let pos = |v| order.iter().position(|&x| x == v).unwrap();
        assert!(pos(a) < pos(c));
        assert!(pos(b) < pos(c));
        assert!(pos(b) < pos(d));
        assert!(pos(c) < pos(e));
        assert!(pos(d) < pos(e));
    }

    #[test]
    fn a_cycle_has_no_linearization() {
        let mut g = AdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, a);
        assert!(Toposort::new(&g).run().is_none());
    }
}
