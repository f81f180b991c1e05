//! Strongly connected components: Tarjan's single-pass algorithm and
//! Kosaraju's two-pass algorithm. Both partition the vertex set into
//! maximal sets where every vertex can reach every other; they agree up
//! to the ordering of members and of components.

use std::collections::HashMap;
use std::hash::Hash;

use crate::capability::{BidirectionalGraph, IncidenceGraph, VertexListGraph};
use crate::views::Reversed;

/// `Tarjan::new(graph).run()`.
pub struct Tarjan<G> {
    graph: G,
}

impl<G> Tarjan<G>
where
    G: IncidenceGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        Tarjan { graph }
    }

    /// Each inner `Vec` is one component; components are returned in the
    /// reverse order their root finished (topological order of the
    /// condensation).
    pub fn run(&self) -> Vec<Vec<G::VertexId>> {
        struct State<G: IncidenceGraph> {
            index: HashMap<G::VertexId, u32>,
            lowlink: HashMap<G::VertexId, u32>,
            on_stack: HashMap<G::VertexId, bool>,
            stack: Vec<G::VertexId>,
            counter: u32,
            components: Vec<Vec<G::VertexId>>,
        }

        fn strongconnect<G>(graph: G, v: G::VertexId, s: &mut State<G>)
        where
            G: IncidenceGraph + Copy,
            G::VertexId: Hash + Eq,
        {
            s.index.insert(v, s.counter);
            s.lowlink.insert(v, s.counter);
            s.counter += 1;
            s.stack.push(v);
            s.on_stack.insert(v, true);

            for e in graph.outgoing_edges(v) {
                let Some(w) = graph.destination(e) else { continue };
                if !s.index.contains_key(&w) {
                    strongconnect(graph, w, s);
                    let wl = s.lowlink[&w];
                    let vl = s.lowlink[&v];
                    s.lowlink.insert(v, vl.min(wl));
                } else if *s.on_stack.get(&w).unwrap_or(&false) {
                    let wi = s.index[&w];
                    let vl = s.lowlink[&v];
                    s.lowlink.insert(v, vl.min(wi));
                }
            }

            if s.lowlink[&v] == s.index[&v] {
                let mut component = Vec::new();
                loop {
                    let w = s.stack.pop().unwrap();
                    s.on_stack.insert(w, false);
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                s.components.push(component);
            }
        }

        let mut state = State {
            index: HashMap::new(),
            lowlink: HashMap::new(),
            on_stack: HashMap::new(),
            stack: Vec::new(),
            counter: 0,
            components: Vec::new(),
        };
        for v in self.graph.vertices() {
            if !state.index.contains_key(&v) {
                strongconnect(self.graph, v, &mut state);
            }
        }
        state.components
    }
}

/// `Kosaraju::new(graph).run()`. Requires `BidirectionalGraph` since the
/// second pass runs over the reversed graph.
pub struct Kosaraju<G> {
    graph: G,
}

impl<G> Kosaraju<G>
where
    G: BidirectionalGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        Kosaraju { graph }
    }

    pub fn run(&self) -> Vec<Vec<G::VertexId>> {
        let mut visited = std::collections::HashSet::new();
        let mut finish_order = Vec::new();

        fn dfs1<G>(
            graph: G,
            v: G::VertexId,
            visited: &mut std::collections::HashSet<G::VertexId>,
            order: &mut Vec<G::VertexId>,
        ) where
            G: IncidenceGraph + Copy,
            G::VertexId: Hash + Eq,
        {
            if !visited.insert(v) {
                return;
            }
            for e in graph.outgoing_edges(v) {
                if let Some(to) = graph.destination(e) {
                    dfs1(graph, to, visited, order);
                }
            }
            order.push(v);
        }

        for v in self.graph.vertices() {
            dfs1(self.graph, v, &mut visited, &mut finish_order);
        }

        let reversed = Reversed(self.graph);
        let mut assigned = std::collections::HashSet::new();
        let mut components = Vec::new();

        fn dfs2<G>(
            graph: Reversed<G>,
            v: G::VertexId,
            assigned: &mut std::collections::HashSet<G::VertexId>,
            component: &mut Vec<G::VertexId>,
        ) where
            G: BidirectionalGraph + Copy,
            G::VertexId: Hash + Eq,
        {
            if !assigned.insert(v) {
                return;
            }
            component.push(v);
            for e in graph.outgoing_edges(v) {
                if let Some(to) = graph.destination(e) {
                    dfs2(graph, to, assigned, component);
                }
            }
        }

        for &v in finish_order.iter().rev() {
            if !assigned.contains(&v) {
                let mut component = Vec::new();
                dfs2(reversed, v, &mut assigned, &mut component);
                components.push(component);
            }
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    fn sample() -> CachedAdjacencyList {
        // Two cycles a<->b<->c and d<->e, joined by a one-way c->d bridge.
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let d = g.add_vertex();
        let e = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, c);
        g.add_edge(c, a);
        g.add_edge(c, d);
        g.add_edge(d, e);
        g.add_edge(e, d);
        g
    }

    #[test]
    fn tarjan_and_kosaraju_agree_on_component_membership() {
        let g = sample();
        let mut tarjan: Vec<std::collections::BTreeSet<_>> = Tarjan::new(&g)
            .run()
            .into_iter()
            .map(|c| c.into_iter().collect())
            .collect();
        let mut kosaraju: Vec<std::collections::BTreeSet<_>> = Kosaraju::new(&g)
            .run()
            .into_iter()
            .map(|c| c.into_iter().collect())
            .collect();
        tarjan.sort_by_key(|s: &std::collections::BTreeSet<_>| format!("{s:?}"));
        kosaraju.sort_by_key(|s: &std::collections::BTreeSet<_>| format!("{s:?}"));
        assert_eq!(tarjan, kosaraju);
        assert_eq!(tarjan.len(), 2);
    }

    #[test]
    fn each_component_has_the_expected_size() {
        let g = sample();
        let mut sizes: Vec<_> = Tarjan::new(&g).run().into_iter().map(|c| c.len()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![2, 3]);
    }
}
