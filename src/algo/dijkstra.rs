//! Single-source shortest paths with non-negative edge costs.

use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

use crate::algo::Path;
use crate::capability::IncidenceGraph;
use crate::container::MinScored;
use crate::measure::FloatMeasure;

/// `Dijkstra::new(graph).edge_cost(|e| ...).distances(start)` or
/// `.path(start, goal)`.
pub struct Dijkstra<G> {
    graph: G,
}

impl<G: IncidenceGraph + Copy> Dijkstra<G> {
    pub fn new(graph: G) -> Self {
        Dijkstra { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> DijkstraWithCost<G, C>
    where
        C: Fn(G::EdgeId) -> K,
        K: FloatMeasure,
    {
        DijkstraWithCost { graph: self.graph, cost }
    }
}

pub struct DijkstraWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> DijkstraWithCost<G, C>
where
    G: IncidenceGraph + Copy,
    G::VertexId: Hash,
    C: Fn(G::EdgeId) -> K,
    K: FloatMeasure,
{
    /// The shortest distance from `start` to every vertex it can reach.
    /// Unreached vertices are simply absent from the map.
    pub fn distances(&self, start: G::VertexId) -> HashMap<G::VertexId, K> {
        let mut dist = HashMap::new();
        let mut heap = BinaryHeap::new();
        dist.insert(start, K::zero());
        heap.push(MinScored(K::zero(), start));
        while let Some(MinScored(d, v)) = heap.pop() {
            if dist.get(&v).map_or(false, |&best| d > best) {
                continue;
            }
            for e in self.graph.outgoing_edges(v) {
                let Some(to) = self.graph.destination(e) else { continue };
                let nd = d + (self.cost)(e);
                if dist.get(&to).map_or(true, |&best| nd < best) {
                    dist.insert(to, nd);
                    heap.push(MinScored(nd, to));
                }
            }
        }
        dist
    }

    /// The shortest path from `start` to `goal`, or `None` if `goal` is
    /// unreachable.
    pub fn path(&self, start: G::VertexId, goal: G::VertexId) -> Option<Path<G::VertexId, G::EdgeId, K>> {
        let mut dist = HashMap::new();
        let mut prev: HashMap<G::VertexId, (G::VertexId, G::EdgeId)> = HashMap::new();
        let mut heap = BinaryHeap::new();
        dist.insert(start, K::zero());
        heap.push(MinScored(K::zero(), start));
        while let Some(MinScored(d, v)) = heap.pop() {
            if dist.get(&v).map_or(false, |&best| d > best) {
                continue;
            }
            if v == goal {
                break;
            }
            for e in self.graph.outgoing_edges(v) {
                let Some(to) = self.graph.destination(e) else { continue };
                let nd = d + (self.cost)(e);
                if dist.get(&to).map_or(true, |&best| nd < best) {
                    dist.insert(to, nd);
                    prev.insert(to, (v, e));
                    heap.push(MinScored(nd, to));
                }
            }
        }
        let &cost = dist.get(&goal)?;
        let mut vertices = vec![goal];
        let mut edges = Vec::new();
        let mut cur = goal;
        while cur != start {
            let &(p, e) = prev.get(&cur)?;
            edges.push(e);
            vertices.push(p);
            cur = p;
        }
        vertices.reverse();
        edges.reverse();
        Some(Path { vertices, edges, cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    #[test]
    fn shortest_path_on_the_classic_four_vertex_graph() {
        // a -1-> b -2-> d, a -4-> c -1-> d: shortest a->d is via b at cost 3.
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let d = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        let bd = g.add_edge(b, d).unwrap();
        let ac = g.add_edge(a, c).unwrap();
        let cd = g.add_edge(c, d).unwrap();
        let mut weight = HashMap::new();
        weight.insert(ab, 1u32);
        weight.insert(bd, 2);
        weight.insert(ac, 4);
        weight.insert(cd, 1);
        let dijkstra = Dijkstra::new(&g).edge_cost(move |e| *weight.get(&e).unwrap());
        let path = dijkstra.path(a, d).unwrap();
        assert_eq!(path.cost, 3);
        assert_eq!(path.vertices, vec![a, b, d]);
        assert_eq!(path.edges, vec![ab, bd]);
    }

    #[test]
    fn unreachable_goal_yields_no_path() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let dijkstra = Dijkstra::new(&g).edge_cost(|_| 1u32);
        assert!(dijkstra.path(a, b).is_none());
    }

    #[test]
    fn distances_agrees_with_path_cost_for_every_reachable_vertex() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, c);
        let dijkstra = Dijkstra::new(&g).edge_cost(|_| 1u32);
        let dist = dijkstra.distances(a);
        assert_eq!(dist[&c], dijkstra.path(a, c).unwrap().cost);
    }
}
