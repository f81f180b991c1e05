//! Bidirectional Dijkstra: alternating forward search from the source and
//! backward search from the goal (over [`Reversed`]), stopping once the
//! two frontiers meet and no remaining frontier edge could improve on the
//! best crossing found so far.

use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

use crate::algo::Path;
use crate::capability::BidirectionalGraph;
use crate::container::MinScored;
use crate::measure::FloatMeasure;
use crate::views::Reversed;

/// `BidirectionalDijkstra::new(graph).edge_cost(|e| ...).path(start, goal)`.
pub struct BidirectionalDijkstra<G> {
    graph: G,
}

impl<G: BidirectionalGraph + Copy> BidirectionalDijkstra<G> {
    pub fn new(graph: G) -> Self {
        BidirectionalDijkstra { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> BidirectionalDijkstraWithCost<G, C>
    where
        C: Fn(G::EdgeId) -> K,
        K: FloatMeasure,
    {
        BidirectionalDijkstraWithCost { graph: self.graph, cost }
    }
}

pub struct BidirectionalDijkstraWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> BidirectionalDijkstraWithCost<G, C>
where
    G: BidirectionalGraph + Copy,
    G::VertexId: Hash,
    C: Fn(G::EdgeId) -> K,
    K: FloatMeasure,
{
    /// The shortest path from `start` to `goal`, or `None` if unreachable.
    /// Searches forward from `start` and backward (over `Reversed`) from
    /// `goal` in lockstep, one relaxation round per side per iteration.
    pub fn path(&self, start: G::VertexId, goal: G::VertexId) -> Option<Path<G::VertexId, G::EdgeId, K>> {
        if start == goal {
            return Some(Path { vertices: vec![start], edges: Vec::new(), cost: K::zero() });
        }

        let reversed = Reversed(self.graph);

        let mut dist_f: HashMap<G::VertexId, K> = HashMap::new();
        let mut dist_b: HashMap<G::VertexId, K> = HashMap::new();
        let mut prev_f: HashMap<G::VertexId, (G::VertexId, G::EdgeId)> = HashMap::new();
        let mut prev_b: HashMap<G::VertexId, (G::VertexId, G::EdgeId)> = HashMap::new();
        let mut heap_f = BinaryHeap::new();
        let mut heap_b = BinaryHeap::new();

        dist_f.insert(start, K::zero());
        dist_b.insert(goal, K::zero());
        heap_f.push(MinScored(K::zero(), start));
        heap_b.push(MinScored(K::zero(), goal));

        let mut best: Option<K> = None;
        let mut meeting: Option<G::VertexId> = None;

        loop {
            let forward_done = heap_f.is_empty();
            let backward_done = heap_b.is_empty();
            if forward_done && backward_done {
                break;
            }
            if let Some(top) = heap_f.peek() {
                if let Some(b) = best {
                    if top.0 >= b {
                        break;
                    }
                }
            }
            if let Some(top) = heap_b.peek() {
                if let Some(b) = best {
                    if top.0 >= b {
                        break;
                    }
                }
            }

            if !forward_done {
                if let Some(MinScored(d, v)) = heap_f.pop() {
                    if dist_f.get(&v).map_or(false, |&best_d| d > best_d) {
                        // stale entry
                    } else {
                        if let Some(&db) = dist_b.get(&v) {
                            let total = d + db;
                            if best.map_or(true, |b| total < b) {
                                best = Some(total);
                                meeting = Some(v);
                            }
                        }
                        for e in self.graph.outgoing_edges(v) {
                            let Some(to) = self.graph.destination(e) else { continue };
                            let nd = d + (self.cost)(e);
                            if dist_f.get(&to).map_or(true, |&best_d| nd < best_d) {
                                dist_f.insert(to, nd);
                                prev_f.insert(to, (v, e));
                                heap_f.push(MinScored(nd, to));
                            }
                        }
                    }
                }
            }

            if !backward_done {
                if let Some(MinScored(d, v)) = heap_b.pop() {
                    if dist_b.get(&v).map_or(false, |&best_d| d > best_d) {
                        // stale entry
                    } else {
                        if let Some(&df) = dist_f.get(&v) {
                            let total = d + df;
                            if best.map_or(true, |b| total < b) {
                                best = Some(total);
                                meeting = Some(v);
                            }
                        }
                        for e in reversed.outgoing_edges(v) {
                            let Some(to) = reversed.destination(e) else { continue };
                            let nd = d + (self.cost)(e);
                            if dist_b.get(&to).map_or(true, |&best_d| nd < best_d) {
                                dist_b.insert(to, nd);
                                prev_b.insert(to, (v, e));
                                heap_b.push(MinScored(nd, to));
                            }
                        }
                    }
                }
            }
        }

        let meeting = meeting?;
        let cost = best?;

        // Forward half: prev_f[cur] = (predecessor, edge predecessor -> cur),
        // walked from the meeting vertex back to `start` then reversed.
        let mut forward_half = vec![meeting];
        let mut forward_edges = Vec::new();
        let mut cur = meeting;
        while cur != start {
            let &(prev, e) = prev_f.get(&cur)?;
            forward_edges.push(e);
            forward_half.push(prev);
            cur = prev;
        }
        forward_half.reverse();
        forward_edges.reverse();

        // Backward half: prev_b[cur] = (next hop toward goal, edge
        // cur -> next hop), already in start-to-goal order.
        let mut backward_half = Vec::new();
        let mut backward_edges = Vec::new();
        let mut cur = meeting;
        while cur != goal {
            let &(next, e) = prev_b.get(&cur)?;
            backward_edges.push(e);
            backward_half.push(next);
            cur = next;
        }

        let mut vertices = forward_half;
        vertices.extend(backward_half);
        let mut edges = forward_edges;
        edges.extend(backward_edges);
        Some(Path { vertices, edges, cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    #[test]
    fn finds_the_same_shortest_path_as_a_unidirectional_search() {
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
        let bidi = BidirectionalDijkstra::new(&g).edge_cost(move |e| *weight.get(&e).unwrap());
        let path = bidi.path(a, d).unwrap();
        assert_eq!(path.cost, 3);
        assert_eq!(path.vertices.first(), Some(&a));
        assert_eq!(path.vertices.last(), Some(&d));
        assert_eq!(path.edges, vec![ab, bd]);
        assert_eq!(path.edges.len(), path.vertices.len() - 1);
    }

    #[test]
    fn unreachable_goal_yields_no_path() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let bidi = BidirectionalDijkstra::new(&g).edge_cost(|_| 1u32);
        assert!(bidi.path(a, b).is_none());
    }

    #[test]
    fn start_equal_to_goal_is_a_zero_cost_path() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let bidi = BidirectionalDijkstra::new(&g).edge_cost(|_| 1u32);
        let path = bidi.path(a, a).unwrap();
        assert_eq!(path.cost, 0);
        assert_eq!(path.vertices, vec![a]);
        assert!(path.edges.is_empty());
    }
}
