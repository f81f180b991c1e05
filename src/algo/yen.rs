//! Yen's algorithm: the `k` shortest loopless paths between two vertices,
//! built by repeatedly running Dijkstra over a graph with selected edges
//! and vertices excluded to force a detour around each prefix already
//! found.

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use crate::algo::Path;
use crate::capability::IncidenceGraph;
use crate::container::MinScored;
use crate::measure::FloatMeasure;

/// `Yen::new(graph).edge_cost(|e| ...).k_shortest(start, goal, k)`.
pub struct Yen<G> {
    graph: G,
}

impl<G: IncidenceGraph + Copy> Yen<G> {
    pub fn new(graph: G) -> Self {
        Yen { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> YenWithCost<G, C>
    where
        C: Fn(G::EdgeId) -> K,
        K: FloatMeasure,
    {
        YenWithCost { graph: self.graph, cost }
    }
}

pub struct YenWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> YenWithCost<G, C>
where
    G: IncidenceGraph + Copy,
    G::VertexId: Hash + Ord,
    G::EdgeId: Hash + Eq,
    C: Fn(G::EdgeId) -> K,
    K: FloatMeasure,
{
    /// A restricted Dijkstra search that refuses to step onto any vertex
    /// in `blocked_vertices` (other than `start` itself) or traverse any
    /// edge in `blocked_edges`.
    fn restricted_shortest(
        &self,
        start: G::VertexId,
        goal: G::VertexId,
        blocked_vertices: &HashSet<G::VertexId>,
        blocked_edges: &HashSet<G::EdgeId>,
    ) -> Option<Path<G::VertexId, G::EdgeId, K>> {
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
                if blocked_edges.contains(&e) {
                    continue;
                }
                let Some(to) = self.graph.destination(e) else { continue };
                if to != goal && blocked_vertices.contains(&to) {
                    continue;
                }
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

    /// The `k` shortest loopless paths from `start` to `goal`, cheapest
    /// first. Returns fewer than `k` if the graph doesn't have that many
    /// distinct loopless paths.
    pub fn k_shortest(
        &self,
        start: G::VertexId,
        goal: G::VertexId,
        k: usize,
    ) -> Vec<Path<G::VertexId, G::EdgeId, K>> {
        let mut found = Vec::new();
        let Some(first) = self.restricted_shortest(start, goal, &HashSet::new(), &HashSet::new()) else {
            return found;
        };
        found.push(first);

        let mut candidates: Vec<Path<G::VertexId, G::EdgeId, K>> = Vec::new();

        while found.len() < k {
            let prev_path = found.last().unwrap().clone();
            for i in 0..prev_path.vertices.len().saturating_sub(1) {
                let spur_node = prev_path.vertices[i];
                let root_path = &prev_path.vertices[..=i];
                let root_edges = &prev_path.edges[..i];

                let mut blocked_edges = HashSet::new();
                for p in &found {
                    if p.vertices.len() > i && p.vertices[..=i] == *root_path {
                        blocked_edges.insert(p.edges[i]);
                    }
                }
                let blocked_vertices: HashSet<_> = root_path[..root_path.len() - 1].iter().copied().collect();

                if let Some(spur) = self.restricted_shortest(spur_node, goal, &blocked_vertices, &blocked_edges) {
                    let mut vertices = root_path[..root_path.len() - 1].to_vec();
                    vertices.extend(spur.vertices.iter().copied());
                    let mut edges = root_edges.to_vec();
                    edges.extend(spur.edges.iter().copied());
                    let root_cost = self.path_cost(root_edges);
                    let candidate = Path { vertices, edges, cost: root_cost + spur.cost };
                    if !found.iter().any(|p| p.vertices == candidate.vertices)
                        && !candidates.iter().any(|p| p.vertices == candidate.vertices)
                    {
                        candidates.push(candidate);
                    }
                }
            }

            if candidates.is_empty() {
                break;
            }
            candidates.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap());
            found.push(candidates.remove(0));
        }

        found
    }

    fn path_cost(&self, edges: &[G::EdgeId]) -> K {
        edges.iter().fold(K::zero(), |total, &e| total + (self.cost)(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;

    #[test]
    fn the_first_of_the_k_shortest_paths_matches_plain_dijkstra() {
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
        let weight2 = weight.clone();
        let yen = Yen::new(&g).edge_cost(move |e| *weight2.get(&e).unwrap());
        let paths = yen.k_shortest(a, d, 2);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].cost, 3);
        assert_eq!(paths[0].edges, vec![ab, bd]);
        assert_eq!(paths[0].edges.len(), paths[0].vertices.len() - 1);
        assert!(paths[1].cost >= paths[0].cost);
        assert_ne!(paths[0].vertices, paths[1].vertices);
    }

    #[test]
    fn asking_for_more_paths_than_exist_returns_what_is_available() {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        let yen = Yen::new(&g).edge_cost(|_| 1u32);
        let paths = yen.k_shortest(a, b, 5);
        assert_eq!(paths.len(), 1);
    }
}
