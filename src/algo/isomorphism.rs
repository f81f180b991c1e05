//! Graph isomorphism: VF2 (exact, state-space search over a partial
//! vertex mapping) and Weisfeiler–Lehman (heuristic hash refinement,
//! cheap but one-directional: "not isomorphic" is certain, "isomorphic"
//! is only "could be").

use std::collections::HashMap;
use std::hash::Hash;

use crate::capability::{AdjacencyGraph, EdgeLookupGraph, VertexListGraph};

/// `Vf2::new(g1, g2).is_isomorphic()` / `.mapping()`.
pub struct Vf2<G1, G2> {
    g1: G1,
    g2: G2,
}

impl<G1, G2> Vf2<G1, G2>
where
    G1: AdjacencyGraph + VertexListGraph + EdgeLookupGraph + Copy,
    G2: AdjacencyGraph + VertexListGraph + EdgeLookupGraph + Copy,
    G1::VertexId: Hash + Eq,
    G2::VertexId: Hash + Eq,
{
    pub fn new(g1: G1, g2: G2) -> Self {
        Vf2 { g1, g2 }
    }

    pub fn is_isomorphic(&self) -> bool {
        self.mapping().is_some()
    }

    /// A bijection `g1 vertex -> g2 vertex` preserving adjacency in both
    /// directions, or `None` if none exists.
    pub fn mapping(&self) -> Option<HashMap<G1::VertexId, G2::VertexId>> {
        let v1: Vec<_> = self.g1.vertices().collect();
        let v2: Vec<_> = self.g2.vertices().collect();
        if v1.len() != v2.len() {
            return None;
        }
        let degree_sum_1: usize = self.g1.vertices().map(|v| self.g1.adjacent_vertices(v).count()).sum();
        let degree_sum_2: usize = self.g2.vertices().map(|v| self.g2.adjacent_vertices(v).count()).sum();
        if degree_sum_1 != degree_sum_2 {
            return None;
        }
        let mut forward = HashMap::new();
        let mut backward = HashMap::new();
        self.search(&v1, &v2, &mut forward, &mut backward)
            .then_some(forward)
    }

    fn search(
        &self,
        v1: &[G1::VertexId],
        v2: &[G2::VertexId],
        forward: &mut HashMap<G1::VertexId, G2::VertexId>,
        backward: &mut HashMap<G2::VertexId, G1::VertexId>,
    ) -> bool {
        if forward.len() == v1.len() {
            return true;
        }
        let Some(&u) = v1.iter().find(|u| !forward.contains_key(u)) else {
            return true;
        };
        for &w in v2 {
            if backward.contains_key(&w) {
                continue;
            }
            if !self.feasible(u, w, forward, backward) {
                continue;
            }
            forward.insert(u, w);
            backward.insert(w, u);
            if self.search(v1, v2, forward, backward) {
                return true;
            }
            forward.remove(&u);
            backward.remove(&w);
        }
        false
    }

    fn feasible(
        &self,
        u: G1::VertexId,
        w: G2::VertexId,
        forward: &HashMap<G1::VertexId, G2::VertexId>,
        backward: &HashMap<G2::VertexId, G1::VertexId>,
    ) -> bool {
        let deg_u = self.g1.adjacent_vertices(u).count();
        let deg_w = self.g2.adjacent_vertices(w).count();
        if deg_u != deg_w {
            return false;
        }
        // Every already-mapped neighbor of `u` must have a corresponding
        // edge on the `w` side, and vice versa (the two-sided consistency
        // check; both directions matter when the base isn't symmetric).
        for n in self.g1.adjacent_vertices(u) {
            if let Some(&mapped) = forward.get(&n) {
                if self.g2.edge(w, mapped).is_none() && self.g2.edge(mapped, w).is_none() {
                    return false;
                }
            }
        }
        for n in self.g2.adjacent_vertices(w) {
            if let Some(&mapped) = backward.get(&n) {
                if self.g1.edge(u, mapped).is_none() && self.g1.edge(mapped, u).is_none() {
                    return false;
                }
            }
        }
        // Look-ahead: the count of each side's neighbors that are
        // themselves unmapped-but-adjacent-to-the-frontier must agree,
        // a cheap necessary condition that prunes many dead branches
        // before recursing.
        let frontier_u = self
            .g1
            .adjacent_vertices(u)
            .filter(|n| !forward.contains_key(n))
            .count();
        let frontier_w = self
            .g2
            .adjacent_vertices(w)
            .filter(|n| !backward.contains_key(n))
            .count();
        frontier_u == frontier_w
    }
}

/// `WeisfeilerLehman::new(graph).hashes(rounds)`: combines each vertex's
/// own hash with the multiset of its neighbors' hashes, `rounds` times.
/// Two graphs with different final multisets are certainly not
/// isomorphic; equal multisets are only "potentially isomorphic".
pub struct WeisfeilerLehman<G> {
    graph: G,
}

impl<G> WeisfeilerLehman<G>
where
    G: AdjacencyGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        WeisfeilerLehman { graph }
    }

    fn initial_labels(&self) -> HashMap<G::VertexId, u64> {
        self.graph
            .vertices()
            .map(|v| (v, self.graph.adjacent_vertices(v).count() as u64))
            .collect()
    }

    fn refine(&self, labels: &HashMap<G::VertexId, u64>) -> HashMap<G::VertexId, u64> {
        self.graph
            .vertices()
            .map(|v| {
                let mut neighbor_labels: Vec<u64> =
                    self.graph.adjacent_vertices(v).map(|n| labels[&n]).collect();
                neighbor_labels.sort_unstable();
                let mut hash = labels[&v];
                for nl in neighbor_labels {
                    hash = hash.wrapping_mul(1_000_003).wrapping_add(nl);
                }
                (v, hash)
            })
            .collect()
    }

    /// The multiset (as a sorted `Vec`) of final per-vertex hashes after
    /// `rounds` refinement steps.
    pub fn signature(&self, rounds: usize) -> Vec<u64> {
        let mut labels = self.initial_labels();
        for _ in 0..rounds {
            labels = self.refine(&labels);
        }
        let mut values: Vec<u64> = labels.into_values().collect();
        values.sort_unstable();
        values
    }

    /// Compares two graphs' signatures; `false` is a certain answer,
    /// `true` only means "not ruled out by `rounds` rounds of refinement".
    pub fn compare<H>(&self, other: &WeisfeilerLehman<H>, rounds: usize) -> bool
    where
        H: AdjacencyGraph + VertexListGraph + Copy,
        H::VertexId: Hash + Eq,
    {
        self.signature(rounds) == other.signature(rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AdjacencyList;

    fn undirected_edge(g: &mut AdjacencyList, a: crate::engine::adjacency_list::VertexId, b: crate::engine::adjacency_list::VertexId) {
        g.add_edge(a, b);
        g.add_edge(b, a);
    }

    fn triangle() -> AdjacencyList {
        let mut g = AdjacencyList::new();
        let ids: Vec<_> = (0..3).map(|_| g.add_vertex()).collect();
        undirected_edge(&mut g, ids[0], ids[1]);
        undirected_edge(&mut g, ids[1], ids[2]);
        undirected_edge(&mut g, ids[2], ids[0]);
        g
    }

    #[test]
    fn vf2_reports_a_graph_isomorphic_to_itself() {
        let g = triangle();
        assert!(Vf2::new(&g, &g).is_isomorphic());
    }

    #[test]
    fn vf2_rejects_graphs_of_different_size() {
        let g1 = triangle();
        let mut g2 = AdjacencyList::new();
        let ids: Vec<_> = (0..4).map(|_| g2.add_vertex()).collect();
        undirected_edge(&mut g2, ids[0], ids[1]);
        undirected_edge(&mut g2, ids[1], ids[2]);
        undirected_edge(&mut g2, ids[2], ids[3]);
        undirected_edge(&mut g2, ids[3], ids[0]);
        assert!(!Vf2::new(&g1, &g2).is_isomorphic());
    }

    #[test]
    fn weisfeiler_lehman_distinguishes_a_triangle_from_a_path() {
        let triangle = triangle();
        let mut path = AdjacencyList::new();
        let ids: Vec<_> = (0..3).map(|_| path.add_vertex()).collect();
        undirected_edge(&mut path, ids[0], ids[1]);
        undirected_edge(&mut path, ids[1], ids[2]);
        let wl_triangle = WeisfeilerLehman::new(&triangle);
        let wl_path = WeisfeilerLehman::new(&path);
        assert!(!wl_triangle.compare(&wl_path, 2));
    }
}
