//! Maximum bipartite matching via Hopcroft–Karp: repeated layered
//! BFS + DFS rounds, each augmenting a maximal set of vertex-disjoint
//! shortest augmenting paths simultaneously. O(E * sqrt(V)).

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::capability::BipartiteGraph;

/// The matched partner of each matched vertex (present on both sides; a
/// matched pair appears as two entries, one per side).
pub struct Matching<V> {
    pub partner: HashMap<V, V>,
}

impl<V: Copy + Eq + Hash> Matching<V> {
    pub fn size(&self) -> usize {
        self.partner.len() / 2
    }

    pub fn partner_of(&self, v: V) -> Option<V> {
        self.partner.get(&v).copied()
    }
}

/// `HopcroftKarp::new(graph).run()`.
pub struct HopcroftKarp<G> {
    graph: G,
}

impl<G> HopcroftKarp<G>
where
    G: BipartiteGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        HopcroftKarp { graph }
    }

    pub fn run(&self) -> Matching<G::VertexId> {
        let left: Vec<_> = self.graph.left_partition().collect();
        let mut partner: HashMap<G::VertexId, G::VertexId> = HashMap::new();

        loop {
            let dist = self.bfs_layers(&left, &partner);
            let Some(_) = dist.get(&None).filter(|&&d| d != u32::MAX) else {
                break;
            };
            let mut augmented = false;
            for &u in &left {
                if !partner.contains_key(&u) && self.dfs_augment(u, &dist, &mut partner) {
                    augmented = true;
                }
            }
            if !augmented {
                break;
            }
        }

        Matching { partner }
    }

    /// Layers every unmatched left vertex at distance 0, alternating
    /// sides; `dist[&None]` holds the distance to the first layer that
    /// reaches an unmatched right vertex (the augmenting-path length),
    /// `u32::MAX` if none is found this round.
    fn bfs_layers(
        &self,
        left: &[G::VertexId],
        partner: &HashMap<G::VertexId, G::VertexId>,
    ) -> HashMap<Option<G::VertexId>, u32> {
        let mut dist: HashMap<Option<G::VertexId>, u32> = HashMap::new();
        let mut queue = VecDeque::new();
        for &u in left {
            if !partner.contains_key(&u) {
                dist.insert(Some(u), 0);
                queue.push_back(u);
            } else {
                dist.insert(Some(u), u32::MAX);
            }
        }
        dist.insert(None, u32::MAX);

        while let Some(u) = queue.pop_front() {
            let du = dist[&Some(u)];
            if du >= dist[&None] {
                continue;
            }
            for e in self.graph.outgoing_edges(u) {
                let Some(v) = self.graph.destination(e) else { continue };
                match partner.get(&v) {
                    None => {
                        if dist[&None] == u32::MAX {
                            dist.insert(None, du + 1);
                        }
                    }
                    Some(&w) => {
                        if dist.get(&Some(w)).copied().unwrap_or(u32::MAX) == u32::MAX {
                            dist.insert(Some(w), du + 1);
                            queue.push_back(w);
                        }
                    }
                }
            }
        }
        dist
    }

    fn dfs_augment(
        &self,
        u: G::VertexId,
        dist: &HashMap<Option<G::VertexId>, u32>,
        partner: &mut HashMap<G::VertexId, G::VertexId>,
    ) -> bool {
        for e in self.graph.outgoing_edges(u) {
            let Some(v) = self.graph.destination(e) else { continue };
            let du = dist[&Some(u)];
            let reaches_free = match partner.get(&v) {
                None => dist[&None] == du + 1,
                Some(&w) => {
                    dist.get(&Some(w)).copied().unwrap_or(u32::MAX) == du + 1
                        && self.dfs_augment(w, dist, partner)
                }
            };
            if reaches_free {
                partner.insert(u, v);
                partner.insert(v, u);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{MutableBipartiteGraph, Part};
    use crate::engine::BipartiteAdjacencyList;

    #[test]
    fn perfect_matching_on_a_path_of_two_edges() {
        let mut g = BipartiteAdjacencyList::new();
        let l0 = g.add_vertex_to(Part::Left);
        let l1 = g.add_vertex_to(Part::Left);
        let r0 = g.add_vertex_to(Part::Right);
        let r1 = g.add_vertex_to(Part::Right);
        g.add_edge(l0, r0);
        g.add_edge(l0, r1);
        g.add_edge(l1, r1);
        let matching = HopcroftKarp::new(&g).run();
        assert_eq!(matching.size(), 2);
    }

    #[test]
    fn no_edges_means_no_matches() {
        let mut g = BipartiteAdjacencyList::new();
        g.add_vertex_to(Part::Left);
        g.add_vertex_to(Part::Right);
        let matching = HopcroftKarp::new(&g).run();
        assert_eq!(matching.size(), 0);
    }
}
