//! Weakly-connected components, articulation points, and bridges.
//!
//! Supplemental strategies (SPEC_FULL.md §3): a one-line consequence of
//! the union–find container already required for Kruskal/Borůvka, plus
//! the classic DFS-low-link companions to the SCC module. None of these
//! are excluded by any Non-goal.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::capability::{IncidenceGraph, VertexListGraph};
use crate::container::UnionFind;

/// `ConnectedComponents::new(graph).run()`. Treats every edge as
/// undirected for the purpose of grouping (an edge in either direction
/// merges its endpoints), matching how MST inputs are expected to be
/// built (symmetric edge pairs).
pub struct ConnectedComponents<G> {
    graph: G,
}

impl<G> ConnectedComponents<G>
where
    G: IncidenceGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        ConnectedComponents { graph }
    }

    /// One `Vec` of members per component, in the insertion order of each
    /// component's first-seen vertex.
    pub fn run(&self) -> Vec<Vec<G::VertexId>> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let index: HashMap<G::VertexId, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let mut uf = UnionFind::new(vertices.len());
        for &v in &vertices {
            let vi = index[&v];
            for e in self.graph.outgoing_edges(v) {
                if let Some(to) = self.graph.destination(e) {
                    if let Some(&ti) = index.get(&to) {
                        uf.union(vi, ti);
                    }
                }
            }
        }
        let mut groups: HashMap<usize, Vec<G::VertexId>> = HashMap::new();
        for &v in &vertices {
            let root = uf.find(index[&v]);
            groups.entry(root).or_default().push(v);
        }
        let mut out: Vec<_> = groups.into_values().collect();
        out.sort_by_key(|members| index[&members[0]]);
        out
    }
}

/// `Connectivity::new(graph).articulation_points()` / `.bridges()` — the
/// classic DFS-low-link sweep, shared between the two queries since they
/// use the same `disc`/`low` arrays. Requires treating the graph as
/// undirected (run on a symmetric-edge graph, as MST/Eulerian inputs are).
pub struct Connectivity<G> {
    graph: G,
}

impl<G> Connectivity<G>
where
    G: IncidenceGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        Connectivity { graph }
    }

    fn dfs_low_link(&self) -> (HashMap<G::VertexId, u32>, HashMap<G::VertexId, u32>, HashSet<G::VertexId>, Vec<(G::VertexId, G::VertexId)>) {
        struct State<G: IncidenceGraph> {
            disc: HashMap<G::VertexId, u32>,
            low: HashMap<G::VertexId, u32>,
            parent: HashMap<G::VertexId, G::VertexId>,
            articulation: HashSet<G::VertexId>,
            bridges: Vec<(G::VertexId, G::VertexId)>,
            counter: u32,
        }

        fn dfs<G>(graph: G, u: G::VertexId, s: &mut State<G>)
        where
            G: IncidenceGraph + Copy,
            G::VertexId: Hash + Eq,
        {
            s.disc.insert(u, s.counter);
            s.low.insert(u, s.counter);
            s.counter += 1;
            let mut children = 0u32;
            let mut seen_neighbors: HashSet<G::VertexId> = HashSet::new();
            let mut used_parent_edge = false;

            for e in graph.outgoing_edges(u) {
                let Some(v) = graph.destination(e) else { continue };
                if Some(&v) == s.parent.get(&u) && !used_parent_edge {
                    // Skip exactly one traversal back along the tree edge to
                    // the parent; a true parallel edge back to the parent
                    // still counts as a back-edge.
                    used_parent_edge = true;
                    continue;
                }
                if s.disc.contains_key(&v) {
                    let lu = s.low[&u];
                    let dv = s.disc[&v];
                    s.low.insert(u, lu.min(dv));
                    seen_neighbors.insert(v);
                    continue;
                }
                s.parent.insert(v, u);
                children += 1;
                dfs(graph, v, s);
                let lv = s.low[&v];
                let lu = s.low[&u];
                s.low.insert(u, lu.min(lv));
                if s.low[&v] > s.disc[&u] {
                    s.bridges.push((u, v));
                }
                let is_root = !s.parent.contains_key(&u);
                if (is_root && children > 1) || (!is_root && s.low[&v] >= s.disc[&u]) {
                    s.articulation.insert(u);
                }
            }
        }

        let mut state: State<G> = State {
            disc: HashMap::new(),
            low: HashMap::new(),
            parent: HashMap::new(),
            articulation: HashSet::new(),
            bridges: Vec::new(),
            counter: 0,
        };
        for v in self.graph.vertices() {
            if !state.disc.contains_key(&v) {
                dfs(self.graph, v, &mut state);
            }
        }
        (state.disc, state.low, state.articulation, state.bridges)
    }

    /// Vertices whose removal increases the number of connected
    /// components.
    pub fn articulation_points(&self) -> HashSet<G::VertexId> {
        self.dfs_low_link().2
    }

    /// Edges whose removal increases the number of connected components.
    pub fn bridges(&self) -> Vec<(G::VertexId, G::VertexId)> {
        self.dfs_low_link().3
    }
}
