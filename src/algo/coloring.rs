//! Vertex coloring: greedy (traversal order), DSatur (saturation-degree
//! ordering), and Welsh–Powell (degree-descending then greedy). All three
//! produce a `vertex -> color` map with no two adjacent vertices sharing
//! a color; none guarantee the chromatic number.

use std::collections::HashMap;
use std::hash::Hash;

use crate::capability::{AdjacencyGraph, VertexListGraph};
use crate::container::MaxScored;

/// The color assigned to each vertex, using the smallest possible
/// nonnegative integers.
pub struct Coloring<V> {
    pub colors: HashMap<V, u32>,
}

impl<V: Copy + Eq + Hash> Coloring<V> {
    pub fn color_of(&self, v: V) -> Option<u32> {
        self.colors.get(&v).copied()
    }

    pub fn chromatic_count(&self) -> usize {
        self.colors.values().collect::<std::collections::HashSet<_>>().len()
    }
}

fn smallest_unused_color(used: &std::collections::HashSet<u32>) -> u32 {
    let mut c = 0;
    while used.contains(&c) {
        c += 1;
    }
    c
}

/// `GreedyColoring::new(graph).run()`: colors vertices in traversal
/// (insertion) order, each time picking the smallest color not already
/// used by an already-colored neighbor.
pub struct GreedyColoring<G> {
    graph: G,
}

impl<G> GreedyColoring<G>
where
    G: AdjacencyGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        GreedyColoring { graph }
    }

    pub fn run(&self) -> Coloring<G::VertexId> {
        let mut colors = HashMap::new();
        for v in self.graph.vertices() {
            let used: std::collections::HashSet<u32> = self
                .graph
                .adjacent_vertices(v)
                .filter_map(|n| colors.get(&n).copied())
                .collect();
            colors.insert(v, smallest_unused_color(&used));
        }
        Coloring { colors }
    }
}

/// `DsaturColoring::new(graph).run()`: repeatedly colors the uncolored
/// vertex with the most distinctly-colored neighbors (breaking ties by
/// degree, then by insertion order).
pub struct DsaturColoring<G> {
    graph: G,
}

impl<G> DsaturColoring<G>
where
    G: AdjacencyGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq + Ord,
{
    pub fn new(graph: G) -> Self {
        DsaturColoring { graph }
    }

    pub fn run(&self) -> Coloring<G::VertexId> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let degree: HashMap<G::VertexId, usize> =
            vertices.iter().map(|&v| (v, self.graph.adjacent_vertices(v).count())).collect();
        let mut colors: HashMap<G::VertexId, u32> = HashMap::new();
        let mut uncolored: std::collections::HashSet<G::VertexId> = vertices.iter().copied().collect();

        while !uncolored.is_empty() {
            let next = *uncolored
                .iter()
                .max_by_key(|&&v| {
                    let saturation = self
                        .graph
                        .adjacent_vertices(v)
                        .filter_map(|n| colors.get(&n).copied())
                        .collect::<std::collections::HashSet<_>>()
                        .len();
                    (saturation, degree[&v], std::cmp::Reverse(v))
                })
                .unwrap();
            let used: std::collections::HashSet<u32> = self
                .graph
                .adjacent_vertices(next)
                .filter_map(|n| colors.get(&n).copied())
                .collect();
            colors.insert(next, smallest_unused_color(&used));
            uncolored.remove(&next);
        }
        Coloring { colors }
    }
}

/// `WelshPowellColoring::new(graph).run()`: sorts vertices by descending
/// degree, then runs the same greedy rule as [`GreedyColoring`] in that
/// order.
pub struct WelshPowellColoring<G> {
    graph: G,
}

impl<G> WelshPowellColoring<G>
where
    G: AdjacencyGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
{
    pub fn new(graph: G) -> Self {
        WelshPowellColoring { graph }
    }

    pub fn run(&self) -> Coloring<G::VertexId> {
        let mut order: Vec<_> = self.graph.vertices().collect();
        let degree: HashMap<G::VertexId, usize> =
            order.iter().map(|&v| (v, self.graph.adjacent_vertices(v).count())).collect();
        // Stable sort keeps insertion order among equal degrees, the
        // library's tie-break convention.
        order.sort_by_key(|&v| MaxScored(degree[&v], ()));
        let mut colors = HashMap::new();
        for v in order {
            let used: std::collections::HashSet<u32> = self
                .graph
                .adjacent_vertices(v)
                .filter_map(|n| colors.get(&n).copied())
                .collect();
            colors.insert(v, smallest_unused_color(&used));
        }
        Coloring { colors }
    }
}
