use std::collections::HashMap;

use quickcheck::{quickcheck, Arbitrary, Gen};

use graphlib::algo::dijkstra::Dijkstra;
use graphlib::capability::{EdgeListGraph, EdgeRef, IncidenceGraph, VertexListGraph};
use graphlib::engine::adjacency_list::{EdgeId, VertexId};
use graphlib::{CachedAdjacencyList, MutableGraph, Reversed};

/// A random directed graph with `u32` edge weights. Vertex and edge counts
/// are driven down to a quarter of the generator's size so shrinking stays
/// fast, matching the common `Small<T>` halving adaptor for quickcheck.
#[derive(Clone)]
struct RandomGraph {
    graph: CachedAdjacencyList,
    weight: HashMap<EdgeId, u32>,
}

impl std::fmt::Debug for RandomGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let g = &self.graph;
        f.debug_struct("RandomGraph")
            .field("vertices", &g.vertex_count())
            .field("edges", &g.edge_count())
            .finish()
    }
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % (g.size() / 4 + 1);
        let mut graph = CachedAdjacencyList::new();
        let vertices: Vec<VertexId> = (0..n).map(|_| graph.add_vertex()).collect();
        let mut weight = HashMap::new();
        if !vertices.is_empty() {
            let edge_count = usize::arbitrary(g) % (n * 2 + 1);
            for _ in 0..edge_count {
                let from = vertices[usize::arbitrary(g) % vertices.len()];
                let to = vertices[usize::arbitrary(g) % vertices.len()];
                let w = u32::arbitrary(g) % 50;
                if let Some(e) = graph.add_edge(from, to) {
                    weight.insert(e, w);
                }
            }
        }
        RandomGraph { graph, weight }
    }
}

quickcheck! {
    /// Every outgoing edge reported by `outgoing_edges` resolves to a
    /// destination that `out_degree` is counting, and vice versa.
    fn out_degree_matches_outgoing_edges(rg: RandomGraph) -> bool {
        let g = &rg.graph;
        g.vertices().all(|v| g.outgoing_edges(v).count() == g.out_degree(v))
    }
}

quickcheck! {
    /// `edges()` enumerates exactly the edges `outgoing_edges` reaches from
    /// each vertex, and every edge's endpoints agree between the two views.
    fn edge_enumeration_agrees_with_per_vertex_traversal(rg: RandomGraph) -> bool {
        let g = &rg.graph;
        let from_edges: usize = g.edges().count();
        let from_vertices: usize = g.vertices().map(|v| g.outgoing_edges(v).count()).sum();
        if from_edges != from_vertices {
            return false;
        }
        g.edges().all(|e| g.outgoing_edges(e.source()).any(|oe| oe == e.id()))
    }
}

quickcheck! {
    /// Reversing a graph swaps every edge's direction but preserves the
    /// total edge count.
    fn reversed_preserves_edge_count_and_flips_endpoints(rg: RandomGraph) -> bool {
        let g = &rg.graph;
        let reversed = Reversed(g);
        if reversed.edges().count() != g.edges().count() {
            return false;
        }
        g.edges().all(|e| reversed.outgoing_edges(e.destination()).any(|re| re == e.id()))
    }
}

quickcheck! {
    /// Dijkstra's distances satisfy the triangle inequality against every
    /// edge relaxation: `d(start, to) <= d(start, from) + w(from, to)`.
    fn dijkstra_distances_satisfy_the_triangle_inequality(rg: RandomGraph) -> bool {
        let g = &rg.graph;
        let Some(start) = g.vertices().next() else { return true };
        let weight = rg.weight.clone();
        let dijkstra = Dijkstra::new(g).edge_cost(move |e: EdgeId| *weight.get(&e).unwrap_or(&0));
        let distances = dijkstra.distances(start);
        g.edges().all(|e| {
            let (Some(&d_from), Some(&d_to)) = (distances.get(&e.source()), distances.get(&e.destination())) else {
                return true;
            };
            let w = rg.weight.get(&e.id()).copied().unwrap_or(0);
            d_to <= d_from + w
        })
    }
}
