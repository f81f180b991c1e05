//! Random graph generators. Every generator takes its randomness from a
//! caller-supplied `rand::Rng`, never a process-wide source, so results
//! are reproducible by seeding the same RNG.

use rand::Rng;

use crate::capability::MutableGraph;

/// Erdős–Rényi G(n, p): `n` vertices, each of the `n*(n-1)` directed
/// ordered pairs included independently with probability `p`.
pub fn erdos_renyi<G, R>(graph: &mut G, n: usize, p: f64, rng: &mut R) -> Vec<G::VertexId>
where
    G: MutableGraph,
    R: Rng + ?Sized,
{
    let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if rng.gen::<f64>() < p {
                graph.add_edge(vertices[i], vertices[j]);
            }
        }
    }
    vertices
}

/// Barabási–Albert preferential attachment: starts from an `m`-vertex
/// clique-like seed and grows to `n` vertices, each new vertex attaching
/// `m` edges chosen with probability proportional to existing degree.
pub fn barabasi_albert<G, R>(graph: &mut G, n: usize, m: usize, rng: &mut R) -> Vec<G::VertexId>
where
    G: MutableGraph,
    G::VertexId: Copy,
    R: Rng + ?Sized,
{
    assert!(m >= 1 && m < n, "barabasi_albert requires 1 <= m < n");

    let mut vertices = Vec::with_capacity(n);
    // `targets` holds one entry per directed arc endpoint seen so far;
    // sampling uniformly from it is sampling proportional to degree.
    let mut targets: Vec<G::VertexId> = Vec::new();

    for _ in 0..=m {
        vertices.push(graph.add_vertex());
    }
    for i in 0..=m {
        for j in 0..i {
            graph.add_edge(vertices[i], vertices[j]);
            graph.add_edge(vertices[j], vertices[i]);
            targets.push(vertices[i]);
            targets.push(vertices[j]);
        }
    }

    for _ in (m + 1)..n {
        let new_vertex = graph.add_vertex();
        let mut attached = std::collections::HashSet::new();
        while attached.len() < m && attached.len() < targets.len().max(1) {
            if targets.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..targets.len());
            attached.insert(targets[idx]);
        }
        for &target in &attached {
            graph.add_edge(new_vertex, target);
            graph.add_edge(target, new_vertex);
            targets.push(new_vertex);
            targets.push(target);
        }
        vertices.push(new_vertex);
    }

    vertices
}

/// Watts–Strogatz small-world: an `n`-vertex ring where each vertex
/// starts connected to its `k` nearest neighbors (`k` must be even), then
/// every edge is rewired to a uniformly random target with probability
/// `p` (never to itself or an existing neighbor).
pub fn watts_strogatz<G, R>(graph: &mut G, n: usize, k: usize, p: f64, rng: &mut R) -> Vec<G::VertexId>
where
    G: MutableGraph,
    G::VertexId: Copy + Eq,
    R: Rng + ?Sized,
{
    assert!(k % 2 == 0, "watts_strogatz requires an even k");
    assert!(k < n, "watts_strogatz requires k < n");

    let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for step in 1..=(k / 2) {
            let j = (i + step) % n;
            neighbors[i].push(j);
            neighbors[j].push(i);
        }
    }

    for i in 0..n {
        for step in 1..=(k / 2) {
            let original_j = (i + step) % n;
            if rng.gen::<f64>() >= p {
                continue;
            }
            let mut candidate;
            loop {
                candidate = rng.gen_range(0..n);
                if candidate != i && !neighbors[i].contains(&candidate) {
                    break;
                }
            }
            neighbors[i].retain(|&x| x != original_j);
            neighbors[original_j].retain(|&x| x != i);
            neighbors[i].push(candidate);
            neighbors[candidate].push(i);
        }
    }

    for i in 0..n {
        for &j in &neighbors[i] {
            if i < j {
                graph.add_edge(vertices[i], vertices[j]);
                graph.add_edge(vertices[j], vertices[i]);
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{EdgeListGraph, IncidenceGraph, VertexListGraph};
    use crate::engine::CachedAdjacencyList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn erdos_renyi_with_p_zero_has_no_edges() {
        let mut g = CachedAdjacencyList::new();
        let mut rng = StdRng::seed_from_u64(1);
        erdos_renyi(&mut g, 10, 0.0, &mut rng);
        assert_eq!((&g).vertex_count(), 10);
        assert_eq!((&g).edge_count(), 0);
    }

    #[test]
    fn erdos_renyi_with_p_one_is_a_complete_directed_graph() {
        let mut g = CachedAdjacencyList::new();
        let mut rng = StdRng::seed_from_u64(1);
        erdos_renyi(&mut g, 5, 1.0, &mut rng);
        assert_eq!((&g).edge_count(), 5 * 4);
    }

    #[test]
    fn barabasi_albert_grows_to_the_requested_vertex_count() {
        let mut g = CachedAdjacencyList::new();
        let mut rng = StdRng::seed_from_u64(7);
        let vertices = barabasi_albert(&mut g, 20, 3, &mut rng);
        assert_eq!(vertices.len(), 20);
        assert_eq!((&g).vertex_count(), 20);
    }

    #[test]
    fn watts_strogatz_ring_has_the_expected_vertex_count() {
        let mut g = CachedAdjacencyList::new();
        let mut rng = StdRng::seed_from_u64(3);
        let vertices = watts_strogatz(&mut g, 10, 4, 0.1, &mut rng);
        assert_eq!(vertices.len(), 10);
        assert_eq!((&g).vertex_count(), 10);
    }

    #[test]
    fn watts_strogatz_with_zero_rewiring_probability_keeps_the_ring_lattice() {
        let mut g = CachedAdjacencyList::new();
        let mut rng = StdRng::seed_from_u64(3);
        watts_strogatz(&mut g, 10, 4, 0.0, &mut rng);
        // Every vertex has degree k in a pure ring lattice: k/2 neighbors
        // on each side, each contributing one outgoing and one incoming arc.
        for v in (&g).vertices() {
            assert_eq!((&g).out_degree(v), 4);
        }
    }
}
