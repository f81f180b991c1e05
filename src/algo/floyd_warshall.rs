//! All-pairs shortest paths via dynamic programming over intermediate
//! vertices. Handles negative edges; still requires no negative cycle for
//! the result to be meaningful.

use std::collections::HashMap;
use std::hash::Hash;

use crate::capability::{EdgeListGraph, EdgeRef, VertexListGraph};
use crate::measure::FloatMeasure;

/// `FloydWarshall::new(graph).edge_cost(|e| ...).run()`.
pub struct FloydWarshall<G> {
    graph: G,
}

impl<G: EdgeListGraph + VertexListGraph + Copy> FloydWarshall<G> {
    pub fn new(graph: G) -> Self {
        FloydWarshall { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> FloydWarshallWithCost<G, C>
    where
        C: Fn(G::EdgeRefType) -> K,
        K: FloatMeasure,
    {
        FloydWarshallWithCost { graph: self.graph, cost }
    }
}

pub struct FloydWarshallWithCost<G, C> {
    graph: G,
    cost: C,
}

/// Distances between every ordered pair of vertices that were both present
/// when the algorithm ran. A pair absent from `distances` has no path.
pub struct AllPairs<V, K> {
    pub distances: HashMap<(V, V), K>,
}

impl<V: Copy + Eq + Hash, K: Copy> AllPairs<V, K> {
    pub fn distance(&self, from: V, to: V) -> Option<K> {
        self.distances.get(&(from, to)).copied()
    }
}

impl<G, C, K> FloydWarshallWithCost<G, C>
where
    G: EdgeListGraph + VertexListGraph + Copy,
    G::VertexId: Hash,
    C: Fn(G::EdgeRefType) -> K,
    K: FloatMeasure,
{
    pub fn run(&self) -> AllPairs<G::VertexId, K> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let mut dist: HashMap<(G::VertexId, G::VertexId), K> = HashMap::new();
        for &v in &vertices {
            dist.insert((v, v), K::zero());
        }
        for e in self.graph.edges() {
            let key = (e.source(), e.destination());
            let w = (self.cost)(e);
            let better = dist.get(&key).map_or(true, |&existing| w < existing);
            if better {
                dist.insert(key, w);
            }
        }
        for &k in &vertices {
            for &i in &vertices {
                let Some(&dik) = dist.get(&(i, k)) else { continue };
                for &j in &vertices {
                    let Some(&dkj) = dist.get(&(k, j)) else { continue };
                    let candidate = dik + dkj;
                    let better = dist.get(&(i, j)).map_or(true, |&existing| candidate < existing);
                    if better {
                        dist.insert((i, j), candidate);
                    }
                }
            }
        }
        AllPairs { distances: dist }
    }
}
