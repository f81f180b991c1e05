//! Minimum spanning tree / forest: Kruskal's (global, edge-sorted),
//! Prim's (grows one tree from a start vertex), and Borůvka's (parallel
//! component-merging rounds).

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use crate::capability::{EdgeListGraph, EdgeRef, IncidenceGraph, VertexListGraph};
use crate::container::{MinScored, UnionFind};
use crate::measure::FloatMeasure;

/// The edges chosen and their combined weight.
pub struct MstResult<E, K> {
    pub edges: Vec<E>,
    pub total_weight: K,
}

/// `Kruskal::new(graph).edge_cost(|e| ...).run()`.
pub struct Kruskal<G> {
    graph: G,
}

impl<G: EdgeListGraph + VertexListGraph + Copy> Kruskal<G> {
    pub fn new(graph: G) -> Self {
        Kruskal { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> KruskalWithCost<G, C>
    where
        C: Fn(G::EdgeRefType) -> K,
        K: FloatMeasure,
    {
        KruskalWithCost { graph: self.graph, cost }
    }
}

pub struct KruskalWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> KruskalWithCost<G, C>
where
    G: EdgeListGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
    C: Fn(G::EdgeRefType) -> K,
    K: FloatMeasure,
{
    pub fn run(&self) -> MstResult<G::EdgeRefType, K> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let index: HashMap<G::VertexId, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let mut edges: Vec<_> = self.graph.edges().map(|e| (e, (self.cost)(e))).collect();
        edges.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .expect("Kruskal's algorithm requires totally ordered edge weights")
        });
        let mut uf = UnionFind::new(vertices.len());
        let mut chosen = Vec::new();
        let mut total = K::zero();
        for (e, w) in edges {
            let (Some(&ui), Some(&vi)) = (index.get(&e.source()), index.get(&e.destination()))
            else {
                continue;
            };
            if uf.union(ui, vi) {
                chosen.push(e);
                total = total + w;
            }
        }
        MstResult { edges: chosen, total_weight: total }
    }
}

/// `Prim::new(graph).edge_cost(|e| ...).run(start)`. Returns a spanning
/// tree of only the component reachable from `start`.
pub struct Prim<G> {
    graph: G,
}

impl<G: IncidenceGraph + Copy> Prim<G> {
    pub fn new(graph: G) -> Self {
        Prim { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> PrimWithCost<G, C>
    where
        C: Fn(G::EdgeId) -> K,
        K: FloatMeasure,
    {
        PrimWithCost { graph: self.graph, cost }
    }
}

pub struct PrimWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> PrimWithCost<G, C>
where
    G: IncidenceGraph + Copy,
    G::VertexId: Hash,
    C: Fn(G::EdgeId) -> K,
    K: FloatMeasure,
{
    pub fn run(&self, start: G::VertexId) -> MstResult<G::EdgeId, K> {
        let mut in_tree = HashSet::new();
        in_tree.insert(start);
        let mut heap = BinaryHeap::new();
        for e in self.graph.outgoing_edges(start) {
            if let Some(to) = self.graph.destination(e) {
                heap.push(MinScored((self.cost)(e), (e, to)));
            }
        }
        let mut chosen = Vec::new();
        let mut total = K::zero();
        while let Some(MinScored(w, (e, to))) = heap.pop() {
            if in_tree.contains(&to) {
                continue;
            }
            in_tree.insert(to);
            chosen.push(e);
            total = total + w;
            for e2 in self.graph.outgoing_edges(to) {
                if let Some(to2) = self.graph.destination(e2) {
                    if !in_tree.contains(&to2) {
                        heap.push(MinScored((self.cost)(e2), (e2, to2)));
                    }
                }
            }
        }
        MstResult { edges: chosen, total_weight: total }
    }
}

/// `Boruvka::new(graph).edge_cost(|e| ...).run()`.
pub struct Boruvka<G> {
    graph: G,
}

impl<G: EdgeListGraph + VertexListGraph + Copy> Boruvka<G> {
    pub fn new(graph: G) -> Self {
        Boruvka { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> BoruvkaWithCost<G, C>
    where
        C: Fn(G::EdgeRefType) -> K,
        K: FloatMeasure,
    {
        BoruvkaWithCost { graph: self.graph, cost }
    }
}

pub struct BoruvkaWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> BoruvkaWithCost<G, C>
where
    G: EdgeListGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
    C: Fn(G::EdgeRefType) -> K,
    K: FloatMeasure,
{
    pub fn run(&self) -> MstResult<G::EdgeRefType, K> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let index: HashMap<G::VertexId, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let mut uf = UnionFind::new(vertices.len());
        let mut chosen = Vec::new();
        let mut total = K::zero();
        let mut remaining_components = vertices.len();

        while remaining_components > 1 {
            let mut cheapest: Vec<Option<(G::EdgeRefType, K)>> = vec![None; vertices.len()];
            let mut saw_crossing_edge = false;
            for e in self.graph.edges() {
                let (Some(&ui), Some(&vi)) =
                    (index.get(&e.source()), index.get(&e.destination()))
                else {
                    continue;
                };
                let ri = uf.find(ui);
                let rj = uf.find(vi);
                if ri == rj {
                    continue;
                }
                saw_crossing_edge = true;
                let w = (self.cost)(e);
                if cheapest[ri].as_ref().map_or(true, |&(_, existing)| w < existing) {
                    cheapest[ri] = Some((e, w));
                }
                if cheapest[rj].as_ref().map_or(true, |&(_, existing)| w < existing) {
                    cheapest[rj] = Some((e, w));
                }
            }
            if !saw_crossing_edge {
                break;
            }
            let mut merged_any = false;
            for (e, w) in cheapest.into_iter().flatten() {
                let (Some(&ui), Some(&vi)) =
                    (index.get(&e.source()), index.get(&e.destination()))
                else {
                    continue;
                };
                if uf.union(ui, vi) {
                    chosen.push(e);
                    total = total + w;
                    remaining_components -= 1;
                    merged_any = true;
                }
            }
            if !merged_any {
                break;
            }
        }
        MstResult { edges: chosen, total_weight: total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CachedAdjacencyList;
    use std::collections::HashMap as Map;

    // A-B:1, A-C:3, B-C:1, B-D:4, C-D:1, D-E:2, C-E:5 (undirected, modeled
    // as edges both ways) — the minimum spanning tree has weight 1+1+1+2=5.
    fn sample() -> (CachedAdjacencyList, Map<crate::engine::adjacency_list::EdgeId, u32>) {
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let d = g.add_vertex();
        let e = g.add_vertex();
        let mut weight = Map::new();
        let mut link = |g: &mut CachedAdjacencyList, w: &mut Map<_, u32>, x, y, cost| {
            w.insert(g.add_edge(x, y).unwrap(), cost);
            w.insert(g.add_edge(y, x).unwrap(), cost);
        };
        link(&mut g, &mut weight, a, b, 1);
        link(&mut g, &mut weight, a, c, 3);
        link(&mut g, &mut weight, b, c, 1);
        link(&mut g, &mut weight, b, d, 4);
        link(&mut g, &mut weight, c, d, 1);
        link(&mut g, &mut weight, d, e, 2);
        link(&mut g, &mut weight, c, e, 5);
        (g, weight)
    }

    #[test]
    fn kruskal_finds_minimum_total_weight() {
        let (g, weight) = sample();
        let kruskal = Kruskal::new(&g).edge_cost(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| {
            use crate::capability::EdgeRef;
            *weight.get(&e.id()).unwrap()
        });
        let result = kruskal.run();
        assert_eq!(result.total_weight, 5);
        assert_eq!(result.edges.len(), 4);
    }

    #[test]
    fn prim_matches_kruskal_total_weight() {
        let (g, weight) = sample();
        let start = (&g).vertices().next().unwrap();
        let weight2 = weight.clone();
        let kruskal = Kruskal::new(&g).edge_cost(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| {
            use crate::capability::EdgeRef;
            *weight.get(&e.id()).unwrap()
        });
        let prim = Prim::new(&g).edge_cost(move |e| *weight2.get(&e).unwrap());
        assert_eq!(prim.run(start).total_weight, kruskal.run().total_weight);
    }

    #[test]
    fn boruvka_matches_kruskal_total_weight() {
        let (g, weight) = sample();
        let weight2 = weight.clone();
        let kruskal = Kruskal::new(&g).edge_cost(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| {
            use crate::capability::EdgeRef;
            *weight.get(&e.id()).unwrap()
        });
        let boruvka = Boruvka::new(&g).edge_cost(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| {
            use crate::capability::EdgeRef;
            *weight2.get(&e.id()).unwrap()
        });
        assert_eq!(boruvka.run().total_weight, kruskal.run().total_weight);
    }
}
