//! Maximum flow / minimum cut over a residual graph built from the
//! caller's capacities: Ford–Fulkerson (any augmenting path),
//! Edmonds–Karp (BFS augmenting paths), and Dinic (level graph + blocking
//! flow). All three share the same internal residual-network
//! representation and differ only in how they find augmenting paths.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::ops::Sub;

use crate::capability::{EdgeListGraph, EdgeRef, VertexListGraph};
use crate::measure::FloatMeasure;

struct Arc<K> {
    to: usize,
    capacity: K,
    flow: K,
}

/// An internal residual network: each original edge contributes a forward
/// arc and a paired reverse arc (capacity 0 until flow pushes through the
/// forward arc). Built once per `run`, independent of the caller's graph
/// representation.
struct Residual<K> {
    arcs: Vec<Arc<K>>,
    adjacency: Vec<Vec<usize>>,
}

impl<K: FloatMeasure + Sub<Output = K>> Residual<K> {
    fn new(n: usize) -> Self {
        Residual { arcs: Vec::new(), adjacency: vec![Vec::new(); n] }
    }

    fn add_edge(&mut self, from: usize, to: usize, capacity: K) -> usize {
        let forward = self.arcs.len();
        self.arcs.push(Arc { to, capacity, flow: K::zero() });
        self.adjacency[from].push(forward);
        let backward = self.arcs.len();
        self.arcs.push(Arc { to: from, capacity: K::zero(), flow: K::zero() });
        self.adjacency[to].push(backward);
        forward
    }

    fn residual_capacity(&self, arc: usize) -> K {
        self.arcs[arc].capacity - self.arcs[arc].flow
    }

    fn push(&mut self, arc: usize, amount: K) {
        self.arcs[arc].flow = self.arcs[arc].flow + amount;
        self.arcs[arc ^ 1].flow = self.arcs[arc ^ 1].flow - amount;
    }
}

/// Max-flow value, the flow on each original edge, and the edges of the
/// minimum cut (leaving the source side of the residual reachability
/// partition once no more augmenting paths exist).
pub struct MaxFlowResult<E, K> {
    pub value: K,
    pub flow: HashMap<E, K>,
    pub min_cut: Vec<E>,
}

/// `MaxFlow::new(graph).edge_capacity(|e| ...)`, then one of
/// `.ford_fulkerson(source, sink)`, `.edmonds_karp(source, sink)`,
/// `.dinic(source, sink)`.
pub struct MaxFlow<G> {
    graph: G,
}

impl<G: EdgeListGraph + VertexListGraph + Copy> MaxFlow<G> {
    pub fn new(graph: G) -> Self {
        MaxFlow { graph }
    }

    pub fn edge_capacity<C, K>(self, capacity: C) -> MaxFlowWithCapacity<G, C>
    where
        C: Fn(G::EdgeRefType) -> K,
        K: FloatMeasure + Sub<Output = K>,
    {
        MaxFlowWithCapacity { graph: self.graph, capacity }
    }
}

pub struct MaxFlowWithCapacity<G, C> {
    graph: G,
    capacity: C,
}

struct Network<G: EdgeListGraph, K> {
    index: HashMap<G::VertexId, usize>,
    vertices: Vec<G::VertexId>,
    edge_arc: Vec<(G::EdgeRefType, usize)>,
    residual: Residual<K>,
}

impl<G, C, K> MaxFlowWithCapacity<G, C>
where
    G: EdgeListGraph + VertexListGraph + Copy,
    G::VertexId: Hash + Eq,
    G::EdgeId: Hash + Eq,
    C: Fn(G::EdgeRefType) -> K,
    K: FloatMeasure + Sub<Output = K>,
{
    fn build_network(&self) -> Network<G, K> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let index: HashMap<G::VertexId, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let mut residual = Residual::new(vertices.len());
        let mut edge_arc = Vec::new();
        for e in self.graph.edges() {
            let (Some(&ui), Some(&vi)) = (index.get(&e.source()), index.get(&e.destination()))
            else {
                continue;
            };
            let arc = residual.add_edge(ui, vi, (self.capacity)(e));
            edge_arc.push((e, arc));
        }
        Network { index, vertices, edge_arc, residual }
    }

    fn finish(&self, net: Network<G, K>, source: G::VertexId) -> MaxFlowResult<G::EdgeId, K> {
        let flow: HashMap<G::EdgeId, K> =
            net.edge_arc.iter().map(|(e, arc)| (e.id(), net.residual.arcs[*arc].flow)).collect();
        let value = net
            .index
            .get(&source)
            .map(|&si| {
                net.residual.adjacency[si]
                    .iter()
                    .fold(K::zero(), |acc, &arc| acc + net.residual.arcs[arc].flow)
            })
            .unwrap_or_else(K::zero);

        // Min cut: vertices reachable from the source in the *final*
        // residual graph are the source side; every original edge
        // crossing to the sink side is a cut edge.
        let mut reachable = vec![false; net.vertices.len()];
        if let Some(&si) = net.index.get(&source) {
            let mut stack = vec![si];
            reachable[si] = true;
            while let Some(u) = stack.pop() {
                for &arc in &net.residual.adjacency[u] {
                    if net.residual.residual_capacity(arc) > K::zero() {
                        let to = net.residual.arcs[arc].to;
                        if !reachable[to] {
                            reachable[to] = true;
                            stack.push(to);
                        }
                    }
                }
            }
        }
        let min_cut = net
            .edge_arc
            .iter()
            .filter(|(_, arc)| {
                let from_idx = net.residual.arcs[arc ^ 1].to;
                let to_idx = net.residual.arcs[*arc].to;
                reachable[from_idx] && !reachable[to_idx]
            })
            .map(|(e, _)| e.id())
            .collect();

        MaxFlowResult { value, flow, min_cut }
    }

    /// Any augmenting path, found by DFS; simplest and slowest of the
    /// three.
    pub fn ford_fulkerson(&self, source: G::VertexId, sink: G::VertexId) -> MaxFlowResult<G::EdgeId, K> {
        let mut net = self.build_network();
        let (Some(&si), Some(&ti)) = (net.index.get(&source), net.index.get(&sink)) else {
            return MaxFlowResult { value: K::zero(), flow: HashMap::new(), min_cut: Vec::new() };
        };
        loop {
            let mut parent_arc = vec![None; net.vertices.len()];
            let mut visited = vec![false; net.vertices.len()];
            visited[si] = true;
            let mut stack = vec![si];
            while let Some(u) = stack.pop() {
                if u == ti {
                    break;
                }
                for &arc in &net.residual.adjacency[u] {
                    if net.residual.residual_capacity(arc) > K::zero() {
                        let to = net.residual.arcs[arc].to;
                        if !visited[to] {
                            visited[to] = true;
                            parent_arc[to] = Some(arc);
                            stack.push(to);
                        }
                    }
                }
            }
            if !visited[ti] {
                break;
            }
            augment(&mut net.residual, &parent_arc, si, ti);
        }
        self.finish(net, source)
    }

    /// BFS augmenting paths: O(V * E^2).
    pub fn edmonds_karp(&self, source: G::VertexId, sink: G::VertexId) -> MaxFlowResult<G::EdgeId, K> {
        let mut net = self.build_network();
        let (Some(&si), Some(&ti)) = (net.index.get(&source), net.index.get(&sink)) else {
            return MaxFlowResult { value: K::zero(), flow: HashMap::new(), min_cut: Vec::new() };
        };
        loop {
            let mut parent_arc = vec![None; net.vertices.len()];
            let mut visited = vec![false; net.vertices.len()];
            visited[si] = true;
            let mut queue = VecDeque::new();
            queue.push_back(si);
            while let Some(u) = queue.pop_front() {
                if u == ti {
                    break;
                }
                for &arc in &net.residual.adjacency[u] {
                    if net.residual.residual_capacity(arc) > K::zero() {
                        let to = net.residual.arcs[arc].to;
                        if !visited[to] {
                            visited[to] = true;
                            parent_arc[to] = Some(arc);
                            queue.push_back(to);
                        }
                    }
                }
            }
            if !visited[ti] {
                break;
            }
            augment(&mut net.residual, &parent_arc, si, ti);
        }
        self.finish(net, source)
    }

    /// Level graph + blocking flow via DFS within each level graph.
    pub fn dinic(&self, source: G::VertexId, sink: G::VertexId) -> MaxFlowResult<G::EdgeId, K> {
        let mut net = self.build_network();
        let (Some(&si), Some(&ti)) = (net.index.get(&source), net.index.get(&sink)) else {
            return MaxFlowResult { value: K::zero(), flow: HashMap::new(), min_cut: Vec::new() };
        };
        let n = net.vertices.len();
        loop {
            let level = bfs_levels(&net.residual, si, n);
            if level[ti].is_none() {
                break;
            }
            let mut iter_pos = vec![0usize; n];
            loop {
                let pushed = dinic_dfs(&mut net.residual, &level, &mut iter_pos, si, ti, K::infinite());
                if pushed == K::zero() {
                    break;
                }
            }
        }
        self.finish(net, source)
    }
}

fn augment<K: FloatMeasure + Sub<Output = K>>(
    residual: &mut Residual<K>,
    parent_arc: &[Option<usize>],
    source: usize,
    sink: usize,
) {
    let mut bottleneck = K::infinite();
    let mut v = sink;
    while v != source {
        let arc = parent_arc[v].unwrap();
        let cap = residual.residual_capacity(arc);
        if cap < bottleneck {
            bottleneck = cap;
        }
        v = residual.arcs[arc ^ 1].to;
    }
    let mut v = sink;
    while v != source {
        let arc = parent_arc[v].unwrap();
        residual.push(arc, bottleneck);
        v = residual.arcs[arc ^ 1].to;
    }
}

fn bfs_levels<K: FloatMeasure + Sub<Output = K>>(residual: &Residual<K>, source: usize, n: usize) -> Vec<Option<u32>> {
    let mut level = vec![None; n];
    level[source] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for &arc in &residual.adjacency[u] {
            if residual.residual_capacity(arc) > K::zero() {
                let to = residual.arcs[arc].to;
                if level[to].is_none() {
                    level[to] = Some(level[u].unwrap() + 1);
                    queue.push_back(to);
                }
            }
        }
    }
    level
}

fn dinic_dfs<K: FloatMeasure + Sub<Output = K>>(
    residual: &mut Residual<K>,
    level: &[Option<u32>],
    iter_pos: &mut [usize],
    u: usize,
    sink: usize,
    bound: K,
) -> K {
    if u == sink {
        return bound;
    }
    while iter_pos[u] < residual.adjacency[u].len() {
        let arc = residual.adjacency[u][iter_pos[u]];
        let to = residual.arcs[arc].to;
        let cap = residual.residual_capacity(arc);
        if cap > K::zero() && level[to] == level[u].map(|l| l + 1) {
            let pushed_bound = if cap < bound { cap } else { bound };
            let pushed = dinic_dfs(residual, level, iter_pos, to, sink, pushed_bound);
            if pushed > K::zero() {
                residual.push(arc, pushed);
                return pushed;
            }
        }
        iter_pos[u] += 1;
    }
    K::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::EdgeRef as EdgeRefTrait;
    use crate::engine::AdjacencyList;
    use std::collections::HashMap as Map;

    // S->A 10, S->B 5, A->B 15, A->T 10, B->T 10.
    fn sample() -> (AdjacencyList, Map<crate::engine::adjacency_list::EdgeId, u32>, crate::engine::adjacency_list::VertexId, crate::engine::adjacency_list::VertexId) {
        let mut g = AdjacencyList::new();
        let s = g.add_vertex();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let t = g.add_vertex();
        let mut cap = Map::new();
        cap.insert(g.add_edge(s, a).unwrap(), 10);
        cap.insert(g.add_edge(s, b).unwrap(), 5);
        cap.insert(g.add_edge(a, b).unwrap(), 15);
        cap.insert(g.add_edge(a, t).unwrap(), 10);
        cap.insert(g.add_edge(b, t).unwrap(), 10);
        (g, cap, s, t)
    }

    #[test]
    fn dinic_matches_the_worked_example() {
        let (g, cap, s, t) = sample();
        let flow = MaxFlow::new(&g)
            .edge_capacity(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| *cap.get(&e.id()).unwrap())
            .dinic(s, t);
        assert_eq!(flow.value, 15);
        assert_eq!(flow.min_cut.iter().map(|_| 1).sum::<u32>() > 0, true);
    }

    #[test]
    fn edmonds_karp_and_ford_fulkerson_agree_with_dinic() {
        let (g, cap, s, t) = sample();
        let cap2 = cap.clone();
        let cap3 = cap.clone();
        let dinic = MaxFlow::new(&g)
            .edge_capacity(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| *cap.get(&e.id()).unwrap())
            .dinic(s, t);
        let ek = MaxFlow::new(&g)
            .edge_capacity(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| *cap2.get(&e.id()).unwrap())
            .edmonds_karp(s, t);
        let ff = MaxFlow::new(&g)
            .edge_capacity(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| *cap3.get(&e.id()).unwrap())
            .ford_fulkerson(s, t);
        assert_eq!(dinic.value, ek.value);
        assert_eq!(dinic.value, ff.value);
    }

    #[test]
    fn min_cut_capacity_equals_max_flow_value() {
        let (g, cap, s, t) = sample();
        let cap2 = cap.clone();
        let result = MaxFlow::new(&g)
            .edge_capacity(move |e: crate::engine::adjacency_list::AdjacencyEdgeRef| *cap.get(&e.id()).unwrap())
            .dinic(s, t);
        let cut_capacity: u32 = result.min_cut.iter().map(|e| *cap2.get(e).unwrap()).sum();
        assert_eq!(cut_capacity, result.value);
    }

    #[test]
    fn disconnected_source_and_sink_yield_zero_flow() {
        let mut g = AdjacencyList::new();
        let s = g.add_vertex();
        let t = g.add_vertex();
        let flow = MaxFlow::new(&g).edge_capacity(|_: crate::engine::adjacency_list::AdjacencyEdgeRef| 1u32).dinic(s, t);
        assert_eq!(flow.value, 0);
    }
}
