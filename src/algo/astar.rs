//! Single-target shortest path guided by an admissible heuristic.

use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

use crate::algo::Path;
use crate::capability::IncidenceGraph;
use crate::container::MinScored;
use crate::measure::FloatMeasure;

/// `AStar::new(graph).edge_cost(|e| ...).heuristic(|v| ...).path(start, goal)`.
/// The heuristic must never overestimate the true remaining cost, or the
/// path found is not guaranteed shortest.
pub struct AStar<G> {
    graph: G,
}

impl<G: IncidenceGraph + Copy> AStar<G> {
    pub fn new(graph: G) -> Self {
        AStar { graph }
    }

    pub fn edge_cost<C, K>(self, cost: C) -> AStarWithCost<G, C>
    where
        C: Fn(G::EdgeId) -> K,
        K: FloatMeasure,
    {
        AStarWithCost { graph: self.graph, cost }
    }
}

pub struct AStarWithCost<G, C> {
    graph: G,
    cost: C,
}

impl<G, C, K> AStarWithCost<G, C>
where
    G: IncidenceGraph + Copy,
    C: Fn(G::EdgeId) -> K,
    K: FloatMeasure,
{
    pub fn heuristic<H>(self, heuristic: H) -> AStarReady<G, C, H>
    where
        H: Fn(G::VertexId) -> K,
    {
        AStarReady { graph: self.graph, cost: self.cost, heuristic }
    }
}

pub struct AStarReady<G, C, H> {
    graph: G,
    cost: C,
    heuristic: H,
}

impl<G, C, H, K> AStarReady<G, C, H>
where
    G: IncidenceGraph + Copy,
    G::VertexId: Hash,
    C: Fn(G::EdgeId) -> K,
    H: Fn(G::VertexId) -> K,
    K: FloatMeasure,
{
    pub fn path(&self, start: G::VertexId, goal: G::VertexId) -> Option<Path<G::VertexId, G::EdgeId, K>> {
        let mut g_score = HashMap::new();
        let mut prev: HashMap<G::VertexId, (G::VertexId, G::EdgeId)> = HashMap::new();
        let mut open = BinaryHeap::new();
        g_score.insert(start, K::zero());
        open.push(MinScored((self.heuristic)(start), start));
        let mut closed = std::collections::HashSet::new();

        while let Some(MinScored(_, v)) = open.pop() {
            if v == goal {
                break;
            }
            if !closed.insert(v) {
                continue;
            }
            let current_g = g_score[&v];
            for e in self.graph.outgoing_edges(v) {
                let Some(to) = self.graph.destination(e) else { continue };
                let tentative = current_g + (self.cost)(e);
                if g_score.get(&to).map_or(true, |&best| tentative < best) {
                    g_score.insert(to, tentative);
                    prev.insert(to, (v, e));
                    open.push(MinScored(tentative + (self.heuristic)(to), to));
                }
            }
        }

        let &cost = g_score.get(&goal)?;
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::{Direction, GridGraph, VertexId};

    fn manhattan(a: VertexId, b: VertexId) -> f64 {
        ((a.0 as i64 - b.0 as i64).abs() + (a.1 as i64 - b.1 as i64).abs()) as f64
    }

    #[test]
    fn astar_finds_shortest_path_around_obstacles() {
        let mut grid = GridGraph::new(5, 5, Direction::Orthogonal);
        for (x, y) in [(1, 1), (2, 1), (3, 2)] {
            grid.set_blocked(x, y, true);
        }
        let goal = VertexId(4, 4);
        let astar = AStar::new(&grid)
            .edge_cost(|e: crate::engine::grid::EdgeId| grid.step_cost(e))
            .heuristic(move |v: VertexId| manhattan(v, goal));
        let path = astar.path(VertexId(0, 0), goal).unwrap();
        assert_eq!(path.vertices.first(), Some(&VertexId(0, 0)));
        assert_eq!(path.vertices.last(), Some(&goal));
        assert_eq!(path.edges.len(), path.vertices.len() - 1);
        assert!(path.cost >= manhattan(VertexId(0, 0), goal));
    }

    #[test]
    fn astar_with_zero_heuristic_matches_dijkstra_cost() {
        use crate::algo::dijkstra::Dijkstra;
        use crate::engine::CachedAdjacencyList;
        let mut g = CachedAdjacencyList::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, c);
        let astar = AStar::new(&g).edge_cost(|_| 1u32).heuristic(|_| 0u32);
        let dijkstra = Dijkstra::new(&g).edge_cost(|_| 1u32);
        assert_eq!(astar.path(a, c).unwrap().cost, dijkstra.path(a, c).unwrap().cost);
    }
}
