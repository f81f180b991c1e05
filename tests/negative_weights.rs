use std::collections::HashMap;

use graphlib::algo::bellman_ford::BellmanFord;
use graphlib::capability::EdgeRef;
use graphlib::engine::adjacency_list::AdjacencyEdgeRef;
use graphlib::{CachedAdjacencyList, MutableGraph};

#[test]
fn bellman_ford_takes_the_negative_edge_shortcut() {
    let mut g = CachedAdjacencyList::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    let d = g.add_vertex();

    let mut weight = HashMap::new();
    weight.insert(g.add_edge(a, b).unwrap(), 4i32);
    weight.insert(g.add_edge(a, c).unwrap(), 2);
    weight.insert(g.add_edge(b, c).unwrap(), -3);
    weight.insert(g.add_edge(b, d).unwrap(), 2);
    weight.insert(g.add_edge(c, d).unwrap(), 3);

    let bellman_ford =
        BellmanFord::new(&g).edge_cost(move |edge: AdjacencyEdgeRef| *weight.get(&edge.id()).unwrap());
    let path = bellman_ford.path(a, d).unwrap().unwrap();

    assert_eq!(path.cost, 4);
    assert_eq!(path.vertices, vec![a, b, c, d]);
}

#[test]
fn a_negative_cycle_reachable_from_the_source_is_detected() {
    let mut g = CachedAdjacencyList::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();

    let mut weight = HashMap::new();
    weight.insert(g.add_edge(a, b).unwrap(), 1i32);
    weight.insert(g.add_edge(b, c).unwrap(), -3);
    weight.insert(g.add_edge(c, a).unwrap(), 1);

    let bellman_ford =
        BellmanFord::new(&g).edge_cost(move |edge: AdjacencyEdgeRef| *weight.get(&edge.id()).unwrap());
    assert!(bellman_ford.distances(a).is_err());
}
