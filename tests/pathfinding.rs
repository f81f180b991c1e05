use std::collections::HashMap;

use graphlib::algo::dijkstra::Dijkstra;
use graphlib::{CachedAdjacencyList, MutableGraph};

#[test]
fn dijkstra_on_the_sf_road_graph() {
    let mut g = CachedAdjacencyList::new();
    let sf = g.add_vertex();
    let la = g.add_vertex();
    let portland = g.add_vertex();
    let vegas = g.add_vertex();
    let phoenix = g.add_vertex();
    let seattle = g.add_vertex();

    let mut weight = HashMap::new();
    let mut link = |g: &mut CachedAdjacencyList, weight: &mut HashMap<_, u32>, a, b, w| {
        let ab = g.add_edge(a, b).unwrap();
        let ba = g.add_edge(b, a).unwrap();
        weight.insert(ab, w);
        weight.insert(ba, w);
    };
    link(&mut g, &mut weight, sf, la, 380);
    link(&mut g, &mut weight, sf, portland, 630);
    link(&mut g, &mut weight, la, vegas, 270);
    link(&mut g, &mut weight, la, phoenix, 370);
    link(&mut g, &mut weight, portland, seattle, 175);
    link(&mut g, &mut weight, vegas, phoenix, 300);

    let dijkstra = Dijkstra::new(&g).edge_cost(move |e| *weight.get(&e).unwrap());
    let path = dijkstra.path(sf, phoenix).unwrap();

    assert_eq!(path.cost, 750);
    assert_eq!(path.vertices, vec![sf, la, phoenix]);
}
