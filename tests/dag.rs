use graphlib::algo::toposort::Toposort;
use graphlib::{AdjacencyList, MutableGraph};

#[test]
fn topological_sort_orders_a_diamond_dag() {
    let mut g = AdjacencyList::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    let d = g.add_vertex();
    let e = g.add_vertex();
    g.add_edge(a, c);
    g.add_edge(b, c);
    g.add_edge(b, d);
    g.add_edge(c, e);
    g.add_edge(d, e);

    let order = Toposort::new(&g).run().unwrap();
    assert_eq!(order.len(), 5);
    let position = |v| order.iter().position(|&x| x == v).unwrap();
    assert!(position(a) < position(c));
    assert!(position(b) < position(c));
    assert!(position(b) < position(d));
    assert!(position(c) < position(e));
    assert!(position(d) < position(e));
}

#[test]
fn a_cycle_has_no_topological_order() {
    let mut g = AdjacencyList::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    g.add_edge(a, b);
    g.add_edge(b, c);
    g.add_edge(c, a);
    assert!(Toposort::new(&g).run().is_none());
}
