//! Cost definitions: how shortest-path/MST/flow strategies learn an edge's
//! weight or a vertex's heuristic cost without hardcoding a property name.
//!
//! An algorithm that needs a weight or heuristic accepts a plain
//! `Fn(edge_or_vertex) -> cost` closure rather than assuming a fixed
//! property name. The functions below are convenience constructors for the
//! common shapes of that closure: "read property P", "constant c", and
//! "custom closure".

use crate::capability::EdgeRef;
use crate::property::{Property, PropertyMap};

/// A cost definition that ignores its input and always returns the same
/// value — the "constant c" constructor.
pub fn constant<T, K: Clone>(value: K) -> impl Fn(T) -> K + Clone {
    move |_| value.clone()
}

/// A cost definition that reads property `P` off an edge reference's
/// weight payload directly (when the engine's edge weight type *is* `P`'s
/// value type, e.g. a plain numeric edge weight).
pub fn edge_weight<E>() -> impl Fn(E) -> E::Weight + Clone
where
    E: EdgeRef,
    E::Weight: Clone,
{
    |edge: E| edge.weight().clone()
}

/// A cost definition that looks property `P` up in a graph's edge property
/// map by the edge's descriptor — the "read property P" constructor.
pub fn edge_property<'g, P, M>(properties: &'g M) -> impl Fn(M::Key) -> P::Value + 'g
where
    P: Property,
    M: PropertyMap,
{
    move |key| properties.get::<P>(key)
}

/// A cost definition that looks property `P` up in a graph's vertex
/// property map by the vertex's descriptor — used for A*'s heuristic when
/// the heuristic is precomputed and stored rather than computed on the fly.
pub fn vertex_property<'g, P, M>(properties: &'g M) -> impl Fn(M::Key) -> P::Value + 'g
where
    P: Property,
    M: PropertyMap,
{
    move |key| properties.get::<P>(key)
}

/// Identity constructor for a custom closure; exists purely so call sites
/// can write `cost::custom(|e| ...)` alongside `cost::constant`/`cost::edge_property`
/// for a uniform factory-function surface.
pub fn custom<F, T, K>(f: F) -> F
where
    F: Fn(T) -> K,
{
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_cost_ignores_input() {
        let cost = constant::<i32, u32>(7);
        assert_eq!(cost(1), 7);
        assert_eq!(cost(999), 7);
    }
}
