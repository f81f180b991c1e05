//! A storage engine whose vertex descriptors are the caller's own values
//! (strings, tuples, enum variants — anything `Copy + Eq + Hash`) instead
//! of opaque handles, and which allows any number of parallel edges
//! between the same pair of vertices.

use std::collections::HashMap;
use std::hash::Hash;

use crate::capability::{
    AdjacencyGraph, EdgeListGraph, EdgeLookupGraph, EdgeRef as EdgeRefTrait, GraphBase,
    IncidenceGraph, MutablePropertyGraph, PropertyGraph, VertexListGraph,
};
use crate::container::OrderedSet;
use crate::property::DictionaryPropertyMap;

/// An edge descriptor: its endpoints plus an ordinal distinguishing it
/// from other parallel edges between the same pair. Ordinals are never
/// reused, even after the edge they were assigned to is removed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EdgeId<V> {
    source: V,
    destination: V,
    ordinal: u32,
}

#[derive(Copy, Clone)]
pub struct InlineEdgeRef<V> {
    id: EdgeId<V>,
}

impl<V: Copy + Eq + Hash + 'static> EdgeRefTrait for InlineEdgeRef<V> {
    type VertexId = V;
    type EdgeId = EdgeId<V>;
    type Weight = EdgeId<V>;
    fn source(&self) -> V {
        self.id.source
    }
    fn destination(&self) -> V {
        self.id.destination
    }
    fn weight(&self) -> &EdgeId<V> {
        &self.id
    }
    fn id(&self) -> EdgeId<V> {
        self.id
    }
}

pub struct InlineGraph<V: Copy + Eq + Hash + 'static> {
    vertices: OrderedSet<V>,
    out_edges: HashMap<V, Vec<EdgeId<V>>>,
    next_ordinal: HashMap<(V, V), u32>,
    vertex_properties: DictionaryPropertyMap<V>,
    edge_properties: DictionaryPropertyMap<EdgeId<V>>,
}

impl<V: Copy + Eq + Hash + 'static> Default for InlineGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy + Eq + Hash + 'static> InlineGraph<V> {
    pub fn new() -> Self {
        InlineGraph {
            vertices: OrderedSet::new(),
            out_edges: HashMap::new(),
            next_ordinal: HashMap::new(),
            vertex_properties: DictionaryPropertyMap::new(),
            edge_properties: DictionaryPropertyMap::new(),
        }
    }

    /// Insert `value` as a vertex if it is not already one. Returns
    /// `false` if it was already present.
    pub fn add_vertex_value(&mut self, value: V) -> bool {
        if self.vertices.insert(value) {
            self.out_edges.insert(value, Vec::new());
            true
        } else {
            false
        }
    }

    pub fn contains_vertex(&self, value: V) -> bool {
        self.vertices.contains(&value)
    }

    /// Add a parallel edge from `from` to `to`, regardless of how many
    /// edges already connect that pair.
    pub fn add_edge_value(&mut self, from: V, to: V) -> Option<EdgeId<V>> {
        if !self.vertices.contains(&from) || !self.vertices.contains(&to) {
            return None;
        }
        let ordinal = self.next_ordinal.entry((from, to)).or_insert(0);
        let id = EdgeId { source: from, destination: to, ordinal: *ordinal };
        *ordinal += 1;
        self.out_edges.entry(from).or_default().push(id);
        Some(id)
    }

    pub fn remove_vertex_value(&mut self, value: V) -> bool {
        if !self.vertices.shift_remove(&value) {
            return false;
        }
        if let Some(outs) = self.out_edges.remove(&value) {
            for e in outs {
                self.edge_properties.remove(e);
            }
        }
        for list in self.out_edges.values_mut() {
            list.retain(|e| e.destination != value);
        }
        self.vertex_properties.remove(value);
        true
    }

    pub fn remove_edge_value(&mut self, id: EdgeId<V>) -> bool {
        let Some(list) = self.out_edges.get_mut(&id.source) else {
            return false;
        };
        let before = list.len();
        list.retain(|&e| e != id);
        if list.len() == before {
            return false;
        }
        self.edge_properties.remove(id);
        true
    }
}

impl<V: Copy + Eq + Hash + 'static> GraphBase for InlineGraph<V> {
    type VertexId = V;
    type EdgeId = EdgeId<V>;
}

// `MutableGraph::add_vertex` takes no value and returns a fresh
// descriptor — a shape that doesn't fit an engine whose descriptors
// *are* caller-chosen values. `add_vertex_value`/`add_edge_value`/
// `remove_vertex_value`/`remove_edge_value` are the mutators this engine
// actually supports.

impl<'a, V: Copy + Eq + Hash + 'static> GraphBase for &'a InlineGraph<V> {
    type VertexId = V;
    type EdgeId = EdgeId<V>;
}

impl<'a, V: Copy + Eq + Hash + 'static> IncidenceGraph for &'a InlineGraph<V> {
    type OutgoingEdges = std::vec::IntoIter<EdgeId<V>>;
    fn outgoing_edges(self, v: V) -> Self::OutgoingEdges {
        self.out_edges.get(&v).cloned().unwrap_or_default().into_iter()
    }
    fn destination(self, e: EdgeId<V>) -> Option<V> {
        Some(e.destination)
    }
    fn source(self, e: EdgeId<V>) -> Option<V> {
        Some(e.source)
    }
    fn out_degree(self, v: V) -> usize {
        self.out_edges.get(&v).map_or(0, Vec::len)
    }
}

impl<'a, V: Copy + Eq + Hash + 'static> AdjacencyGraph for &'a InlineGraph<V> {
    type AdjacentVertices = std::vec::IntoIter<V>;
    fn adjacent_vertices(self, v: V) -> Self::AdjacentVertices {
        self.out_edges
            .get(&v)
            .map(|edges| edges.iter().map(|e| e.destination).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
    }
}

impl<'a, V: Copy + Eq + Hash + 'static> VertexListGraph for &'a InlineGraph<V> {
    type Vertices = std::vec::IntoIter<V>;
    fn vertices(self) -> Self::Vertices {
        self.vertices.iter().copied().collect::<Vec<_>>().into_iter()
    }
    fn vertex_count(self) -> usize {
        self.vertices.len()
    }
}

impl<'a, V: Copy + Eq + Hash + 'static> EdgeListGraph for &'a InlineGraph<V> {
    type EdgeRefType = InlineEdgeRef<V>;
    type Edges = std::vec::IntoIter<InlineEdgeRef<V>>;
    fn edges(self) -> Self::Edges {
        self.out_edges
            .values()
            .flatten()
            .map(|&id| InlineEdgeRef { id })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn edge_count(self) -> usize {
        self.out_edges.values().map(Vec::len).sum()
    }
}

impl<'a, V: Copy + Eq + Hash + 'static> EdgeLookupGraph for &'a InlineGraph<V> {
    /// Returns the first parallel edge found from `from` to `to`, if any.
    fn edge(self, from: V, to: V) -> Option<EdgeId<V>> {
        self.out_edges.get(&from).and_then(|edges| edges.iter().copied().find(|e| e.destination == to))
    }
}

impl<V: Copy + Eq + Hash + 'static> PropertyGraph for InlineGraph<V> {
    type VertexProperties = DictionaryPropertyMap<V>;
    type EdgeProperties = DictionaryPropertyMap<EdgeId<V>>;
    fn vertex_properties(&self) -> &Self::VertexProperties {
        &self.vertex_properties
    }
    fn edge_properties(&self) -> &Self::EdgeProperties {
        &self.edge_properties
    }
}

impl<V: Copy + Eq + Hash + 'static> MutablePropertyGraph for InlineGraph<V> {
    fn vertex_properties_mut(&mut self) -> &mut Self::VertexProperties {
        &mut self.vertex_properties
    }
    fn edge_properties_mut(&mut self) -> &mut Self::EdgeProperties {
        &mut self.edge_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_user_values() {
        let mut g: InlineGraph<&str> = InlineGraph::new();
        g.add_vertex_value("sf");
        g.add_vertex_value("la");
        assert!(g.contains_vertex("sf"));
        assert!(!g.contains_vertex("nyc"));
    }

    #[test]
    fn parallel_edges_are_all_kept_and_distinguishable() {
        let mut g: InlineGraph<u32> = InlineGraph::new();
        g.add_vertex_value(1);
        g.add_vertex_value(2);
        let e1 = g.add_edge_value(1, 2).unwrap();
        let e2 = g.add_edge_value(1, 2).unwrap();
        assert_ne!(e1, e2);
        assert_eq!((&g).out_degree(1), 2);
    }

    #[test]
    fn removing_vertex_drops_edges_pointing_at_it() {
        let mut g: InlineGraph<u32> = InlineGraph::new();
        g.add_vertex_value(1);
        g.add_vertex_value(2);
        g.add_edge_value(1, 2);
        g.remove_vertex_value(2);
        assert_eq!((&g).out_degree(1), 0);
    }
}
