//! A storage engine that tags every vertex `Left` or `Right` and refuses
//! to connect two vertices on the same side.

use std::collections::HashMap;

use crate::capability::{
    AdjacencyGraph, BipartiteGraph, EdgeListGraph, EdgeLookupGraph, EdgeRef as EdgeRefTrait,
    GraphBase, IncidenceGraph, MutableBipartiteGraph, MutableGraph, MutablePropertyGraph, Part,
    PropertyGraph, VertexListGraph,
};
use crate::container::{OrderedMap, OrderedSet};
use crate::property::DictionaryPropertyMap;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct VertexId(u32);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct EdgeId(u32);

#[derive(Copy, Clone)]
struct Endpoints {
    source: VertexId,
    destination: VertexId,
}

#[derive(Copy, Clone)]
pub struct BipartiteEdgeRef {
    id: EdgeId,
    source: VertexId,
    destination: VertexId,
}

impl EdgeRefTrait for BipartiteEdgeRef {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
    type Weight = EdgeId;
    fn source(&self) -> VertexId {
        self.source
    }
    fn destination(&self) -> VertexId {
        self.destination
    }
    fn weight(&self) -> &EdgeId {
        &self.id
    }
    fn id(&self) -> EdgeId {
        self.id
    }
}

/// An adjacency list whose vertices carry a `Left`/`Right` partition tag.
/// `add_edge` fails when both endpoints are on the same side.
pub struct BipartiteAdjacencyList {
    next_vertex: u32,
    live_vertices: OrderedSet<VertexId>,
    parts: HashMap<VertexId, Part>,
    next_edge: u32,
    endpoints: OrderedMap<EdgeId, Endpoints>,
    out_edges: HashMap<VertexId, Vec<EdgeId>>,
    vertex_properties: DictionaryPropertyMap<VertexId>,
    edge_properties: DictionaryPropertyMap<EdgeId>,
}

impl Default for BipartiteAdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl BipartiteAdjacencyList {
    pub fn new() -> Self {
        BipartiteAdjacencyList {
            next_vertex: 0,
            live_vertices: OrderedSet::new(),
            parts: HashMap::new(),
            next_edge: 0,
            endpoints: OrderedMap::new(),
            out_edges: HashMap::new(),
            vertex_properties: DictionaryPropertyMap::new(),
            edge_properties: DictionaryPropertyMap::new(),
        }
    }
}

impl GraphBase for BipartiteAdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl MutableGraph for BipartiteAdjacencyList {
    fn add_vertex(&mut self) -> VertexId {
        self.add_vertex_to(Part::Left)
    }

    fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.live_vertices.shift_remove(&v) {
            return false;
        }
        if let Some(outs) = self.out_edges.remove(&v) {
            for e in outs {
                self.endpoints.shift_remove(&e);
                self.edge_properties.remove(e);
            }
        }
        let dangling: Vec<EdgeId> = self
            .endpoints
            .iter()
            .filter(|(_, ep)| ep.destination == v)
            .map(|(&e, _)| e)
            .collect();
        if !dangling.is_empty() {
            let set: std::collections::HashSet<EdgeId> = dangling.iter().copied().collect();
            for e in &dangling {
                self.endpoints.shift_remove(e);
                self.edge_properties.remove(*e);
            }
            for list in self.out_edges.values_mut() {
                list.retain(|e| !set.contains(e));
            }
        }
        self.parts.remove(&v);
        self.vertex_properties.remove(v);
        true
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.live_vertices.contains(&from) || !self.live_vertices.contains(&to) {
            return None;
        }
        if self.parts.get(&from) == self.parts.get(&to) {
            return None;
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.endpoints.insert(id, Endpoints { source: from, destination: to });
        self.out_edges.entry(from).or_default().push(id);
        Some(id)
    }

    fn remove_edge(&mut self, e: EdgeId) -> bool {
        let Some(ep) = self.endpoints.shift_remove(&e) else {
            return false;
        };
        if let Some(list) = self.out_edges.get_mut(&ep.source) {
            list.retain(|&x| x != e);
        }
        self.edge_properties.remove(e);
        true
    }
}

impl MutableBipartiteGraph for BipartiteAdjacencyList {
    fn add_vertex_to(&mut self, part: Part) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.live_vertices.insert(id);
        self.out_edges.insert(id, Vec::new());
        self.parts.insert(id, part);
        id
    }

    fn move_vertex(&mut self, vertex: VertexId, to: Part) -> bool {
        if !self.live_vertices.contains(&vertex) {
            return false;
        }
        self.parts.insert(vertex, to);
        true
    }
}

impl<'a> GraphBase for &'a BipartiteAdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> IncidenceGraph for &'a BipartiteAdjacencyList {
    type OutgoingEdges = std::vec::IntoIter<EdgeId>;
    fn outgoing_edges(self, v: VertexId) -> Self::OutgoingEdges {
        self.out_edges.get(&v).cloned().unwrap_or_default().into_iter()
    }
    fn destination(self, e: EdgeId) -> Option<VertexId> {
        self.endpoints.get(&e).map(|ep| ep.destination)
    }
    fn source(self, e: EdgeId) -> Option<VertexId> {
        self.endpoints.get(&e).map(|ep| ep.source)
    }
    fn out_degree(self, v: VertexId) -> usize {
        self.out_edges.get(&v).map_or(0, Vec::len)
    }
}

impl<'a> AdjacencyGraph for &'a BipartiteAdjacencyList {
    type AdjacentVertices = std::vec::IntoIter<VertexId>;
    fn adjacent_vertices(self, v: VertexId) -> Self::AdjacentVertices {
        self.out_edges
            .get(&v)
            .map(|edges| {
                edges
                    .iter()
                    .filter_map(|e| self.endpoints.get(e).map(|ep| ep.destination))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
            .into_iter()
    }
}

impl<'a> VertexListGraph for &'a BipartiteAdjacencyList {
    type Vertices = std::vec::IntoIter<VertexId>;
    fn vertices(self) -> Self::Vertices {
        self.live_vertices.iter().copied().collect::<Vec<_>>().into_iter()
    }
    fn vertex_count(self) -> usize {
        self.live_vertices.len()
    }
}

impl<'a> EdgeListGraph for &'a BipartiteAdjacencyList {
    type EdgeRefType = BipartiteEdgeRef;
    type Edges = std::vec::IntoIter<BipartiteEdgeRef>;
    fn edges(self) -> Self::Edges {
        self.endpoints
            .iter()
            .map(|(&id, ep)| BipartiteEdgeRef { id, source: ep.source, destination: ep.destination })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn edge_count(self) -> usize {
        self.endpoints.len()
    }
}

impl<'a> EdgeLookupGraph for &'a BipartiteAdjacencyList {
    fn edge(self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.out_edges.get(&from).and_then(|edges| {
            edges.iter().copied().find(|e| self.endpoints.get(e).map(|ep| ep.destination) == Some(to))
        })
    }
}

impl<'a> BipartiteGraph for &'a BipartiteAdjacencyList {
    fn partition(self, v: VertexId) -> Option<Part> {
        self.parts.get(&v).copied()
    }

    type LeftPartition = std::vec::IntoIter<VertexId>;
    type RightPartition = std::vec::IntoIter<VertexId>;

    fn left_partition(self) -> Self::LeftPartition {
        self.live_vertices
            .iter()
            .copied()
            .filter(|v| self.parts.get(v) == Some(&Part::Left))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn right_partition(self) -> Self::RightPartition {
        self.live_vertices
            .iter()
            .copied()
            .filter(|v| self.parts.get(v) == Some(&Part::Right))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl PropertyGraph for BipartiteAdjacencyList {
    type VertexProperties = DictionaryPropertyMap<VertexId>;
    type EdgeProperties = DictionaryPropertyMap<EdgeId>;
    fn vertex_properties(&self) -> &Self::VertexProperties {
        &self.vertex_properties
    }
    fn edge_properties(&self) -> &Self::EdgeProperties {
        &self.edge_properties
    }
}

impl MutablePropertyGraph for BipartiteAdjacencyList {
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
    fn add_edge_within_same_part_fails() {
        let mut g = BipartiteAdjacencyList::new();
        let a = g.add_vertex_to(Part::Left);
        let b = g.add_vertex_to(Part::Left);
        assert!(g.add_edge(a, b).is_none());
    }

    #[test]
    fn add_edge_across_parts_succeeds() {
        let mut g = BipartiteAdjacencyList::new();
        let a = g.add_vertex_to(Part::Left);
        let b = g.add_vertex_to(Part::Right);
        assert!(g.add_edge(a, b).is_some());
    }

    #[test]
    fn move_vertex_changes_partition() {
        let mut g = BipartiteAdjacencyList::new();
        let a = g.add_vertex_to(Part::Left);
        assert_eq!((&g).partition(a), Some(Part::Left));
        g.move_vertex(a, Part::Right);
        assert_eq!((&g).partition(a), Some(Part::Right));
    }

    #[test]
    fn partitions_enumerate_only_their_own_side() {
        let mut g = BipartiteAdjacencyList::new();
        let a = g.add_vertex_to(Part::Left);
        let b = g.add_vertex_to(Part::Right);
        let left: Vec<_> = (&g).left_partition().collect();
        let right: Vec<_> = (&g).right_partition().collect();
        assert_eq!(left, vec![a]);
        assert_eq!(right, vec![b]);
    }
}
