//! The sparse, default storage engine: an adjacency list.
//!
//! Removing a vertex or edge invalidates only its own descriptor; every
//! other live descriptor stays valid. Three variants trade off the cost of
//! removal against memory:
//!
//! - [`AdjacencyList`]: out-edges only. `remove_edge` is O(deg(source));
//!   `remove_vertex` additionally has to find that vertex's in-edges by
//!   scanning, so it costs O(E) — the accepted tradeoff of not keeping an
//!   in-adjacency index around.
//! - [`CachedAdjacencyList`]: maintains a parallel in-adjacency index, so
//!   `remove_vertex` and `incoming_edges` are both O(deg).
//! - [`BinaryAdjacencyList`]: at most two out-edges per vertex (`left`/
//!   `right`); `add_edge` fills the first empty slot, or overwrites `right`
//!   when both are full.

use std::collections::HashMap;

use crate::capability::{
    AdjacencyGraph, BidirectionalGraph, BinaryIncidenceGraph, EdgeLookupGraph, EdgeListGraph,
    EdgeRef as EdgeRefTrait, GraphBase, IncidenceGraph, MutableGraph, MutablePropertyGraph,
    PropertyGraph, VertexListGraph,
};
use crate::container::{OrderedMap, OrderedSet};
use crate::property::DictionaryPropertyMap;

/// A vertex descriptor issued by one of this module's engines. Only valid
/// within the engine that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct VertexId(u32);

/// An edge descriptor issued by one of this module's engines.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct EdgeId(u32);

#[derive(Copy, Clone)]
struct Endpoints {
    source: VertexId,
    destination: VertexId,
}

/// A lightweight edge reference: endpoints plus the edge id (used as the
/// "weight" slot too, since this engine stores data in property bags, not
/// a fixed per-edge payload).
#[derive(Copy, Clone)]
pub struct AdjacencyEdgeRef {
    id: EdgeId,
    source: VertexId,
    destination: VertexId,
}

impl EdgeRefTrait for AdjacencyEdgeRef {
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

/// Out-edges-only adjacency list. See module docs for the tradeoff this
/// accepts versus [`CachedAdjacencyList`].
pub struct AdjacencyList {
    next_vertex: u32,
    live_vertices: OrderedSet<VertexId>,
    next_edge: u32,
    endpoints: OrderedMap<EdgeId, Endpoints>,
    out_edges: HashMap<VertexId, Vec<EdgeId>>,
    vertex_properties: DictionaryPropertyMap<VertexId>,
    edge_properties: DictionaryPropertyMap<EdgeId>,
}

impl Default for AdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjacencyList {
    pub fn new() -> Self {
        AdjacencyList {
            next_vertex: 0,
            live_vertices: OrderedSet::new(),
            next_edge: 0,
            endpoints: OrderedMap::new(),
            out_edges: HashMap::new(),
            vertex_properties: DictionaryPropertyMap::new(),
            edge_properties: DictionaryPropertyMap::new(),
        }
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.live_vertices.contains(&v)
    }

    /// Build a graph from `(from, to)` index pairs in one pass. Silently
    /// skips pairs with an out-of-range index.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::new();
        let ids: Vec<VertexId> = (0..vertex_count).map(|_| g.add_vertex()).collect();
        for (from, to) in edges {
            if let (Some(&u), Some(&v)) = (ids.get(from), ids.get(to)) {
                g.add_edge(u, v);
            }
        }
        g
    }
}

impl GraphBase for AdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl MutableGraph for AdjacencyList {
    fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.live_vertices.insert(id);
        self.out_edges.insert(id, Vec::new());
        id
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
        // Without an in-adjacency cache, incoming edges must be found by
        // scanning every remaining edge.
        let dangling: Vec<EdgeId> = self
            .endpoints
            .iter()
            .filter(|(_, ep)| ep.destination == v)
            .map(|(&e, _)| e)
            .collect();
        for e in &dangling {
            self.endpoints.shift_remove(e);
            self.edge_properties.remove(*e);
        }
        if !dangling.is_empty() {
            let dangling: std::collections::HashSet<EdgeId> = dangling.into_iter().collect();
            for list in self.out_edges.values_mut() {
                list.retain(|e| !dangling.contains(e));
            }
        }
        self.vertex_properties.remove(v);
        true
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return None;
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.endpoints.insert(
            id,
            Endpoints {
                source: from,
                destination: to,
            },
        );
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

impl<'a> GraphBase for &'a AdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> IncidenceGraph for &'a AdjacencyList {
    type OutgoingEdges = std::vec::IntoIter<EdgeId>;
    fn outgoing_edges(self, v: VertexId) -> Self::OutgoingEdges {
        self.out_edges
            .get(&v)
            .cloned()
            .unwrap_or_default()
            .into_iter()
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

impl<'a> AdjacencyGraph for &'a AdjacencyList {
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

impl<'a> VertexListGraph for &'a AdjacencyList {
    type Vertices = std::vec::IntoIter<VertexId>;
    fn vertices(self) -> Self::Vertices {
        self.live_vertices.iter().copied().collect::<Vec<_>>().into_iter()
    }
    fn vertex_count(self) -> usize {
        self.live_vertices.len()
    }
}

impl<'a> EdgeListGraph for &'a AdjacencyList {
    type EdgeRefType = AdjacencyEdgeRef;
    type Edges = std::vec::IntoIter<AdjacencyEdgeRef>;
    fn edges(self) -> Self::Edges {
        self.endpoints
            .iter()
            .map(|(&id, ep)| AdjacencyEdgeRef {
                id,
                source: ep.source,
                destination: ep.destination,
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn edge_count(self) -> usize {
        self.endpoints.len()
    }
}

impl<'a> EdgeLookupGraph for &'a AdjacencyList {
    fn edge(self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.out_edges.get(&from).and_then(|edges| {
            edges
                .iter()
                .copied()
                .find(|e| self.endpoints.get(e).map(|ep| ep.destination) == Some(to))
        })
    }
}

impl PropertyGraph for AdjacencyList {
    type VertexProperties = DictionaryPropertyMap<VertexId>;
    type EdgeProperties = DictionaryPropertyMap<EdgeId>;
    fn vertex_properties(&self) -> &Self::VertexProperties {
        &self.vertex_properties
    }
    fn edge_properties(&self) -> &Self::EdgeProperties {
        &self.edge_properties
    }
}

impl MutablePropertyGraph for AdjacencyList {
    fn vertex_properties_mut(&mut self) -> &mut Self::VertexProperties {
        &mut self.vertex_properties
    }
    fn edge_properties_mut(&mut self) -> &mut Self::EdgeProperties {
        &mut self.edge_properties
    }
}

/// Adjacency list maintaining both out- and in-adjacency indexes (the
/// teacher's `CacheInOutEdges` wrapper), so vertex removal and in-edge
/// iteration are both O(deg) instead of O(E).
pub struct CachedAdjacencyList {
    next_vertex: u32,
    live_vertices: OrderedSet<VertexId>,
    next_edge: u32,
    endpoints: OrderedMap<EdgeId, Endpoints>,
    out_edges: HashMap<VertexId, Vec<EdgeId>>,
    in_edges: HashMap<VertexId, Vec<EdgeId>>,
    vertex_properties: DictionaryPropertyMap<VertexId>,
    edge_properties: DictionaryPropertyMap<EdgeId>,
}

impl Default for CachedAdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl CachedAdjacencyList {
    pub fn new() -> Self {
        CachedAdjacencyList {
            next_vertex: 0,
            live_vertices: OrderedSet::new(),
            next_edge: 0,
            endpoints: OrderedMap::new(),
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
            vertex_properties: DictionaryPropertyMap::new(),
            edge_properties: DictionaryPropertyMap::new(),
        }
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.live_vertices.contains(&v)
    }
}

impl GraphBase for CachedAdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl MutableGraph for CachedAdjacencyList {
    fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.live_vertices.insert(id);
        self.out_edges.insert(id, Vec::new());
        self.in_edges.insert(id, Vec::new());
        id
    }

    fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.live_vertices.shift_remove(&v) {
            return false;
        }
        let outs = self.out_edges.remove(&v).unwrap_or_default();
        let ins = self.in_edges.remove(&v).unwrap_or_default();
        for e in outs {
            if let Some(ep) = self.endpoints.shift_remove(&e) {
                if let Some(list) = self.in_edges.get_mut(&ep.destination) {
                    list.retain(|&x| x != e);
                }
            }
            self.edge_properties.remove(e);
        }
        for e in ins {
            if let Some(ep) = self.endpoints.shift_remove(&e) {
                if let Some(list) = self.out_edges.get_mut(&ep.source) {
                    list.retain(|&x| x != e);
                }
            }
            self.edge_properties.remove(e);
        }
        self.vertex_properties.remove(v);
        true
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return None;
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.endpoints.insert(
            id,
            Endpoints {
                source: from,
                destination: to,
            },
        );
        self.out_edges.entry(from).or_default().push(id);
        self.in_edges.entry(to).or_default().push(id);
        Some(id)
    }

    fn remove_edge(&mut self, e: EdgeId) -> bool {
        let Some(ep) = self.endpoints.shift_remove(&e) else {
            return false;
        };
        if let Some(list) = self.out_edges.get_mut(&ep.source) {
            list.retain(|&x| x != e);
        }
        if let Some(list) = self.in_edges.get_mut(&ep.destination) {
            list.retain(|&x| x != e);
        }
        self.edge_properties.remove(e);
        true
    }
}

impl<'a> GraphBase for &'a CachedAdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> IncidenceGraph for &'a CachedAdjacencyList {
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

impl<'a> BidirectionalGraph for &'a CachedAdjacencyList {
    type IncomingEdges = std::vec::IntoIter<EdgeId>;
    fn incoming_edges(self, v: VertexId) -> Self::IncomingEdges {
        self.in_edges.get(&v).cloned().unwrap_or_default().into_iter()
    }
    fn in_degree(self, v: VertexId) -> usize {
        self.in_edges.get(&v).map_or(0, Vec::len)
    }
}

impl<'a> AdjacencyGraph for &'a CachedAdjacencyList {
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

impl<'a> VertexListGraph for &'a CachedAdjacencyList {
    type Vertices = std::vec::IntoIter<VertexId>;
    fn vertices(self) -> Self::Vertices {
        self.live_vertices.iter().copied().collect::<Vec<_>>().into_iter()
    }
    fn vertex_count(self) -> usize {
        self.live_vertices.len()
    }
}

impl<'a> EdgeListGraph for &'a CachedAdjacencyList {
    type EdgeRefType = AdjacencyEdgeRef;
    type Edges = std::vec::IntoIter<AdjacencyEdgeRef>;
    fn edges(self) -> Self::Edges {
        self.endpoints
            .iter()
            .map(|(&id, ep)| AdjacencyEdgeRef {
                id,
                source: ep.source,
                destination: ep.destination,
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn edge_count(self) -> usize {
        self.endpoints.len()
    }
}

impl<'a> EdgeLookupGraph for &'a CachedAdjacencyList {
    fn edge(self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.out_edges.get(&from).and_then(|edges| {
            edges
                .iter()
                .copied()
                .find(|e| self.endpoints.get(e).map(|ep| ep.destination) == Some(to))
        })
    }
}

impl PropertyGraph for CachedAdjacencyList {
    type VertexProperties = DictionaryPropertyMap<VertexId>;
    type EdgeProperties = DictionaryPropertyMap<EdgeId>;
    fn vertex_properties(&self) -> &Self::VertexProperties {
        &self.vertex_properties
    }
    fn edge_properties(&self) -> &Self::EdgeProperties {
        &self.edge_properties
    }
}

impl MutablePropertyGraph for CachedAdjacencyList {
    fn vertex_properties_mut(&mut self) -> &mut Self::VertexProperties {
        &mut self.vertex_properties
    }
    fn edge_properties_mut(&mut self) -> &mut Self::EdgeProperties {
        &mut self.edge_properties
    }
}

/// At most two out-edges per vertex, `left` and `right`. `add_edge` fills
/// the first empty slot; if both are full, the new edge overwrites
/// `right`.
pub struct BinaryAdjacencyList {
    next_vertex: u32,
    live_vertices: OrderedSet<VertexId>,
    next_edge: u32,
    endpoints: OrderedMap<EdgeId, Endpoints>,
    slots: HashMap<VertexId, (Option<EdgeId>, Option<EdgeId>)>,
    vertex_properties: DictionaryPropertyMap<VertexId>,
    edge_properties: DictionaryPropertyMap<EdgeId>,
}

impl Default for BinaryAdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryAdjacencyList {
    pub fn new() -> Self {
        BinaryAdjacencyList {
            next_vertex: 0,
            live_vertices: OrderedSet::new(),
            next_edge: 0,
            endpoints: OrderedMap::new(),
            slots: HashMap::new(),
            vertex_properties: DictionaryPropertyMap::new(),
            edge_properties: DictionaryPropertyMap::new(),
        }
    }
}

impl GraphBase for BinaryAdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl MutableGraph for BinaryAdjacencyList {
    fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.live_vertices.insert(id);
        self.slots.insert(id, (None, None));
        id
    }

    fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.live_vertices.shift_remove(&v) {
            return false;
        }
        if let Some((l, r)) = self.slots.remove(&v) {
            for e in [l, r].into_iter().flatten() {
                self.endpoints.shift_remove(&e);
                self.edge_properties.remove(e);
            }
        }
        for slot in self.slots.values_mut() {
            if let Some(e) = slot.0 {
                if !self.endpoints.contains_key(&e) {
                    slot.0 = None;
                }
            }
            if let Some(e) = slot.1 {
                if !self.endpoints.contains_key(&e) {
                    slot.1 = None;
                }
            }
        }
        self.vertex_properties.remove(v);
        true
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.live_vertices.contains(&from) || !self.live_vertices.contains(&to) {
            return None;
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        let slot = self.slots.entry(from).or_insert((None, None));
        if slot.0.is_none() {
            slot.0 = Some(id);
        } else {
            if let Some(old_right) = slot.1.take() {
                self.endpoints.shift_remove(&old_right);
                self.edge_properties.remove(old_right);
            }
            slot.1 = Some(id);
        }
        self.endpoints.insert(
            id,
            Endpoints {
                source: from,
                destination: to,
            },
        );
        Some(id)
    }

    fn remove_edge(&mut self, e: EdgeId) -> bool {
        let Some(ep) = self.endpoints.shift_remove(&e) else {
            return false;
        };
        if let Some(slot) = self.slots.get_mut(&ep.source) {
            if slot.0 == Some(e) {
                slot.0 = None;
            } else if slot.1 == Some(e) {
                slot.1 = None;
            }
        }
        self.edge_properties.remove(e);
        true
    }
}

impl<'a> GraphBase for &'a BinaryAdjacencyList {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> IncidenceGraph for &'a BinaryAdjacencyList {
    type OutgoingEdges = std::vec::IntoIter<EdgeId>;
    fn outgoing_edges(self, v: VertexId) -> Self::OutgoingEdges {
        self.slots
            .get(&v)
            .map(|(l, r)| [*l, *r].into_iter().flatten().collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
    }
    fn destination(self, e: EdgeId) -> Option<VertexId> {
        self.endpoints.get(&e).map(|ep| ep.destination)
    }
    fn source(self, e: EdgeId) -> Option<VertexId> {
        self.endpoints.get(&e).map(|ep| ep.source)
    }
    fn out_degree(self, v: VertexId) -> usize {
        self.slots
            .get(&v)
            .map_or(0, |(l, r)| l.is_some() as usize + r.is_some() as usize)
    }
}

impl<'a> BinaryIncidenceGraph for &'a BinaryAdjacencyList {
    fn left_edge(self, v: VertexId) -> Option<EdgeId> {
        self.slots.get(&v).and_then(|(l, _)| *l)
    }
    fn right_edge(self, v: VertexId) -> Option<EdgeId> {
        self.slots.get(&v).and_then(|(_, r)| *r)
    }
}

impl PropertyGraph for BinaryAdjacencyList {
    type VertexProperties = DictionaryPropertyMap<VertexId>;
    type EdgeProperties = DictionaryPropertyMap<EdgeId>;
    fn vertex_properties(&self) -> &Self::VertexProperties {
        &self.vertex_properties
    }
    fn edge_properties(&self) -> &Self::EdgeProperties {
        &self.edge_properties
    }
}
