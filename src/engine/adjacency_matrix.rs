//! A dense storage engine: an `n x n` matrix of optional edge ids.
//!
//! Trades memory (O(V^2), even for vertices with few edges) for O(1) edge
//! lookup by endpoints and forbids parallel edges outright: asking to add
//! an edge that already exists returns the existing one instead of
//! creating a second. Removing a vertex tombstones its row and column
//! rather than compacting the matrix, so every other vertex's id stays
//! valid.

use crate::capability::{
    AdjacencyGraph, BidirectionalGraph, EdgeLookupGraph, EdgeListGraph, EdgeRef as EdgeRefTrait,
    GraphBase, IncidenceGraph, MutableGraph, MutablePropertyGraph, PropertyGraph,
    VertexListGraph,
};
use crate::container::{OrderedMap, OrderedSet};
use crate::property::DictionaryPropertyMap;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct VertexId(u32);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct EdgeId(u32);

#[derive(Copy, Clone)]
pub struct MatrixEdgeRef {
    id: EdgeId,
    source: VertexId,
    destination: VertexId,
}

impl EdgeRefTrait for MatrixEdgeRef {
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

pub struct AdjacencyMatrix {
    next_vertex: u32,
    live_vertices: OrderedSet<VertexId>,
    matrix: Vec<Vec<Option<EdgeId>>>,
    next_edge: u32,
    endpoints: OrderedMap<EdgeId, (VertexId, VertexId)>,
    vertex_properties: DictionaryPropertyMap<VertexId>,
    edge_properties: DictionaryPropertyMap<EdgeId>,
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjacencyMatrix {
    pub fn new() -> Self {
        AdjacencyMatrix {
            next_vertex: 0,
            live_vertices: OrderedSet::new(),
            matrix: Vec::new(),
            next_edge: 0,
            endpoints: OrderedMap::new(),
            vertex_properties: DictionaryPropertyMap::new(),
            edge_properties: DictionaryPropertyMap::new(),
        }
    }

    fn idx(v: VertexId) -> usize {
        v.0 as usize
    }
}

impl GraphBase for AdjacencyMatrix {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl MutableGraph for AdjacencyMatrix {
    fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        let n = self.next_vertex as usize;
        for row in self.matrix.iter_mut() {
            row.push(None);
        }
        self.matrix.push(vec![None; n]);
        self.live_vertices.insert(id);
        id
    }

    fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.live_vertices.shift_remove(&v) {
            return false;
        }
        let n = self.next_vertex as usize;
        let i = Self::idx(v);
        for j in 0..n {
            if let Some(e) = self.matrix[i][j].take() {
                self.endpoints.shift_remove(&e);
                self.edge_properties.remove(e);
            }
            if let Some(e) = self.matrix[j][i].take() {
                self.endpoints.shift_remove(&e);
                self.edge_properties.remove(e);
            }
        }
        self.vertex_properties.remove(v);
        true
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.live_vertices.contains(&from) || !self.live_vertices.contains(&to) {
            return None;
        }
        let (i, j) = (Self::idx(from), Self::idx(to));
        if let Some(existing) = self.matrix[i][j] {
            return Some(existing);
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.matrix[i][j] = Some(id);
        self.endpoints.insert(id, (from, to));
        Some(id)
    }

    fn remove_edge(&mut self, e: EdgeId) -> bool {
        let Some((from, to)) = self.endpoints.shift_remove(&e) else {
            return false;
        };
        self.matrix[Self::idx(from)][Self::idx(to)] = None;
        self.edge_properties.remove(e);
        true
    }
}

impl<'a> GraphBase for &'a AdjacencyMatrix {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> IncidenceGraph for &'a AdjacencyMatrix {
    type OutgoingEdges = std::vec::IntoIter<EdgeId>;
    fn outgoing_edges(self, v: VertexId) -> Self::OutgoingEdges {
        self.matrix
            .get(AdjacencyMatrix::idx(v))
            .map(|row| row.iter().filter_map(|e| *e).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
    }
    fn destination(self, e: EdgeId) -> Option<VertexId> {
        self.endpoints.get(&e).map(|&(_, to)| to)
    }
    fn source(self, e: EdgeId) -> Option<VertexId> {
        self.endpoints.get(&e).map(|&(from, _)| from)
    }
    fn out_degree(self, v: VertexId) -> usize {
        self.matrix
            .get(AdjacencyMatrix::idx(v))
            .map_or(0, |row| row.iter().filter(|e| e.is_some()).count())
    }
}

impl<'a> BidirectionalGraph for &'a AdjacencyMatrix {
    type IncomingEdges = std::vec::IntoIter<EdgeId>;
    fn incoming_edges(self, v: VertexId) -> Self::IncomingEdges {
        let j = AdjacencyMatrix::idx(v);
        self.matrix
            .iter()
            .filter_map(|row| row.get(j).copied().flatten())
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn in_degree(self, v: VertexId) -> usize {
        let j = AdjacencyMatrix::idx(v);
        self.matrix.iter().filter(|row| row.get(j).copied().flatten().is_some()).count()
    }
}

impl<'a> AdjacencyGraph for &'a AdjacencyMatrix {
    type AdjacentVertices = std::vec::IntoIter<VertexId>;
    fn adjacent_vertices(self, v: VertexId) -> Self::AdjacentVertices {
        self.matrix
            .get(AdjacencyMatrix::idx(v))
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(j, e)| e.map(|_| VertexId(j as u32)))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
            .into_iter()
    }
}

impl<'a> VertexListGraph for &'a AdjacencyMatrix {
    type Vertices = std::vec::IntoIter<VertexId>;
    fn vertices(self) -> Self::Vertices {
        self.live_vertices.iter().copied().collect::<Vec<_>>().into_iter()
    }
    fn vertex_count(self) -> usize {
        self.live_vertices.len()
    }
}

impl<'a> EdgeListGraph for &'a AdjacencyMatrix {
    type EdgeRefType = MatrixEdgeRef;
    type Edges = std::vec::IntoIter<MatrixEdgeRef>;
    fn edges(self) -> Self::Edges {
        self.endpoints
            .iter()
            .map(|(&id, &(source, destination))| MatrixEdgeRef { id, source, destination })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn edge_count(self) -> usize {
        self.endpoints.len()
    }
}

impl<'a> EdgeLookupGraph for &'a AdjacencyMatrix {
    fn edge(self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.matrix.get(AdjacencyMatrix::idx(from))?.get(AdjacencyMatrix::idx(to)).copied().flatten()
    }
}

impl PropertyGraph for AdjacencyMatrix {
    type VertexProperties = DictionaryPropertyMap<VertexId>;
    type EdgeProperties = DictionaryPropertyMap<EdgeId>;
    fn vertex_properties(&self) -> &Self::VertexProperties {
        &self.vertex_properties
    }
    fn edge_properties(&self) -> &Self::EdgeProperties {
        &self.edge_properties
    }
}

impl MutablePropertyGraph for AdjacencyMatrix {
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
    fn parallel_edges_return_the_existing_id() {
        let mut g = AdjacencyMatrix::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let e1 = g.add_edge(a, b).unwrap();
        let e2 = g.add_edge(a, b).unwrap();
        assert_eq!(e1, e2);
        assert_eq!((&g).edge_count(), 1);
    }

    #[test]
    fn edge_lookup_is_direct() {
        let mut g = AdjacencyMatrix::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        assert!((&g).edge(a, b).is_some());
        assert!((&g).edge(a, c).is_none());
    }

    #[test]
    fn removing_vertex_clears_row_and_column() {
        let mut g = AdjacencyMatrix::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(c, a);
        g.remove_vertex(a);
        assert_eq!((&g).edge_count(), 0);
        assert_eq!((&g).out_degree(c), 0);
    }
}
