//! An implicit graph over the cells of a 2-D grid: vertices and edges are
//! computed from `(x, y)` coordinates on demand rather than stored.

use crate::capability::{
    AdjacencyGraph, EdgeRef as EdgeRefTrait, GraphBase, IncidenceGraph, VertexListGraph,
};

/// Which neighbor offsets count as adjacent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// N/S/E/W only.
    Orthogonal,
    /// The four diagonals only.
    Diagonal,
    /// All eight surrounding cells.
    All,
}

impl Direction {
    fn offsets(self) -> &'static [(i32, i32)] {
        const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
        const ALL: [(i32, i32); 8] = [
            (0, -1),
            (0, 1),
            (-1, 0),
            (1, 0),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ];
        match self {
            Direction::Orthogonal => &ORTHOGONAL,
            Direction::Diagonal => &DIAGONAL,
            Direction::All => &ALL,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct VertexId(pub u32, pub u32);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EdgeId {
    from: VertexId,
    to: VertexId,
}

#[derive(Copy, Clone)]
pub struct GridEdgeRef {
    id: EdgeId,
    weight: f64,
}

impl EdgeRefTrait for GridEdgeRef {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
    type Weight = f64;
    fn source(&self) -> VertexId {
        self.id.from
    }
    fn destination(&self) -> VertexId {
        self.id.to
    }
    fn weight(&self) -> &f64 {
        &self.weight
    }
    fn id(&self) -> EdgeId {
        self.id
    }
}

/// A `width x height` grid with a fixed obstacle set. Diagonal steps cost
/// `sqrt(2)`, orthogonal steps cost `1`.
pub struct GridGraph {
    width: u32,
    height: u32,
    direction: Direction,
    blocked: std::collections::HashSet<(u32, u32)>,
}

impl GridGraph {
    pub fn new(width: u32, height: u32, direction: Direction) -> Self {
        GridGraph {
            width,
            height,
            direction,
            blocked: std::collections::HashSet::new(),
        }
    }

    pub fn set_blocked(&mut self, x: u32, y: u32, blocked: bool) {
        if blocked {
            self.blocked.insert((x, y));
        } else {
            self.blocked.remove(&(x, y));
        }
    }

    pub fn is_blocked(&self, x: u32, y: u32) -> bool {
        self.blocked.contains(&(x, y))
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn neighbors(&self, v: VertexId) -> Vec<(VertexId, f64)> {
        let mut out = Vec::new();
        for &(dx, dy) in self.direction.offsets() {
            let nx = v.0 as i32 + dx;
            let ny = v.1 as i32 + dy;
            if !self.in_bounds(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if self.blocked.contains(&(nx, ny)) {
                continue;
            }
            let weight = if dx != 0 && dy != 0 { std::f64::consts::SQRT_2 } else { 1.0 };
            out.push((VertexId(nx, ny), weight));
        }
        out
    }
}

impl GraphBase for GridGraph {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> GraphBase for &'a GridGraph {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

impl<'a> IncidenceGraph for &'a GridGraph {
    type OutgoingEdges = std::vec::IntoIter<EdgeId>;
    fn outgoing_edges(self, v: VertexId) -> Self::OutgoingEdges {
        if self.blocked.contains(&(v.0, v.1)) {
            return Vec::new().into_iter();
        }
        self.neighbors(v)
            .into_iter()
            .map(|(to, _)| EdgeId { from: v, to })
            .collect::<Vec<_>>()
            .into_iter()
    }
    fn destination(self, e: EdgeId) -> Option<VertexId> {
        Some(e.to)
    }
    fn source(self, e: EdgeId) -> Option<VertexId> {
        Some(e.from)
    }
    fn out_degree(self, v: VertexId) -> usize {
        if self.blocked.contains(&(v.0, v.1)) {
            0
        } else {
            self.neighbors(v).len()
        }
    }
}

impl<'a> AdjacencyGraph for &'a GridGraph {
    type AdjacentVertices = std::vec::IntoIter<VertexId>;
    fn adjacent_vertices(self, v: VertexId) -> Self::AdjacentVertices {
        self.neighbors(v).into_iter().map(|(to, _)| to).collect::<Vec<_>>().into_iter()
    }
}

impl<'a> VertexListGraph for &'a GridGraph {
    type Vertices = std::vec::IntoIter<VertexId>;
    fn vertices(self) -> Self::Vertices {
        let mut out = Vec::with_capacity((self.width * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.blocked.contains(&(x, y)) {
                    out.push(VertexId(x, y));
                }
            }
        }
        out.into_iter()
    }
    fn vertex_count(self) -> usize {
        (self.width * self.height) as usize - self.blocked.len()
    }
}

impl GridGraph {
    /// The per-edge step cost: `1` orthogonal, `sqrt(2)` diagonal. A
    /// convenience for callers that want a ready-made cost definition
    /// instead of reading `crate::capability::EdgeRef::weight` off a
    /// materialized [`GridEdgeRef`].
    pub fn step_cost(&self, e: EdgeId) -> f64 {
        if e.from.0 != e.to.0 && e.from.1 != e.to.1 {
            std::f64::consts::SQRT_2
        } else {
            1.0
        }
    }
}
