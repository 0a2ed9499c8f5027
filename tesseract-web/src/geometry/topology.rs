//! Static hypercube definition
//!
//! Vertex `i` takes its signs from the low four bits of `i`
//! (bit 0 → x, bit 1 → y, bit 2 → z, bit 3 → w; set bit = +1).

use nalgebra::Vector4;
use super::rotation::differing_axes;

pub const VERTEX_COUNT: usize = 16;
pub const EDGE_COUNT: usize = 32;

/// Unordered vertex pair, stored with the lower index first
pub type Edge = (usize, usize);

fn sign(i: usize, bit: usize) -> f32 {
    if i & (1 << bit) != 0 { 1.0 } else { -1.0 }
}

/// All 16 sign combinations of (±1, ±1, ±1, ±1)
pub fn generate_vertices() -> [Vector4<f32>; VERTEX_COUNT] {
    std::array::from_fn(|i| Vector4::new(sign(i, 0), sign(i, 1), sign(i, 2), sign(i, 3)))
}

/// Connect every pair of vertices differing in exactly one coordinate
pub fn generate_edges(vertices: &[Vector4<f32>]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if differing_axes(vertices[i], vertices[j]) == 1 {
                edges.push((i, j));
            }
        }
    }
    edges
}

/// The tesseract: built once at startup, never mutated
#[derive(Debug, Clone)]
pub struct HypercubeTopology {
    vertices: [Vector4<f32>; VERTEX_COUNT],
    edges: Vec<Edge>,
}

impl HypercubeTopology {
    pub fn new() -> Self {
        let vertices = generate_vertices();
        let edges = generate_edges(&vertices);
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vector4<f32>; VERTEX_COUNT] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges touching `vertex`
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| *a == vertex || *b == vertex)
            .count()
    }
}

impl Default for HypercubeTopology {
    fn default() -> Self {
        Self::new()
    }
}
