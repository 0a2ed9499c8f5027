//! Buffer layouts for the JS attribute setup
//!
//! Each getter returns the stride followed by (location, byte offset,
//! float count) per attribute, matching the arrays `frame` hands out.

use wasm_bindgen::prelude::*;
use crate::renderer::{layout_words, LineVertex, ParticleVertex, PointVertex};

/// Layout of `trail_points`
#[wasm_bindgen]
pub fn point_vertex_layout() -> Vec<u32> {
    layout_words(&PointVertex::desc())
}

/// Layout of `trail_lines`
#[wasm_bindgen]
pub fn line_vertex_layout() -> Vec<u32> {
    layout_words(&LineVertex::desc())
}

/// Layout of `particle_vertices`
#[wasm_bindgen]
pub fn particle_vertex_layout() -> Vec<u32> {
    layout_words(&ParticleVertex::desc())
}
