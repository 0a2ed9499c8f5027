//! Per-animation-frame entry points and buffer getters
//!
//! JS calls `tick` first, then pulls whichever buffers it needs. Buffers
//! come back as flat `Float32Array`s in the layouts of `renderer::vertex`.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use crate::renderer::FrameMetrics;
use super::engine_handle::{now_ms, with_engine, with_runtime};

/// Advance one frame. Returns false before `init` or when the tick failed.
#[wasm_bindgen]
pub fn tick() -> bool {
    with_runtime(|rt| match rt.engine.tick(now_ms()) {
        Ok(frame) => {
            rt.frame = Some(frame);
            true
        }
        Err(err) => {
            warn!("Skipping frame: {}", err);
            false
        }
    })
    .unwrap_or(false)
}

fn frame_floats(f: impl FnOnce(&crate::engine::FrameOutput) -> Vec<f32>) -> Vec<f32> {
    with_runtime(|rt| rt.frame.as_ref().map(f))
        .flatten()
        .unwrap_or_default()
}

/// position(3), color(3), size(1) per vertex; 16 vertices per slot
#[wasm_bindgen]
pub fn trail_points() -> Vec<f32> {
    frame_floats(|frame| bytemuck::cast_slice(&frame.trail.points).to_vec())
}

/// position(3) per vertex; 64 vertices (32 edges) per slot
#[wasm_bindgen]
pub fn trail_lines() -> Vec<f32> {
    frame_floats(|frame| bytemuck::cast_slice(&frame.trail.lines).to_vec())
}

/// One value per slot, 0 when the slot's lines are hidden
#[wasm_bindgen]
pub fn trail_line_opacity() -> Vec<f32> {
    frame_floats(|frame| frame.trail.line_opacities())
}

/// pointer(2), strength, falloff, time, bloom, padding(2)
#[wasm_bindgen]
pub fn uniforms() -> Vec<f32> {
    frame_floats(|frame| bytemuck::cast_slice(std::slice::from_ref(&frame.uniforms)).to_vec())
}

/// Current mudra tint as rgb
#[wasm_bindgen]
pub fn accent_color() -> Vec<f32> {
    frame_floats(|frame| frame.params.look.color.to_array().to_vec())
}

/// Whole particle buffer when strokes were added since the last call,
/// otherwise `undefined` so JS can skip the upload
#[wasm_bindgen]
pub fn particle_vertices() -> Option<Vec<f32>> {
    with_engine(|engine| engine.take_particle_vertices())
        .flatten()
        .map(|vertices| {
            debug!("Uploading {} particle slots", vertices.len());
            bytemuck::cast_slice(&vertices).to_vec()
        })
}

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    with_engine(|engine| engine.record_frame_metrics(fps, frame_time_ms));
}

/// `R: <MUDRA>[ 🔒] | L: <ACTION>`
#[wasm_bindgen]
pub fn status_text() -> String {
    with_engine(|engine| engine.status_text(now_ms())).unwrap_or_default()
}

/// Status line plus fps and frame time (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    with_engine(|engine| engine.overlay_text(now_ms()))
        .unwrap_or_else(|| FrameMetrics::default().overlay_text(&Default::default()))
}
