//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod engine_handle;
mod setup;
mod hand_input;
mod frame;
mod layouts;

pub use setup::init;

pub use hand_input::{
    apply_hand_results,
    set_tracking_unavailable,
    hand_tracking_options,
    set_visibility,
};

pub use frame::{
    tick,
    trail_points,
    trail_lines,
    trail_line_opacity,
    uniforms,
    accent_color,
    particle_vertices,
    set_frame_metrics,
    status_text,
    get_debug_overlay_text,
};

pub use layouts::{
    point_vertex_layout,
    line_vertex_layout,
    particle_vertex_layout,
};
