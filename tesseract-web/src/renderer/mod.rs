//! Renderer module - buffer layouts and trail geometry for the WebGL side
//!
//! Re-exports only. All logic in submodules.

mod vertex;
mod trail_buffers;
mod debug_ui;

pub use vertex::{PointVertex, LineVertex, ParticleVertex, WarpUniforms, layout_words};
pub use trail_buffers::{build_trail_frame, TrailFrame, SlotStyle, LINE_VERTICES_PER_SLOT};
pub use debug_ui::{StatusLine, FrameMetrics};
