//! Tesseract Web - gesture-driven 4D hypercube for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - The start hook that installs panic and log output
//!
//! Hand tracking and WebGL drawing stay in JavaScript; this crate turns
//! landmark frames into smoothed parameters and vertex buffers.

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod params;
pub mod particles;
pub mod renderer;

use wasm_bindgen::prelude::*;

pub use config::TesseractConfig;
pub use engine::{Engine, FrameOutput};
pub use error::{LandmarkError, ParamError, SetupError, TickError};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}
