//! Startup: find the canvas, build the engine

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::config::TesseractConfig;
use crate::engine::Engine;
use crate::error::SetupError;
use super::engine_handle::{install, is_installed, now_ms};

/// Locate the output canvas; the loop cannot run without it
fn find_canvas(canvas_id: &str) -> Result<web_sys::HtmlCanvasElement, SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| SetupError::NoCanvas(canvas_id.to_string()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| SetupError::NoCanvas(canvas_id.to_string()))
}

/// Prepare the engine. Must succeed before `tick` does anything.
#[wasm_bindgen]
pub fn init(canvas_id: &str) -> Result<(), JsValue> {
    if is_installed() {
        return Ok(());
    }

    let canvas = find_canvas(canvas_id)?;
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    install(Engine::new(TesseractConfig::default(), now_ms(), seed));

    info!(
        "✅ Tesseract initialized on #{} ({}x{})",
        canvas_id,
        canvas.width(),
        canvas.height()
    );
    Ok(())
}
