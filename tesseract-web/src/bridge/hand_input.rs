//! Hand-tracking input from the JS inference callback

use log::warn;
use wasm_bindgen::prelude::*;
use crate::config::HandTrackingOptions;
use super::engine_handle::{now_ms, with_engine};

/// Called from JavaScript once per inference result.
///
/// `flat` holds `handedness.len()` hands of 21 × (x, y, z); `handedness`
/// is 0 for Left, 1 for Right. A malformed payload is logged and dropped;
/// the previous targets stay in place.
#[wasm_bindgen]
pub fn apply_hand_results(flat: &[f32], handedness: &[u8]) -> Result<(), JsValue> {
    let result = with_engine(|engine| engine.apply_hand_results(flat, handedness, now_ms()));

    match result {
        Some(Err(err)) => {
            warn!("Dropping hand frame: {}", err);
            Err(err.into())
        }
        _ => Ok(()),
    }
}

/// Called from JavaScript when the camera or model failed to start
#[wasm_bindgen]
pub fn set_tracking_unavailable(reason: &str) {
    with_engine(|engine| engine.set_tracking_unavailable(reason));
}

/// Options to construct the hand-landmark model with
#[wasm_bindgen]
pub fn hand_tracking_options() -> HandTrackingOptions {
    with_engine(|engine| engine.config().tracking).unwrap_or_default()
}

/// Fade the cube in (1) or out (0)
#[wasm_bindgen]
pub fn set_visibility(opacity: f32) {
    with_engine(|engine| engine.set_visibility(opacity));
}
