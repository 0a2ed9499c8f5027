//! Error taxonomy for the tesseract core
//!
//! Per-frame errors (bad landmarks, non-finite tick state) are recoverable:
//! the bridge logs them and the animation loop keeps running.
//! `SetupError` is the only fatal kind.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A landmark payload that failed validation at the inference boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("invalid landmark data length: {actual} (expected {expected})")]
    WrongLength { expected: usize, actual: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("landmark {index} lies outside the tracked image range")]
    OutOfRange { index: usize },

    #[error("handedness labels ({labels}) do not match hand count ({hands})")]
    HandednessMismatch { labels: usize, hands: usize },

    #[error("unknown handedness label {0}")]
    UnknownHandedness(u8),
}

/// A tick aborted before committing any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickError {
    #[error("non-finite {what} produced during tick")]
    NonFinite { what: &'static str },
}

/// Construction-time validation of smoothing parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("smoothing rate {0} must lie strictly between 0 and 1")]
    InvalidRate(f32),
}

/// Errors that prevent the loop from starting at all
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("No window found")]
    NoWindow,

    #[error("No document found")]
    NoDocument,

    #[error("No canvas with id '{0}' found")]
    NoCanvas(String),
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<LandmarkError> for JsValue {
    fn from(err: LandmarkError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
