//! Engine module - input step, render tick and the targets between them
//!
//! Re-exports only. All logic in submodules.

mod targets;
mod input;
mod tick;

pub use targets::{FrameTargets, RotationDelta, DEFAULT_FALLOFF};
pub use input::{InputProcessor, InputFrame, LeftAction, StrokeRequest};
pub use tick::{Engine, FrameOutput};
