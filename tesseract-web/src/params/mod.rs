//! Params module - smoothed render parameters coupled to gesture state
//!
//! Re-exports only. All logic in submodules.

mod color;
mod smoothed;
mod render_params;

pub use color::Rgb;
pub use smoothed::{Lerp, Smoothed};
pub use render_params::{RenderParams, ParamSnapshot, MudraLook, MUDRA_WARP_BOOST};
