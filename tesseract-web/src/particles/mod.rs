//! Particles module - stroke emission into a fixed ring buffer
//!
//! Re-exports only. All logic in submodules.

mod kind;
mod emitter;

pub use kind::{ParticleKind, StrokeProfile, growth_heading, COPPER, GOLD, SILVER};
pub use emitter::{StrokeEmitter, ParticleRecord, WorldMapping};
