//! Targets written by the input step and read by the render tick
//!
//! The input step always builds a complete `FrameTargets` and swaps it in
//! with one assignment; the tick copies it once at its start. Related
//! fields (the rotation triple, the base position) therefore never tear.

use nalgebra::{Vector2, Vector3};

/// Default warp falloff: focused, small distortion
pub const DEFAULT_FALLOFF: f32 = 4.0;

/// Per-tick rotation increments for the three w-planes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDelta {
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationDelta {
    pub const ZERO: RotationDelta = RotationDelta { xw: 0.0, yw: 0.0, zw: 0.0 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTargets {
    /// Bumped on every replacement
    pub version: u64,
    pub rotation_delta: RotationDelta,
    /// Where the cube should glide to (world units)
    pub base_position: Vector3<f32>,
    /// Distortion center in uv space (y up)
    pub pointer: Vector2<f32>,
    pub falloff: f32,
    /// Movement-driven warp strength, before any mudra boost
    pub warp_strength: f32,
}

impl Default for FrameTargets {
    fn default() -> Self {
        Self {
            version: 0,
            rotation_delta: RotationDelta::ZERO,
            base_position: Vector3::zeros(),
            pointer: Self::neutral_pointer(),
            falloff: DEFAULT_FALLOFF,
            warp_strength: 0.0,
        }
    }
}

impl FrameTargets {
    pub fn neutral_pointer() -> Vector2<f32> {
        Vector2::new(0.5, 0.5)
    }

    /// Copy of `self` carrying the next version number
    pub fn successor(&self) -> Self {
        Self {
            version: self.version.wrapping_add(1),
            ..*self
        }
    }
}
