//! Rotation state and the 4D → 3D projector

use nalgebra::{Vector3, Vector4};
use crate::config::ProjectionConfig;
use super::rotation::{rotate, rotation_xw, rotation_yw, rotation_zw};
use super::topology::VERTEX_COUNT;

/// Projected vertex positions for one rotation state
pub type Projected = [Vector3<f32>; VERTEX_COUNT];

/// One frame's orientation and placement of the hypercube.
///
/// Angles accumulate without bound; sin/cos take care of wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub axw: f32,
    pub ayw: f32,
    pub azw: f32,
    pub offset_xw: f32,
    pub offset_yw: f32,
    pub offset_zw: f32,
    /// Milliseconds, same clock as the input stream
    pub timestamp: f64,
    /// World-space placement, added after projection
    pub spatial_offset: Vector3<f32>,
    /// 0..=1
    pub intensity: f32,
}

impl RotationState {
    pub fn at(timestamp: f64) -> Self {
        Self {
            axw: 0.0,
            ayw: 0.0,
            azw: 0.0,
            offset_xw: 0.0,
            offset_yw: 0.0,
            offset_zw: 0.0,
            timestamp,
            spatial_offset: Vector3::zeros(),
            intensity: 1.0,
        }
    }

    /// Angle actually applied in each plane: accumulated + bias
    pub fn effective_angles(&self) -> (f32, f32, f32) {
        (
            self.axw + self.offset_xw,
            self.ayw + self.offset_yw,
            self.azw + self.offset_zw,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.axw.is_finite()
            && self.ayw.is_finite()
            && self.azw.is_finite()
            && self.offset_xw.is_finite()
            && self.offset_yw.is_finite()
            && self.offset_zw.is_finite()
            && self.timestamp.is_finite()
            && self.intensity.is_finite()
            && self.spatial_offset.iter().all(|c| c.is_finite())
    }
}

/// Rotates through the three w-planes and perspective-projects to 3D
#[derive(Debug, Clone, Copy)]
pub struct RotationProjector {
    config: ProjectionConfig,
}

impl RotationProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project a single already-rotated point
    fn perspective(&self, rotated: Vector4<f32>, global_opacity: f32) -> Vector3<f32> {
        let s = 1.0 / (self.config.camera_distance - rotated.w);
        let mut p = Vector3::new(rotated.x, rotated.y, rotated.z) * s * self.config.magnification;

        // Recede fading ghosts instead of letting them pop
        if global_opacity < self.config.fade_threshold {
            p.z *= 1.0 + (1.0 - global_opacity) * self.config.depth_push;
        }
        p
    }

    /// Rotate xw → yw → zw, divide by `d - w`, magnify, then offset.
    pub fn project(
        &self,
        vertices: &[Vector4<f32>; VERTEX_COUNT],
        state: &RotationState,
        global_opacity: f32,
    ) -> Projected {
        let (axw, ayw, azw) = state.effective_angles();
        let combined = rotation_zw(azw) * rotation_yw(ayw) * rotation_xw(axw);

        std::array::from_fn(|i| {
            let rotated = rotate(&combined, vertices[i]);
            self.perspective(rotated, global_opacity) + state.spatial_offset
        })
    }
}

impl Default for RotationProjector {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}
