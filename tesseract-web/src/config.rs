//! Tunables for geometry, gesture locking, smoothing and strokes
//!
//! Defaults reproduce the tuned look of the installation. Hosts that want a
//! different feel build a `TesseractConfig` and hand it to `Engine::new`.

use wasm_bindgen::prelude::*;

/// Options forwarded unchanged to the external hand-landmark model.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandTrackingOptions {
    pub max_num_hands: u32,
    /// 0 = lite model
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for HandTrackingOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 2,
            model_complexity: 0,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Projection constants for the 4D → 3D step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Distance of the 4D camera along w
    pub camera_distance: f32,
    /// Display magnification applied after perspective division
    pub magnification: f32,
    /// Global opacity below which ghosts are pushed back in depth
    pub fade_threshold: f32,
    /// Strength of the depth push: `z *= 1 + (1 - opacity) * depth_push`
    pub depth_push: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            camera_distance: 3.0,
            magnification: 4.0,
            fade_threshold: 0.3,
            depth_push: 5.0,
        }
    }
}

/// Maps normalized hand coordinates onto the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConfig {
    /// Index-tip delta multiplier for rotation input
    pub rotation_gain: f32,
    /// Hand scale → warp falloff multiplier
    pub falloff_gain: f32,
    pub falloff_min: f32,
    pub falloff_max: f32,
    /// Left-hand wrist→middle-tip span considered "neutral depth"
    pub nominal_hand_scale: f32,
    pub depth_gain: f32,
    /// World extents covered by the camera image (width, height)
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotation_gain: 5.0,
            falloff_gain: 20.0,
            falloff_min: 0.6,
            falloff_max: 5.0,
            nominal_hand_scale: 0.25,
            depth_gain: 10.0,
            world_width: 16.0,
            world_height: 12.0,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TesseractConfig {
    pub trail_length: usize,
    /// Exponential fade rate of ghosts, per second
    pub trail_decay: f32,
    /// Ghosts dimmer than this are culled
    pub visibility_epsilon: f32,
    pub projection: ProjectionConfig,
    /// How long a detected mudra is held against flicker (ms)
    pub lock_window_ms: f64,
    pub stroke_batch: usize,
    pub max_particles: usize,
    pub input: InputConfig,
    pub tracking: HandTrackingOptions,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            trail_length: 60,
            trail_decay: 0.8,
            visibility_epsilon: 0.01,
            projection: ProjectionConfig::default(),
            lock_window_ms: 3000.0,
            stroke_batch: 6,
            max_particles: 20_000,
            input: InputConfig::default(),
            tracking: HandTrackingOptions::default(),
        }
    }
}
