//! The full set of smoothed render parameters
//!
//! Rates follow what each value represents: the pointer follows fast, the
//! glide is heavy (depth heavier still), and warp strength is very slow so
//! per-frame spikes never reach the shader.

use nalgebra::{Vector2, Vector3};
use crate::engine::FrameTargets;
use crate::gesture::Mudra;
use super::color::Rgb;
use super::smoothed::Smoothed;

const WARP_RATE: f32 = 0.05;
const FALLOFF_RATE: f32 = 0.05;
const POINTER_RATE: f32 = 0.1;
const GLIDE_XY_RATE: f32 = 0.1;
const GLIDE_Z_RATE: f32 = 0.02;
const BLOOM_RATE: f32 = 0.1;
const OPACITY_RATE: f32 = 0.1;
const LOOK_COLOR_RATE: f32 = 0.05;
const LOOK_SPEED_RATE: f32 = 0.05;
const LOOK_WARP_RATE: f32 = 0.1;

/// Bloom the renderer starts with
const INITIAL_BLOOM: f32 = 0.12;
const NEUTRAL_BLOOM: f32 = 0.2;
const MUDRA_BLOOM: f32 = 0.6;
/// Extra warp while a mudra is active
pub const MUDRA_WARP_BOOST: f32 = 0.5;

/// Per-mudra color and energy the scene drifts toward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MudraLook {
    pub color: Rgb,
    pub speed: f32,
    pub warp: f32,
}

impl MudraLook {
    pub fn of(mudra: Mudra) -> Self {
        match mudra {
            // Soft icy white
            Mudra::Neutral => Self { color: Rgb::from_hex(0xe0f7fa), speed: 1.0, warp: 0.0 },
            Mudra::Prana => Self { color: Rgb::WHITE, speed: 4.0, warp: 3.0 },
        }
    }
}

/// Current values after this frame's smoothing step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    pub warp_strength: f32,
    pub falloff: f32,
    pub pointer: Vector2<f32>,
    pub base_position: Vector3<f32>,
    pub bloom: f32,
    pub global_opacity: f32,
    pub look: MudraLook,
}

impl ParamSnapshot {
    pub fn is_finite(&self) -> bool {
        self.warp_strength.is_finite()
            && self.falloff.is_finite()
            && self.bloom.is_finite()
            && self.global_opacity.is_finite()
            && self.pointer.iter().all(|c| c.is_finite())
            && self.base_position.iter().all(|c| c.is_finite())
            && self.look.speed.is_finite()
            && self.look.warp.is_finite()
    }
}

/// Smoothed parameters driven by gesture targets
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    warp_strength: Smoothed<f32>,
    falloff: Smoothed<f32>,
    pointer: Smoothed<Vector2<f32>>,
    base_xy: Smoothed<Vector2<f32>>,
    base_z: Smoothed<f32>,
    bloom: Smoothed<f32>,
    global_opacity: Smoothed<f32>,
    look_color: Smoothed<Rgb>,
    look_speed: Smoothed<f32>,
    look_warp: Smoothed<f32>,
}

impl RenderParams {
    pub fn new() -> Self {
        let defaults = FrameTargets::default();
        let neutral = MudraLook::of(Mudra::Neutral);
        Self {
            warp_strength: Smoothed::with_rate(0.0, WARP_RATE),
            falloff: Smoothed::with_rate(defaults.falloff, FALLOFF_RATE),
            pointer: Smoothed::with_rate(defaults.pointer, POINTER_RATE),
            base_xy: Smoothed::with_rate(Vector2::zeros(), GLIDE_XY_RATE),
            base_z: Smoothed::with_rate(0.0, GLIDE_Z_RATE),
            bloom: Smoothed::heading(INITIAL_BLOOM, NEUTRAL_BLOOM, BLOOM_RATE),
            global_opacity: Smoothed::with_rate(1.0, OPACITY_RATE),
            look_color: Smoothed::with_rate(neutral.color, LOOK_COLOR_RATE),
            look_speed: Smoothed::with_rate(neutral.speed, LOOK_SPEED_RATE),
            look_warp: Smoothed::with_rate(neutral.warp, LOOK_WARP_RATE),
        }
    }

    /// Point every parameter at this frame's targets.
    ///
    /// An active mudra adds a fixed boost on top of the movement-driven
    /// warp strength; it does not accumulate across frames.
    pub fn retarget(&mut self, targets: &FrameTargets, mudra: Mudra) {
        let boost = if mudra.is_neutral() { 0.0 } else { MUDRA_WARP_BOOST };
        self.warp_strength.set_target(targets.warp_strength + boost);
        self.falloff.set_target(targets.falloff);
        self.pointer.set_target(targets.pointer);
        self.base_xy.set_target(targets.base_position.xy());
        self.base_z.set_target(targets.base_position.z);
        self.bloom.set_target(if mudra.is_neutral() { NEUTRAL_BLOOM } else { MUDRA_BLOOM });

        let look = MudraLook::of(mudra);
        self.look_color.set_target(look.color);
        self.look_speed.set_target(look.speed);
        self.look_warp.set_target(look.warp);
    }

    /// Opacity the cube fades toward (1 = fully visible)
    pub fn set_opacity_target(&mut self, opacity: f32) {
        self.global_opacity.set_target(opacity);
    }

    /// Advance every parameter by one frame
    pub fn tick(&mut self) -> ParamSnapshot {
        self.warp_strength.tick();
        self.falloff.tick();
        self.pointer.tick();
        self.base_xy.tick();
        self.base_z.tick();
        self.bloom.tick();
        self.global_opacity.tick();
        self.look_color.tick();
        self.look_speed.tick();
        self.look_warp.tick();
        self.snapshot()
    }

    pub fn snapshot(&self) -> ParamSnapshot {
        let xy = self.base_xy.current();
        ParamSnapshot {
            warp_strength: self.warp_strength.current(),
            falloff: self.falloff.current(),
            pointer: self.pointer.current(),
            base_position: Vector3::new(xy.x, xy.y, self.base_z.current()),
            bloom: self.bloom.current(),
            global_opacity: self.global_opacity.current(),
            look: MudraLook {
                color: self.look_color.current(),
                speed: self.look_speed.current(),
                warp: self.look_warp.current(),
            },
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::new()
    }
}
