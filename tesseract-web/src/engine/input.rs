//! Input step: one inference callback → one complete set of targets
//!
//! Right hand is the artist (mudra, pointer, warp, rotation, strokes).
//! Left hand is the utility hand: it only moves the cube around and is
//! never classified. A frame without a right hand reads as NEUTRAL.

use nalgebra::{Vector2, Vector3};
use crate::config::InputConfig;
use crate::gesture::{classify, HandFrame, HandLandmarks, Handedness, Mudra, MIDDLE_TIP, WRIST};
use crate::particles::ParticleKind;
use super::targets::{FrameTargets, RotationDelta};

/// Warp strength while a mudra is held but the hand has no previous position
const FIRST_FRAME_WARP: f32 = 0.2;
/// Warp strength of a held mudra before movement is added
const HELD_WARP: f32 = 0.5;
/// Movement → warp multiplier, capped at 1
const MOVEMENT_WARP_GAIN: f32 = 2.0;

/// What the left hand is doing, for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftAction {
    #[default]
    None,
    /// Cube follows the hand
    Trail,
}

impl LeftAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeftAction::None => "NONE",
            LeftAction::Trail => "TRAIL",
        }
    }
}

/// A stroke to paint this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRequest {
    pub kind: ParticleKind,
    /// Normalized image coordinates of the index tip
    pub origin: Vector2<f32>,
}

/// Everything one inference frame produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputFrame {
    pub targets: FrameTargets,
    /// Raw classifier output for the lock; NEUTRAL when no right hand is in view
    pub right_mudra: Mudra,
    pub left_action: LeftAction,
    pub stroke: Option<StrokeRequest>,
}

pub struct InputProcessor {
    config: InputConfig,
    /// Right index tip on the previous mudra frame
    last_hand_pos: Option<Vector2<f32>>,
}

impl InputProcessor {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            last_hand_pos: None,
        }
    }

    /// Build the next targets from this frame's hands.
    ///
    /// Fields the hands do not speak to (falloff, and the pointer when the
    /// right hand is relaxed) carry over from `previous`.
    pub fn process(&mut self, hands: &[HandFrame], previous: &FrameTargets) -> InputFrame {
        let mut next = previous.successor();
        next.rotation_delta = RotationDelta::ZERO;
        next.warp_strength = 0.0;

        if hands.is_empty() {
            // Recenter; the lock still decides the mudra
            next.base_position = Vector3::zeros();
            next.pointer = FrameTargets::neutral_pointer();
            self.last_hand_pos = None;
            return InputFrame {
                targets: next,
                right_mudra: Mudra::Neutral,
                left_action: LeftAction::None,
                stroke: None,
            };
        }

        let mut right_mudra = Mudra::Neutral;
        let mut left_action = LeftAction::None;
        let mut stroke = None;
        let mut left_found = false;

        for hand in hands {
            match hand.handedness {
                Handedness::Right => {
                    right_mudra = classify(&hand.landmarks);
                    stroke = self.apply_right(&hand.landmarks, right_mudra, &mut next);
                }
                Handedness::Left => {
                    left_found = true;
                    left_action = LeftAction::Trail;
                    next.base_position = self.left_target(&hand.landmarks);
                }
            }
        }

        if !left_found {
            next.base_position = Vector3::zeros();
        }

        InputFrame {
            targets: next,
            right_mudra,
            left_action,
            stroke,
        }
    }

    fn apply_right(
        &mut self,
        hand: &HandLandmarks,
        mudra: Mudra,
        next: &mut FrameTargets,
    ) -> Option<StrokeRequest> {
        let Some(kind) = ParticleKind::for_mudra(mudra) else {
            self.last_hand_pos = None;
            return None;
        };

        let tip = hand.index_tip();
        let tip = Vector2::new(tip.x, tip.y);

        // Shader uv has y up
        next.pointer = Vector2::new(tip.x, 1.0 - tip.y);
        next.falloff = (hand.palm_scale() * self.config.falloff_gain)
            .clamp(self.config.falloff_min, self.config.falloff_max);

        next.warp_strength = match self.last_hand_pos {
            Some(last) => {
                let delta = (tip - last) * self.config.rotation_gain;
                next.rotation_delta = RotationDelta {
                    xw: delta.x,
                    yw: delta.y,
                    zw: delta.x,
                };
                HELD_WARP + (delta.norm() * MOVEMENT_WARP_GAIN).min(1.0)
            }
            None => FIRST_FRAME_WARP,
        };
        self.last_hand_pos = Some(tip);

        Some(StrokeRequest { kind, origin: tip })
    }

    /// World-space glide target from the left index tip and hand size
    fn left_target(&self, hand: &HandLandmarks) -> Vector3<f32> {
        let tip = hand.index_tip();
        let w = self.config.world_width;
        let h = self.config.world_height;
        let span = hand.distance(WRIST, MIDDLE_TIP);

        Vector3::new(
            tip.x * w - w / 2.0,
            -(tip.y * h - h / 2.0),
            (span - self.config.nominal_hand_scale) * self.config.depth_gain,
        )
    }
}
