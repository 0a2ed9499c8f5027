//! Mudra classification from a single hand
//!
//! Pure function of one landmark set. All thresholds are expressed in
//! multiples of the palm scale, so detection does not depend on how far
//! the hand is from the camera. No temporal smoothing happens here.

use super::landmarks::{Finger, HandLandmarks, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST};

/// Fingertip-to-thumb distance counted as touching, in palm scales
pub const TOUCH_RATIO: f32 = 0.5;
/// Tip-to-wrist distance under which a finger counts as folded, in palm scales
pub const FOLD_RATIO: f32 = 1.2;

/// Symbolic gesture labels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mudra {
    #[default]
    Neutral,
    /// Ring and pinky pressed to the thumb, index and middle straight
    Prana,
}

impl Mudra {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mudra::Neutral => "NEUTRAL",
            Mudra::Prana => "PRANA",
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Mudra::Neutral)
    }
}

/// Thresholds derived from the current hand size
#[derive(Debug, Clone, Copy)]
struct HandMetrics {
    touch: f32,
    fold: f32,
}

impl HandMetrics {
    fn of(hand: &HandLandmarks) -> Self {
        let scale = hand.palm_scale();
        Self {
            touch: TOUCH_RATIO * scale,
            fold: FOLD_RATIO * scale,
        }
    }
}

/// Tip further from the wrist than the PIP joint
pub fn is_extended(hand: &HandLandmarks, finger: Finger) -> bool {
    hand.distance(finger.tip_index(), WRIST) > hand.distance(finger.pip_index(), WRIST)
}

fn is_folded(hand: &HandLandmarks, finger: Finger, metrics: &HandMetrics) -> bool {
    hand.distance(finger.tip_index(), WRIST) < metrics.fold
}

fn touches_thumb(hand: &HandLandmarks, tip: usize, metrics: &HandMetrics) -> bool {
    hand.distance(THUMB_TIP, tip) < metrics.touch
}

/// Classify one hand
pub fn classify(hand: &HandLandmarks) -> Mudra {
    let metrics = HandMetrics::of(hand);

    let thumb_closed = touches_thumb(hand, RING_TIP, &metrics)
        && touches_thumb(hand, PINKY_TIP, &metrics);
    let pointers_straight = is_extended(hand, Finger::Index) && is_extended(hand, Finger::Middle);
    let outer_folded = is_folded(hand, Finger::Ring, &metrics) && is_folded(hand, Finger::Pinky, &metrics);

    if thumb_closed && pointers_straight && outer_folded {
        Mudra::Prana
    } else {
        Mudra::Neutral
    }
}
