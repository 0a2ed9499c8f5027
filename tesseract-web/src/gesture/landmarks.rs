//! Hand landmarks as delivered by the inference model
//!
//! 21 points per hand in normalized image coordinates (x, y in 0-1,
//! z relative depth). Flat `Float32Array`s from JS are validated here,
//! once, and everything downstream works on named accessors.

use nalgebra::Vector3;
use crate::error::LandmarkError;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;
/// Floats per hand in the flat JS payload
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;
/// Largest coordinate magnitude accepted. Tracked points sit in or near
/// 0-1; anything far outside would blow the glide target up to infinity.
pub const MAX_COORDINATE: f32 = 10.0;

/// The four long fingers, as (pip, tip) pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub fn pip_index(self) -> usize {
        match self {
            Finger::Index => INDEX_PIP,
            Finger::Middle => MIDDLE_PIP,
            Finger::Ring => RING_PIP,
            Finger::Pinky => PINKY_PIP,
        }
    }

    pub fn tip_index(self) -> usize {
        match self {
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }
}

/// Which hand the model reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// 0 = Left, 1 = Right (the encoding the JS glue uses)
    pub fn from_code(code: u8) -> Result<Self, LandmarkError> {
        match code {
            0 => Ok(Handedness::Left),
            1 => Ok(Handedness::Right),
            other => Err(LandmarkError::UnknownHandedness(other)),
        }
    }
}

/// One validated 21-point hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Vector3<f32>; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vector3<f32>; LANDMARK_COUNT]) -> Result<Self, LandmarkError> {
        if let Some(index) = points.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(LandmarkError::NonFinite { index });
        }
        if let Some(index) = points.iter().position(|p| p.amax() > MAX_COORDINATE) {
            return Err(LandmarkError::OutOfRange { index });
        }
        Ok(Self { points })
    }

    /// Parse exactly 63 floats (21 × x, y, z)
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(LandmarkError::WrongLength {
                expected: FLOATS_PER_HAND,
                actual: data.len(),
            });
        }
        Self::new(std::array::from_fn(|i| {
            Vector3::new(data[i * 3], data[i * 3 + 1], data[i * 3 + 2])
        }))
    }

    pub fn point(&self, index: usize) -> Vector3<f32> {
        self.points[index]
    }

    pub fn wrist(&self) -> Vector3<f32> {
        self.points[WRIST]
    }

    pub fn thumb_tip(&self) -> Vector3<f32> {
        self.points[THUMB_TIP]
    }

    pub fn index_tip(&self) -> Vector3<f32> {
        self.points[INDEX_TIP]
    }

    pub fn middle_mcp(&self) -> Vector3<f32> {
        self.points[MIDDLE_MCP]
    }

    pub fn middle_tip(&self) -> Vector3<f32> {
        self.points[MIDDLE_TIP]
    }

    pub fn tip(&self, finger: Finger) -> Vector3<f32> {
        self.points[finger.tip_index()]
    }

    pub fn pip(&self, finger: Finger) -> Vector3<f32> {
        self.points[finger.pip_index()]
    }

    /// Euclidean distance between two landmarks
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        (self.points[a] - self.points[b]).norm()
    }

    /// Wrist → middle-finger base; the hand-size reference
    pub fn palm_scale(&self) -> f32 {
        self.distance(WRIST, MIDDLE_MCP)
    }
}

/// A hand plus its handedness label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandFrame {
    pub handedness: Handedness,
    pub landmarks: HandLandmarks,
}

/// Split the flat multi-hand payload into validated frames.
///
/// `flat` holds `handedness.len()` hands back to back.
pub fn parse_hands(flat: &[f32], handedness: &[u8]) -> Result<Vec<HandFrame>, LandmarkError> {
    if flat.len() != handedness.len() * FLOATS_PER_HAND {
        if flat.len() % FLOATS_PER_HAND == 0 {
            return Err(LandmarkError::HandednessMismatch {
                labels: handedness.len(),
                hands: flat.len() / FLOATS_PER_HAND,
            });
        }
        return Err(LandmarkError::WrongLength {
            expected: handedness.len() * FLOATS_PER_HAND,
            actual: flat.len(),
        });
    }

    flat.chunks_exact(FLOATS_PER_HAND)
        .zip(handedness.iter())
        .map(|(chunk, code)| {
            Ok(HandFrame {
                handedness: Handedness::from_code(*code)?,
                landmarks: HandLandmarks::from_flat(chunk)?,
            })
        })
        .collect()
}
