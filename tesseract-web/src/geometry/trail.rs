//! Bounded history of past rotation states
//!
//! Index 0 is the newest state. Each entry keeps the angles and spatial
//! offset it was pushed with, so ghosts stay where the cube actually was.

use std::collections::VecDeque;
use super::projection::RotationState;

/// Age spacing of the startup fan (one 60 Hz frame)
const PREFILL_FRAME_MS: f64 = 16.0;
/// Angle step between consecutive startup entries
const PREFILL_ANGLE_STEP: f32 = 0.01;

pub struct TrailHistory {
    states: VecDeque<RotationState>,
    capacity: usize,
    /// Fade rate per second
    decay_rate: f32,
    /// Opacity below which a slot is culled
    epsilon: f32,
}

impl TrailHistory {
    pub fn new(capacity: usize, decay_rate: f32, epsilon: f32) -> Self {
        Self {
            states: VecDeque::with_capacity(capacity + 1),
            capacity,
            decay_rate,
            epsilon,
        }
    }

    /// History seeded with a short fan of slightly rotated states, so the
    /// cube shows depth before any input arrives.
    pub fn prefilled(capacity: usize, decay_rate: f32, epsilon: f32, now: f64) -> Self {
        let mut trail = Self::new(capacity, decay_rate, epsilon);
        for h in 0..capacity {
            let angle = h as f32 * PREFILL_ANGLE_STEP;
            let mut state = RotationState::at(now - h as f64 * PREFILL_FRAME_MS);
            state.axw = angle;
            state.ayw = angle;
            state.azw = angle;
            trail.states.push_back(state);
        }
        trail
    }

    /// Insert at head, evicting from the tail when full
    pub fn push(&mut self, state: RotationState) {
        self.states.push_front(state);
        while self.states.len() > self.capacity {
            self.states.pop_back();
        }
    }

    pub fn get(&self, index: usize) -> Option<&RotationState> {
        self.states.get(index)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &RotationState> {
        self.states.iter()
    }

    /// `intensity * exp(-age_s * decay) * global_opacity`, or `None` when the
    /// slot is empty or too dim to draw.
    pub fn slot_opacity(&self, index: usize, now: f64, global_opacity: f32) -> Option<f32> {
        let state = self.states.get(index)?;
        let age_seconds = ((now - state.timestamp) / 1000.0) as f32;
        let opacity = state.intensity * (-age_seconds * self.decay_rate).exp() * global_opacity;

        if opacity < self.epsilon {
            None
        } else {
            Some(opacity)
        }
    }
}
