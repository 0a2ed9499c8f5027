//! Exponential smoothing toward a moving target
//!
//! `current += (target - current) * rate` once per frame. For a fixed target
//! and 0 < rate < 1 the error shrinks by (1 - rate) every tick and never
//! changes sign.

use nalgebra::Vector2;
use crate::error::ParamError;
use super::color::Rgb;

/// Values that can be moved a fraction of the way toward another value
pub trait Lerp: Copy {
    fn lerp_toward(self, target: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_toward(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for Vector2<f32> {
    fn lerp_toward(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for Rgb {
    fn lerp_toward(self, target: Self, t: f32) -> Self {
        self.lerp(target, t)
    }
}

/// One smoothed render parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed<T: Lerp> {
    current: T,
    target: T,
    rate: f32,
}

impl<T: Lerp> Smoothed<T> {
    /// Start at rest on `initial` with a validated rate
    pub fn new(initial: T, rate: f32) -> Result<Self, ParamError> {
        if !(rate > 0.0 && rate < 1.0) {
            return Err(ParamError::InvalidRate(rate));
        }
        Ok(Self::with_rate(initial, rate))
    }

    /// Internal constructor for the built-in rate table
    pub(crate) fn with_rate(initial: T, rate: f32) -> Self {
        debug_assert!(rate > 0.0 && rate < 1.0);
        Self {
            current: initial,
            target: initial,
            rate,
        }
    }

    /// Start at `initial` while already heading for `target`
    pub(crate) fn heading(initial: T, target: T, rate: f32) -> Self {
        Self {
            target,
            ..Self::with_rate(initial, rate)
        }
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Advance one frame and return the new value
    pub fn tick(&mut self) -> T {
        self.current = self.current.lerp_toward(self.target, self.rate);
        self.current
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}
