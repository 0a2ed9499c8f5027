//! Particle types, their emission sub-profiles and motion profiles

use nalgebra::{Vector2, Vector3};
use rand::Rng;
use crate::gesture::Mudra;
use crate::params::Rgb;

/// Motion profile tag, stored per particle and read by the vertex shader
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Radial expansion, ∝ age²
    Growth,
    /// Upward drift, ∝ age
    Progress,
    /// Lateral loop, phase ∝ age
    Oscillation,
}

impl ParticleKind {
    /// Value written to the `aType` attribute
    pub fn type_id(&self) -> f32 {
        match self {
            ParticleKind::Growth => 0.0,
            ParticleKind::Progress => 1.0,
            ParticleKind::Oscillation => 2.0,
        }
    }

    /// Stroke type a right-hand mudra paints with
    pub fn for_mudra(mudra: Mudra) -> Option<Self> {
        match mudra {
            Mudra::Neutral => None,
            Mudra::Prana => Some(ParticleKind::Growth),
        }
    }

    /// Displacement from the birth position after `age` seconds.
    ///
    /// Mirrors the vertex shader so CPU consumers see the same motion.
    pub fn offset(&self, age: f32, birth_position: Vector3<f32>) -> Vector3<f32> {
        if age <= 0.0 {
            return Vector3::zeros();
        }
        match self {
            ParticleKind::Growth => growth_heading(birth_position) * age * age * 6.0,
            ParticleKind::Progress => Vector3::new(0.0, age * 12.0, 0.0),
            ParticleKind::Oscillation => {
                let phase = age * 4.0;
                Vector3::new(phase.sin(), 0.0, phase.cos() * 0.5)
            }
        }
    }
}

/// `fract(sin(dot(co, (12.9898, 78.233))) * 43758.5453)`
fn shader_hash(co: Vector2<f32>) -> f32 {
    let v = co.dot(&Vector2::new(12.9898, 78.233)).sin() * 43758.5453;
    v - v.floor()
}

/// Pseudo-random unit direction derived from a position
pub fn growth_heading(p: Vector3<f32>) -> Vector3<f32> {
    let dir = Vector3::new(
        shader_hash(Vector2::new(p.x, p.y)) - 0.5,
        shader_hash(Vector2::new(p.y, p.z)) - 0.5,
        shader_hash(Vector2::new(p.z, p.x)) - 0.5,
    );
    dir.try_normalize(1.0e-6).unwrap_or_else(Vector3::zeros)
}

/// How one emitted particle is scattered and styled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeProfile {
    /// Half-width of the uniform scatter on each axis
    pub spread: Vector3<f32>,
    pub color: Rgb,
    pub size: f32,
}

/// Soft rose copper, tight cluster
pub const COPPER: StrokeProfile = StrokeProfile {
    spread: Vector3::new(0.1, 0.1, 0.1),
    color: Rgb::new(0.972, 0.733, 0.815),
    size: 2.5,
};

/// Soft gold, horizontal pillar
pub const GOLD: StrokeProfile = StrokeProfile {
    spread: Vector3::new(1.25, 0.05, 0.0),
    color: Rgb::new(1.0, 0.878, 0.509),
    size: 1.5,
};

/// Soft silver-blue, vertical spread
pub const SILVER: StrokeProfile = StrokeProfile {
    spread: Vector3::new(0.05, 1.5, 0.0),
    color: Rgb::new(0.564, 0.792, 0.976),
    size: 1.8,
};

impl StrokeProfile {
    /// Pick the sub-profile for the next particle of `kind`
    pub fn pick<R: Rng + ?Sized>(kind: ParticleKind, rng: &mut R) -> Self {
        match kind {
            ParticleKind::Growth => {
                let seed: f32 = rng.gen();
                if seed < 0.33 {
                    COPPER
                } else if seed < 0.66 {
                    GOLD
                } else {
                    SILVER
                }
            }
            ParticleKind::Progress => GOLD,
            ParticleKind::Oscillation => SILVER,
        }
    }

    /// Scatter `origin` uniformly inside the spread box
    pub fn scatter<R: Rng + ?Sized>(&self, origin: Vector3<f32>, rng: &mut R) -> Vector3<f32> {
        let mut jitter = || (rng.gen::<f32>() - 0.5) * 2.0;
        origin + Vector3::new(
            jitter() * self.spread.x,
            jitter() * self.spread.y,
            jitter() * self.spread.z,
        )
    }
}
