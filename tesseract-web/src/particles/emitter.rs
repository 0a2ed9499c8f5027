//! Fixed-capacity stroke buffer
//!
//! Strokes are written in small batches at a cursor that wraps modulo the
//! capacity, silently overwriting the oldest particles. Memory never grows
//! and overflow is not an error. Particle lifetime is implicit: the shader
//! fades by `time - birth_time` until the slot is overwritten.

use log::debug;
use nalgebra::{Vector2, Vector3};
use rand::Rng;
use crate::params::Rgb;
use crate::renderer::ParticleVertex;
use super::kind::{ParticleKind, StrokeProfile};

/// Where unwritten slots sit so the renderer never shows them
const PARKED: f32 = 99999.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRecord {
    pub position: Vector3<f32>,
    pub color: Rgb,
    pub size: f32,
    /// Seconds since the engine started
    pub birth_time: f32,
    pub kind: ParticleKind,
}

impl ParticleRecord {
    fn parked() -> Self {
        Self {
            position: Vector3::repeat(PARKED),
            color: Rgb::default(),
            size: 0.0,
            birth_time: 0.0,
            kind: ParticleKind::Growth,
        }
    }

    /// Age-driven position, as the vertex shader computes it
    pub fn position_at(&self, now_s: f32) -> Vector3<f32> {
        self.position + self.kind.offset(now_s - self.birth_time, self.position)
    }
}

/// Maps normalized image coordinates onto the scene plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldMapping {
    pub width: f32,
    pub height: f32,
}

impl WorldMapping {
    /// x → `x*w - w/2`, y → `-(y*h - h/2)` (image y points down), z = 0
    pub fn to_world(&self, image: Vector2<f32>) -> Vector3<f32> {
        Vector3::new(
            image.x * self.width - self.width / 2.0,
            -(image.y * self.height - self.height / 2.0),
            0.0,
        )
    }
}

pub struct StrokeEmitter {
    records: Vec<ParticleRecord>,
    /// Next slot to write
    cursor: usize,
    batch: usize,
    total_emitted: u64,
    mapping: WorldMapping,
    /// Set on write, cleared when the renderer takes the buffer
    dirty: bool,
}

impl StrokeEmitter {
    pub fn new(capacity: usize, batch: usize, mapping: WorldMapping) -> Self {
        Self {
            records: vec![ParticleRecord::parked(); capacity.max(1)],
            cursor: 0,
            batch,
            total_emitted: 0,
            mapping,
            dirty: false,
        }
    }

    /// Write one batch of `kind` particles around the hand position.
    ///
    /// `origin` is in normalized image coordinates, `now_s` in seconds
    /// since engine start.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        kind: ParticleKind,
        origin: Vector2<f32>,
        now_s: f32,
        rng: &mut R,
    ) -> usize {
        let center = self.mapping.to_world(origin);
        debug!("stroke {:?} at ({:.2}, {:.2})", kind, center.x, center.y);

        for _ in 0..self.batch {
            let profile = StrokeProfile::pick(kind, rng);
            self.records[self.cursor] = ParticleRecord {
                position: profile.scatter(center, rng),
                color: profile.color,
                size: profile.size,
                birth_time: now_s,
                kind,
            };
            self.cursor = (self.cursor + 1) % self.records.len();
        }

        self.total_emitted += self.batch as u64;
        self.dirty = true;
        self.batch
    }

    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_emitted(&self) -> u64 {
        self.total_emitted
    }

    pub fn get(&self, index: usize) -> Option<&ParticleRecord> {
        self.records.get(index)
    }

    /// Every slot, parked ones included, in slot order
    pub fn records(&self) -> &[ParticleRecord] {
        &self.records
    }

    /// Renderer layout of every slot
    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.records.iter().map(ParticleVertex::from).collect()
    }

    /// True once per batch of writes; the renderer re-uploads when set
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MAPPING: WorldMapping = WorldMapping { width: 16.0, height: 12.0 };

    #[test]
    fn test_batch_advances_cursor() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut emitter = StrokeEmitter::new(100, 6, MAPPING);
        let written = emitter.emit(ParticleKind::Growth, Vector2::new(0.5, 0.5), 0.0, &mut rng);
        assert_eq!(written, 6);
        assert_eq!(emitter.cursor(), 6);
        assert!(emitter.get(5).unwrap().position.x < PARKED);
        assert_eq!(emitter.get(6).unwrap().position.x, PARKED);
    }

    #[test]
    fn test_overflow_wraps_and_overwrites_oldest() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut emitter = StrokeEmitter::new(10, 6, MAPPING);

        emitter.emit(ParticleKind::Progress, Vector2::new(0.5, 0.5), 1.0, &mut rng);
        emitter.emit(ParticleKind::Progress, Vector2::new(0.5, 0.5), 2.0, &mut rng);

        assert_eq!(emitter.capacity(), 10);
        assert_eq!(emitter.records().len(), 10);
        assert_eq!(emitter.cursor(), 2);
        assert_eq!(emitter.total_emitted(), 12);
        // Slots 0 and 1 were rewritten by the second batch
        assert_eq!(emitter.get(0).unwrap().birth_time, 2.0);
        assert_eq!(emitter.get(1).unwrap().birth_time, 2.0);
        assert_eq!(emitter.get(2).unwrap().birth_time, 1.0);
    }

    #[test]
    fn test_many_batches_never_grow_memory() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut emitter = StrokeEmitter::new(50, 6, MAPPING);
        for i in 0..1000 {
            emitter.emit(ParticleKind::Oscillation, Vector2::new(0.2, 0.8), i as f32, &mut rng);
        }
        assert_eq!(emitter.records().len(), 50);
        assert_eq!(emitter.cursor(), (1000 * 6) % 50);
    }

    #[test]
    fn test_world_mapping() {
        assert_eq!(MAPPING.to_world(Vector2::new(0.5, 0.5)), Vector3::zeros());
        assert_eq!(MAPPING.to_world(Vector2::new(0.0, 0.0)), Vector3::new(-8.0, 6.0, 0.0));
        assert_eq!(MAPPING.to_world(Vector2::new(1.0, 1.0)), Vector3::new(8.0, -6.0, 0.0));
    }

    #[test]
    fn test_dirty_flag() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut emitter = StrokeEmitter::new(20, 6, MAPPING);
        assert!(!emitter.take_dirty());
        emitter.emit(ParticleKind::Growth, Vector2::new(0.1, 0.1), 0.0, &mut rng);
        assert!(emitter.take_dirty());
        assert!(!emitter.take_dirty());
    }

    #[test]
    fn test_vertices_cover_every_slot() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut emitter = StrokeEmitter::new(20, 6, MAPPING);
        emitter.emit(ParticleKind::Progress, Vector2::new(0.5, 0.5), 3.0, &mut rng);
        let vertices = emitter.vertices();
        assert_eq!(vertices.len(), 20);
        assert_eq!(vertices[0].birth, 3.0);
        assert_eq!(vertices[0].kind, 1.0);
        assert_eq!(vertices[6].position, [PARKED; 3]);
    }

    #[test]
    fn test_progress_particle_rises_with_age() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut emitter = StrokeEmitter::new(20, 6, MAPPING);
        emitter.emit(ParticleKind::Progress, Vector2::new(0.5, 0.5), 1.0, &mut rng);
        let p = *emitter.get(0).unwrap();
        assert_eq!(p.position_at(1.0), p.position);
        assert!((p.position_at(2.0).y - (p.position.y + 12.0)).abs() < 1e-4);
    }
}
