//! Engine: owns every piece of mutable state and runs the two steps
//!
//! `apply_hands` runs once per inference callback and swaps in fresh
//! targets. `tick` runs once per animation frame: it smooths toward the
//! targets, advances the rotation, pushes a trail entry and builds the
//! buffers for the renderer. A tick stages everything first and commits
//! only once the new state is known to be finite.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::TesseractConfig;
use crate::error::{LandmarkError, TickError};
use crate::geometry::{HypercubeTopology, RotationProjector, RotationState, TrailHistory};
use crate::gesture::{parse_hands, HandFrame, Mudra, MudraLock};
use crate::params::{ParamSnapshot, RenderParams};
use crate::particles::{StrokeEmitter, WorldMapping};
use crate::renderer::{build_trail_frame, FrameMetrics, ParticleVertex, StatusLine, TrailFrame, WarpUniforms};
use super::input::InputProcessor;
use super::targets::{FrameTargets, RotationDelta};

/// What one tick hands to the renderer
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub trail: TrailFrame,
    pub uniforms: WarpUniforms,
    pub params: ParamSnapshot,
    /// Version of the targets this frame was smoothed toward
    pub targets_version: u64,
}

pub struct Engine {
    config: TesseractConfig,
    topology: HypercubeTopology,
    projector: RotationProjector,
    trail: TrailHistory,
    lock: MudraLock,
    params: RenderParams,
    input: InputProcessor,
    targets: FrameTargets,
    /// Accumulated w-plane angles
    angles: RotationDelta,
    emitter: StrokeEmitter,
    rng: StdRng,
    start_ms: f64,
    status: StatusLine,
    metrics: FrameMetrics,
    visual_only: bool,
}

impl Engine {
    pub fn new(config: TesseractConfig, now_ms: f64, seed: u64) -> Self {
        let mapping = WorldMapping {
            width: config.input.world_width,
            height: config.input.world_height,
        };
        info!(
            "Engine ready: trail {} slots, {} particle slots",
            config.trail_length, config.max_particles
        );

        Self {
            topology: HypercubeTopology::new(),
            projector: RotationProjector::new(config.projection),
            trail: TrailHistory::prefilled(
                config.trail_length,
                config.trail_decay,
                config.visibility_epsilon,
                now_ms,
            ),
            lock: MudraLock::new(config.lock_window_ms),
            params: RenderParams::new(),
            input: InputProcessor::new(config.input),
            targets: FrameTargets::default(),
            angles: RotationDelta::ZERO,
            emitter: StrokeEmitter::new(config.max_particles, config.stroke_batch, mapping),
            rng: StdRng::seed_from_u64(seed),
            start_ms: now_ms,
            status: StatusLine::default(),
            metrics: FrameMetrics::default(),
            visual_only: false,
            config,
        }
    }

    // ========================================================================
    // INPUT STEP
    // ========================================================================

    /// Feed one inference frame's hands (possibly none)
    pub fn apply_hands(&mut self, hands: &[HandFrame], now_ms: f64) {
        if self.visual_only {
            return;
        }

        let frame = self.input.process(hands, &self.targets);

        self.lock.update(frame.right_mudra, now_ms);

        if let Some(stroke) = frame.stroke {
            let now_s = self.elapsed_seconds(now_ms);
            self.emitter.emit(stroke.kind, stroke.origin, now_s, &mut self.rng);
        }

        self.targets = frame.targets;
        self.status.left = frame.left_action;
    }

    /// Validate the flat payload, then apply it. On error nothing changes.
    pub fn apply_hand_results(
        &mut self,
        flat: &[f32],
        handedness: &[u8],
        now_ms: f64,
    ) -> Result<(), LandmarkError> {
        let hands = parse_hands(flat, handedness)?;
        self.apply_hands(&hands, now_ms);
        Ok(())
    }

    /// Hand tracking could not start: keep animating, ignore input
    pub fn set_tracking_unavailable(&mut self, reason: &str) {
        if self.visual_only {
            return;
        }
        warn!("Hand tracking unavailable, running visual only: {}", reason);

        self.targets = self.input.process(&[], &self.targets).targets;
        self.lock.reset();
        self.visual_only = true;
        self.status = StatusLine {
            visual_only: true,
            ..StatusLine::default()
        };
    }

    /// Opacity the whole cube fades toward
    pub fn set_visibility(&mut self, opacity: f32) {
        self.params.set_opacity_target(opacity.clamp(0.0, 1.0));
    }

    // ========================================================================
    // RENDER STEP
    // ========================================================================

    pub fn tick(&mut self, now_ms: f64) -> Result<FrameOutput, TickError> {
        if !now_ms.is_finite() {
            return Err(TickError::NonFinite { what: "timestamp" });
        }

        // One copy: the rotation triple and base position come from the same input frame
        let targets = self.targets;

        let mut params = self.params;
        params.retarget(&targets, self.lock.current());
        let snapshot = params.tick();
        if !snapshot.is_finite() {
            return Err(TickError::NonFinite { what: "render parameters" });
        }

        let angles = RotationDelta {
            xw: self.angles.xw + targets.rotation_delta.xw,
            yw: self.angles.yw + targets.rotation_delta.yw,
            zw: self.angles.zw + targets.rotation_delta.zw,
        };
        let state = RotationState {
            axw: angles.xw,
            ayw: angles.yw,
            azw: angles.zw,
            spatial_offset: snapshot.base_position,
            ..RotationState::at(now_ms)
        };
        if !state.is_finite() {
            return Err(TickError::NonFinite { what: "rotation state" });
        }

        self.params = params;
        self.angles = angles;
        self.trail.push(state);

        let trail = build_trail_frame(
            &self.trail,
            &self.topology,
            &self.projector,
            now_ms,
            snapshot.global_opacity,
        );
        let uniforms = WarpUniforms {
            pointer: snapshot.pointer.into(),
            strength: snapshot.warp_strength,
            falloff: snapshot.falloff,
            time: self.elapsed_seconds(now_ms),
            bloom: snapshot.bloom,
            _pad: [0.0; 2],
        };

        Ok(FrameOutput {
            trail,
            uniforms,
            params: snapshot,
            targets_version: targets.version,
        })
    }

    /// Particle buffer if strokes were written since the last call
    pub fn take_particle_vertices(&mut self) -> Option<Vec<ParticleVertex>> {
        if self.emitter.take_dirty() {
            Some(self.emitter.vertices())
        } else {
            None
        }
    }

    // ========================================================================
    // DEBUG SURFACE
    // ========================================================================

    pub fn record_frame_metrics(&mut self, fps: f32, frame_time_ms: f32) {
        self.metrics.record(fps, frame_time_ms);
    }

    /// Status as of `now_ms`; the lock icon drops once the window runs out
    /// even if no inference frame has arrived since.
    pub fn status(&self, now_ms: f64) -> StatusLine {
        StatusLine {
            mudra: self.lock.current(),
            locked: self.lock.is_locked(now_ms),
            ..self.status
        }
    }

    pub fn status_text(&self, now_ms: f64) -> String {
        self.status(now_ms).text()
    }

    pub fn overlay_text(&self, now_ms: f64) -> String {
        self.metrics.overlay_text(&self.status(now_ms))
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &TesseractConfig {
        &self.config
    }

    pub fn targets(&self) -> &FrameTargets {
        &self.targets
    }

    pub fn mudra(&self) -> Mudra {
        self.lock.current()
    }

    pub fn lock(&self) -> &MudraLock {
        &self.lock
    }

    pub fn trail(&self) -> &TrailHistory {
        &self.trail
    }

    pub fn emitter(&self) -> &StrokeEmitter {
        &self.emitter
    }

    pub fn params(&self) -> ParamSnapshot {
        self.params.snapshot()
    }

    pub fn angles(&self) -> RotationDelta {
        self.angles
    }

    pub fn is_visual_only(&self) -> bool {
        self.visual_only
    }

    fn elapsed_seconds(&self, now_ms: f64) -> f32 {
        ((now_ms - self.start_ms) / 1000.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::test_hands::{open, prana, transformed};
    use crate::gesture::Handedness;

    fn right(landmarks: crate::gesture::HandLandmarks) -> HandFrame {
        HandFrame { handedness: Handedness::Right, landmarks }
    }

    fn left(landmarks: crate::gesture::HandLandmarks) -> HandFrame {
        HandFrame { handedness: Handedness::Left, landmarks }
    }

    fn engine() -> Engine {
        Engine::new(TesseractConfig::default(), 0.0, 42)
    }

    #[test]
    fn test_first_tick_pushes_head() {
        let mut engine = engine();
        let out = engine.tick(16.0).unwrap();
        assert_eq!(engine.trail().len(), 60);
        assert_eq!(engine.trail().get(0).unwrap().timestamp, 16.0);
        assert_eq!(out.trail.slots.len(), 60);
        assert!(out.trail.slots[0].points_visible);
        assert_eq!(out.uniforms.pointer, [0.5, 0.5]);
    }

    #[test]
    fn test_rotation_delta_reused_until_replaced() {
        let mut engine = engine();
        engine.apply_hands(&[right(prana())], 0.0);
        engine.apply_hands(&[right(transformed(&prana(), 1.0, (0.02, 0.0)))], 16.0);
        let delta = engine.targets().rotation_delta;
        assert!(delta.xw > 0.0);

        engine.tick(20.0).unwrap();
        engine.tick(36.0).unwrap();
        engine.tick(52.0).unwrap();
        assert!((engine.angles().xw - 3.0 * delta.xw).abs() < 1e-5);
        assert!((engine.angles().zw - 3.0 * delta.zw).abs() < 1e-5);
    }

    #[test]
    fn test_non_finite_tick_commits_nothing() {
        let mut engine = engine();
        engine.tick(16.0).unwrap();
        let before = *engine.trail().get(0).unwrap();
        let params_before = engine.params();

        assert_eq!(
            engine.tick(f64::NAN).unwrap_err(),
            TickError::NonFinite { what: "timestamp" }
        );
        assert_eq!(*engine.trail().get(0).unwrap(), before);
        assert_eq!(engine.params(), params_before);
    }

    #[test]
    fn test_bad_payload_leaves_targets_alone() {
        let mut engine = engine();
        let version = engine.targets().version;
        let err = engine.apply_hand_results(&[0.5; 10], &[1], 0.0).unwrap_err();
        assert_eq!(err, LandmarkError::WrongLength { expected: 63, actual: 10 });
        assert_eq!(engine.targets().version, version);
    }

    #[test]
    fn test_prana_locks_and_paints() {
        let mut engine = engine();
        engine.apply_hands(&[right(prana())], 100.0);
        assert_eq!(engine.mudra(), Mudra::Prana);
        assert_eq!(engine.status_text(100.0), "R: PRANA 🔒 | L: NONE");
        assert_eq!(engine.emitter().total_emitted(), 6);

        let particles = engine.take_particle_vertices().unwrap();
        assert_eq!(particles.len(), 20_000);
        assert!(engine.take_particle_vertices().is_none());
    }

    #[test]
    fn test_lock_icon_clears_without_new_frames() {
        let mut engine = engine();
        engine.apply_hands(&[right(prana())], 0.0);
        assert_eq!(engine.status_text(2999.0), "R: PRANA 🔒 | L: NONE");

        // No inference frame since: the mudra stays, the lock does not
        assert_eq!(engine.status_text(3500.0), "R: PRANA | L: NONE");
        assert!(engine.overlay_text(3500.0).contains("R: PRANA | L: NONE"));
    }

    #[test]
    fn test_left_only_frames_release_lock_after_window() {
        let mut engine = engine();
        engine.apply_hands(&[right(prana())], 0.0);

        engine.apply_hands(&[left(open())], 1000.0);
        assert_eq!(engine.mudra(), Mudra::Prana, "lock holds inside the window");

        engine.apply_hands(&[left(prana())], 3100.0);
        assert_eq!(engine.mudra(), Mudra::Neutral);
        assert_eq!(engine.status_text(3100.0), "R: NEUTRAL | L: TRAIL");
    }

    #[test]
    fn test_visual_only_ignores_hands() {
        let mut engine = engine();
        engine.set_tracking_unavailable("camera denied");
        engine.set_tracking_unavailable("camera denied");
        engine.apply_hands(&[right(prana())], 0.0);

        assert!(engine.is_visual_only());
        assert_eq!(engine.mudra(), Mudra::Neutral);
        assert_eq!(engine.emitter().total_emitted(), 0);
        assert!(engine.status_text(0.0).ends_with("(visual only)"));
        // Still animates
        assert!(engine.tick(16.0).is_ok());
    }

    #[test]
    fn test_hidden_cube_fades() {
        let mut engine = engine();
        engine.set_visibility(0.0);
        let mut last = 1.0;
        for i in 1..=10 {
            let out = engine.tick(i as f64 * 16.0).unwrap();
            assert!(out.params.global_opacity < last);
            last = out.params.global_opacity;
        }
    }
}
