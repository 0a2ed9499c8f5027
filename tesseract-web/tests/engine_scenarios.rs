//! End-to-end scenarios through the public engine API

use tesseract_web::config::TesseractConfig;
use tesseract_web::engine::Engine;
use tesseract_web::error::LandmarkError;
use tesseract_web::gesture::{Mudra, FLOATS_PER_HAND, INDEX_TIP, LANDMARK_COUNT};

const LEFT: u8 = 0;
const RIGHT: u8 = 1;

/// Ring and pinky on the thumb, index and middle straight; palm scale 0.2
const PRANA: [(f32, f32); LANDMARK_COUNT] = [
    (0.50, 0.90),
    (0.56, 0.86), (0.60, 0.82), (0.60, 0.80), (0.58, 0.78),
    (0.45, 0.72), (0.45, 0.60), (0.44, 0.52), (0.44, 0.45),
    (0.50, 0.70), (0.50, 0.58), (0.50, 0.50), (0.50, 0.42),
    (0.55, 0.72), (0.55, 0.65), (0.57, 0.70), (0.56, 0.76),
    (0.59, 0.75), (0.60, 0.68), (0.61, 0.73), (0.60, 0.78),
];

/// Every finger straight, thumb away from the palm
const OPEN: [(f32, f32); LANDMARK_COUNT] = [
    (0.50, 0.90),
    (0.44, 0.86), (0.38, 0.80), (0.34, 0.75), (0.30, 0.70),
    (0.45, 0.72), (0.44, 0.60), (0.43, 0.52), (0.42, 0.45),
    (0.50, 0.70), (0.50, 0.58), (0.50, 0.50), (0.50, 0.42),
    (0.55, 0.72), (0.56, 0.60), (0.57, 0.53), (0.58, 0.46),
    (0.59, 0.75), (0.61, 0.66), (0.62, 0.60), (0.63, 0.55),
];

fn flat(hand: &[(f32, f32); LANDMARK_COUNT], shift: (f32, f32)) -> Vec<f32> {
    hand.iter()
        .flat_map(|&(x, y)| [x + shift.0, y + shift.1, 0.0])
        .collect()
}

fn engine() -> Engine {
    Engine::new(TesseractConfig::default(), 0.0, 7)
}

#[test]
fn test_hands_leaving_returns_to_rest_after_lock() {
    let mut engine = engine();
    engine.apply_hand_results(&flat(&PRANA, (0.1, -0.1)), &[RIGHT], 0.0).unwrap();
    assert_eq!(engine.mudra(), Mudra::Prana);

    // Hands gone inside the lock window: mudra held, spatial targets reset
    let mut now = 0.0;
    for _ in 0..30 {
        now += 33.0;
        engine.apply_hand_results(&[], &[], now).unwrap();
        engine.tick(now).unwrap();
    }
    assert_eq!(engine.mudra(), Mudra::Prana);
    assert!(engine.status_text(now).starts_with("R: PRANA 🔒"));
    assert_eq!(engine.targets().pointer.x, 0.5);
    assert_eq!(engine.targets().pointer.y, 0.5);
    assert_eq!(engine.targets().base_position.norm(), 0.0);

    // First neutral reading after the window clears it
    engine.apply_hand_results(&[], &[], 3001.0).unwrap();
    assert_eq!(engine.mudra(), Mudra::Neutral);
    assert_eq!(engine.status_text(3001.0), "R: NEUTRAL | L: NONE");

    for i in 0..200 {
        engine.tick(3001.0 + i as f64 * 16.0).unwrap();
    }
    let params = engine.params();
    assert!((params.pointer.x - 0.5).abs() < 1e-3);
    assert!((params.pointer.y - 0.5).abs() < 1e-3);
    assert!((params.bloom - 0.2).abs() < 1e-3);
}

#[test]
fn test_left_hand_glides_cube() {
    let mut engine = engine();
    // Index tip lands at image (0.67, 0.45)
    engine.apply_hand_results(&flat(&OPEN, (0.25, 0.0)), &[LEFT], 0.0).unwrap();
    let target = engine.targets().base_position;
    assert!(target.x > 0.0);
    assert_eq!(engine.status_text(0.0), "R: NEUTRAL | L: TRAIL");

    let mut last_x = 0.0;
    for i in 1..=20 {
        let out = engine.tick(i as f64 * 16.0).unwrap();
        let x = out.params.base_position.x;
        assert!(x > last_x && x <= target.x, "glide must approach without overshoot");
        last_x = x;
    }

    // The newest ghost is drawn where the cube is
    let head = engine.trail().get(0).unwrap();
    assert_eq!(head.spatial_offset, engine.params().base_position);
}

#[test]
fn test_left_only_frames_release_lock() {
    let mut engine = engine();
    engine.apply_hand_results(&flat(&PRANA, (0.0, 0.0)), &[RIGHT], 0.0).unwrap();

    // Right hand drops out; the left keeps the frames coming
    let mut now = 0.0;
    while now < 3100.0 {
        now += 100.0;
        engine.apply_hand_results(&flat(&OPEN, (0.1, 0.0)), &[LEFT], now).unwrap();
        engine.tick(now).unwrap();
        if now < 3000.0 {
            assert_eq!(engine.mudra(), Mudra::Prana, "held at {}", now);
        }
    }

    assert_eq!(engine.mudra(), Mudra::Neutral);
    assert_eq!(engine.status_text(now), "R: NEUTRAL | L: TRAIL");
}

#[test]
fn test_huge_coordinate_is_rejected_and_ticks_continue() {
    let mut engine = engine();
    engine.apply_hand_results(&flat(&OPEN, (0.0, 0.0)), &[LEFT], 0.0).unwrap();
    engine.tick(16.0).unwrap();
    let before = *engine.targets();

    let mut huge = flat(&OPEN, (0.0, 0.0));
    huge[INDEX_TIP * 3] = 1e38;
    assert_eq!(
        engine.apply_hand_results(&huge, &[LEFT], 20.0).unwrap_err(),
        LandmarkError::OutOfRange { index: INDEX_TIP }
    );
    assert_eq!(*engine.targets(), before);

    for i in 2..=30 {
        let out = engine.tick(i as f64 * 16.0).unwrap();
        assert!(out.params.base_position.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_strokes_wrap_in_fixed_buffer() {
    let config = TesseractConfig {
        max_particles: 16,
        ..TesseractConfig::default()
    };
    let mut engine = Engine::new(config, 0.0, 3);

    for i in 0..5 {
        let shift = (i as f32 * 0.01, 0.0);
        engine.apply_hand_results(&flat(&PRANA, shift), &[RIGHT], i as f64 * 33.0).unwrap();
    }

    let emitter = engine.emitter();
    assert_eq!(emitter.total_emitted(), 30);
    assert_eq!(emitter.capacity(), 16);
    assert_eq!(emitter.cursor(), 30 % 16);
    assert_eq!(engine.take_particle_vertices().map(|v| v.len()), Some(16));
}

#[test]
fn test_malformed_frames_are_dropped() {
    let mut engine = engine();
    engine.apply_hand_results(&flat(&PRANA, (0.0, 0.0)), &[RIGHT], 0.0).unwrap();
    let before = *engine.targets();

    let mut two = flat(&OPEN, (0.0, 0.0));
    two.extend(flat(&OPEN, (0.1, 0.0)));
    assert_eq!(
        engine.apply_hand_results(&two, &[RIGHT], 10.0).unwrap_err(),
        LandmarkError::HandednessMismatch { labels: 1, hands: 2 }
    );

    let mut bad = flat(&OPEN, (0.0, 0.0));
    bad[5] = f32::INFINITY;
    assert_eq!(
        engine.apply_hand_results(&bad, &[RIGHT], 20.0).unwrap_err(),
        LandmarkError::NonFinite { index: 1 }
    );

    assert_eq!(
        engine.apply_hand_results(&flat(&OPEN, (0.0, 0.0)), &[9], 30.0).unwrap_err(),
        LandmarkError::UnknownHandedness(9)
    );

    assert_eq!(*engine.targets(), before);
    assert_eq!(bad.len(), FLOATS_PER_HAND);
}

#[test]
fn test_long_run_keeps_trail_bounded() {
    let mut engine = engine();
    let mut now = 0.0;
    for i in 0..300 {
        now += 16.0;
        if i % 2 == 0 {
            let shift = ((i as f32 * 0.1).sin() * 0.05, 0.0);
            engine.apply_hand_results(&flat(&PRANA, shift), &[RIGHT], now).unwrap();
        }
        let out = engine.tick(now).unwrap();
        assert_eq!(out.trail.slots.len(), 60);
    }

    assert_eq!(engine.trail().len(), 60);
    // Newest first, one tick apart
    let head = engine.trail().get(0).unwrap().timestamp;
    let next = engine.trail().get(1).unwrap().timestamp;
    assert_eq!(head - next, 16.0);
}
