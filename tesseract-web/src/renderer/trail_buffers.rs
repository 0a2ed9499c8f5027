//! Trail rendering - projects every history slot into point and line buffers
//!
//! Layout is fixed so the renderer can keep one draw range per slot:
//! slot `t` owns points `[t*16, t*16+16)` and line vertices
//! `[t*64, t*64+64)`. Culled or empty slots are zero-filled and flagged
//! invisible rather than removed.

use crate::geometry::{HypercubeTopology, RotationProjector, TrailHistory, EDGE_COUNT, VERTEX_COUNT};
use crate::params::Rgb;
use super::vertex::{LineVertex, PointVertex};

/// Colors for trail elements
mod colors {
    use crate::params::Rgb;

    /// Ghost vertices and edges
    pub const SILVER: u32 = 0xC0C0C0;

    pub fn silver() -> Rgb {
        Rgb::from_hex(SILVER)
    }
}

/// Newest slot is drawn brighter and bigger
const HEAD_BRIGHTNESS: f32 = 1.5;
const HEAD_POINT_SIZE: f32 = 8.0;
const HEAD_LINE_GAIN: f32 = 2.0;
const GHOST_LINE_GAIN: f32 = 1.5;
/// Lines dimmer than this are hidden
const LINE_CUTOFF: f32 = 0.01;

pub const LINE_VERTICES_PER_SLOT: usize = EDGE_COUNT * 2;

/// Per-slot draw state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotStyle {
    pub points_visible: bool,
    pub lines_visible: bool,
    pub opacity: f32,
    pub line_opacity: f32,
}

/// Everything the renderer needs to draw the trail this frame
#[derive(Debug, Clone, Default)]
pub struct TrailFrame {
    pub points: Vec<PointVertex>,
    pub lines: Vec<LineVertex>,
    pub slots: Vec<SlotStyle>,
}

impl TrailFrame {
    /// One line opacity per slot, 0 for hidden slots
    pub fn line_opacities(&self) -> Vec<f32> {
        self.slots
            .iter()
            .map(|s| if s.lines_visible { s.line_opacity } else { 0.0 })
            .collect()
    }

    pub fn visible_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.points_visible).count()
    }
}

fn slot_style(index: usize, opacity: f32) -> SlotStyle {
    let gain = if index == 0 { HEAD_LINE_GAIN } else { GHOST_LINE_GAIN };
    let line_opacity = (opacity * gain).min(1.0);
    SlotStyle {
        points_visible: true,
        lines_visible: line_opacity > LINE_CUTOFF,
        opacity,
        line_opacity,
    }
}

fn point_style(index: usize, opacity: f32) -> (Rgb, f32) {
    let silver = colors::silver();
    if index == 0 {
        (silver.scaled(opacity * HEAD_BRIGHTNESS), HEAD_POINT_SIZE)
    } else {
        (silver.scaled(opacity), 1.0 + 2.0 * opacity)
    }
}

/// Project every trail slot at `now` (ms) under `global_opacity`
pub fn build_trail_frame(
    trail: &TrailHistory,
    topology: &HypercubeTopology,
    projector: &RotationProjector,
    now: f64,
    global_opacity: f32,
) -> TrailFrame {
    let slots = trail.capacity();
    let mut frame = TrailFrame {
        points: vec![PointVertex::default(); slots * VERTEX_COUNT],
        lines: vec![LineVertex::default(); slots * LINE_VERTICES_PER_SLOT],
        slots: vec![SlotStyle::default(); slots],
    };

    for (t, state) in trail.iter().enumerate().take(slots) {
        let Some(opacity) = trail.slot_opacity(t, now, global_opacity) else {
            continue;
        };

        let projected = projector.project(topology.vertices(), state, global_opacity);
        let (color, size) = point_style(t, opacity);

        let points = &mut frame.points[t * VERTEX_COUNT..(t + 1) * VERTEX_COUNT];
        for (vertex, p) in points.iter_mut().zip(projected.iter()) {
            *vertex = PointVertex {
                position: (*p).into(),
                color: color.to_array(),
                size,
            };
        }

        let lines = &mut frame.lines[t * LINE_VERTICES_PER_SLOT..(t + 1) * LINE_VERTICES_PER_SLOT];
        for (pair, &(a, b)) in lines.chunks_exact_mut(2).zip(topology.edges()) {
            pair[0] = LineVertex { position: projected[a].into() };
            pair[1] = LineVertex { position: projected[b].into() };
        }

        frame.slots[t] = slot_style(t, opacity);
    }

    frame
}
