//! Debug overlay - gesture status line and frame metrics
//!
//! The status line is what the on-screen HUD shows; the metrics are fed
//! from JS once per animation frame and smoothed for display.

use crate::engine::LeftAction;
use crate::gesture::Mudra;

/// Display smoothing for fps and frame time
const METRIC_EMA: f32 = 0.1;

/// Gesture state as shown in the HUD
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusLine {
    pub mudra: Mudra,
    pub locked: bool,
    pub left: LeftAction,
    /// Tracking failed to start; hands are ignored
    pub visual_only: bool,
}

impl StatusLine {
    /// `R: <MUDRA>[ 🔒] | L: <ACTION>`
    pub fn text(&self) -> String {
        let lock = if self.locked { " 🔒" } else { "" };
        let base = format!("R: {}{} | L: {}", self.mudra.as_str(), lock, self.left.as_str());
        if self.visual_only {
            format!("{} (visual only)", base)
        } else {
            base
        }
    }
}

/// Smoothed frame timing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMetrics {
    fps: f32,
    frame_time_ms: f32,
}

impl FrameMetrics {
    /// Fold in one frame's timing; returns false if the sample was dropped
    pub fn record(&mut self, fps: f32, frame_time_ms: f32) -> bool {
        // Tab backgrounded or first frame
        if !(1.0..=200.0).contains(&frame_time_ms) || !fps.is_finite() {
            return false;
        }
        self.fps += (fps - self.fps) * METRIC_EMA;
        self.frame_time_ms += (frame_time_ms - self.frame_time_ms) * METRIC_EMA;
        true
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }

    pub fn overlay_text(&self, status: &StatusLine) -> String {
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n{}",
            self.fps,
            self.frame_time_ms,
            status.text(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let mut status = StatusLine::default();
        assert_eq!(status.text(), "R: NEUTRAL | L: NONE");

        status.mudra = Mudra::Prana;
        status.locked = true;
        status.left = LeftAction::Trail;
        assert_eq!(status.text(), "R: PRANA 🔒 | L: TRAIL");
    }

    #[test]
    fn test_metrics_ignore_outliers() {
        let mut metrics = FrameMetrics::default();
        assert!(!metrics.record(60.0, 0.5));
        assert!(!metrics.record(2.0, 500.0));
        assert_eq!(metrics.fps(), 0.0);

        assert!(metrics.record(60.0, 16.0));
        assert!((metrics.fps() - 6.0).abs() < 1e-5);
        assert!((metrics.frame_time_ms() - 1.6).abs() < 1e-5);
    }

    #[test]
    fn test_overlay_includes_status() {
        let text = FrameMetrics::default().overlay_text(&StatusLine::default());
        assert!(text.starts_with("FPS: 0 | Frame: 0.0ms"));
        assert!(text.ends_with("R: NEUTRAL | L: NONE"));
    }
}
