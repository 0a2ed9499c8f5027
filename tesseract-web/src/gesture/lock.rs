//! Hysteresis lock for the right-hand mudra
//!
//! A freshly detected mudra is held for a fixed window regardless of what
//! the classifier says, so one noisy frame cannot cancel a deliberate
//! gesture. Once the window has elapsed, a neutral reading clears the
//! state immediately.

use log::info;
use super::mudra::Mudra;

/// Result of feeding one classifier reading through the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub effective: Mudra,
    pub locked: bool,
}

/// Current mudra and, while held, the time the hold ends (ms)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MudraState {
    pub current: Mudra,
    pub locked_until: Option<f64>,
}

pub struct MudraLock {
    state: MudraState,
    window_ms: f64,
}

impl MudraLock {
    pub fn new(window_ms: f64) -> Self {
        Self {
            state: MudraState::default(),
            window_ms,
        }
    }

    pub fn state(&self) -> MudraState {
        self.state
    }

    pub fn current(&self) -> Mudra {
        self.state.current
    }

    pub fn locked_until(&self) -> Option<f64> {
        self.state.locked_until
    }

    pub fn is_locked(&self, now: f64) -> bool {
        matches!(self.state.locked_until, Some(until) if now < until)
    }

    /// Feed the raw right-hand reading for this inference frame
    pub fn update(&mut self, detected: Mudra, now: f64) -> LockOutcome {
        if self.is_locked(now) {
            return LockOutcome {
                effective: self.state.current,
                locked: true,
            };
        }

        if !detected.is_neutral() && detected != self.state.current {
            let until = now + self.window_ms;
            info!("🔒 Locking {} for {:.0}ms", detected.as_str(), self.window_ms);
            self.state = MudraState {
                current: detected,
                locked_until: Some(until),
            };
            return LockOutcome {
                effective: detected,
                locked: true,
            };
        }

        if detected.is_neutral() && !self.state.current.is_neutral() {
            self.state.current = Mudra::Neutral;
        }

        LockOutcome {
            effective: self.state.current,
            locked: false,
        }
    }

    /// Drop any hold and return to neutral (visual-only mode)
    pub fn reset(&mut self) {
        self.state = MudraState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_holds_through_neutral_readings() {
        let mut lock = MudraLock::new(3000.0);
        let first = lock.update(Mudra::Prana, 0.0);
        assert_eq!(first, LockOutcome { effective: Mudra::Prana, locked: true });

        let during = lock.update(Mudra::Neutral, 1000.0);
        assert_eq!(during.effective, Mudra::Prana);
        assert!(during.locked);

        let after = lock.update(Mudra::Neutral, 3001.0);
        assert_eq!(after, LockOutcome { effective: Mudra::Neutral, locked: false });
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut lock = MudraLock::new(3000.0);
        lock.update(Mudra::Prana, 0.0);
        assert!(lock.is_locked(2999.9));
        assert!(!lock.is_locked(3000.0));
    }

    #[test]
    fn test_holding_same_mudra_after_expiry_does_not_relock() {
        let mut lock = MudraLock::new(3000.0);
        lock.update(Mudra::Prana, 0.0);
        let held = lock.update(Mudra::Prana, 3500.0);
        assert_eq!(held, LockOutcome { effective: Mudra::Prana, locked: false });
        assert_eq!(lock.locked_until(), Some(3000.0));

        // Unlocked, so a single neutral frame ends it
        assert_eq!(lock.update(Mudra::Neutral, 3516.0).effective, Mudra::Neutral);
    }

    #[test]
    fn test_neutral_stays_neutral() {
        let mut lock = MudraLock::new(3000.0);
        let out = lock.update(Mudra::Neutral, 10.0);
        assert_eq!(out, LockOutcome { effective: Mudra::Neutral, locked: false });
        assert_eq!(lock.locked_until(), None);
    }

    #[test]
    fn test_reset_clears_hold() {
        let mut lock = MudraLock::new(3000.0);
        lock.update(Mudra::Prana, 0.0);
        lock.reset();
        assert_eq!(lock.current(), Mudra::Neutral);
        assert!(!lock.is_locked(1.0));
    }
}
