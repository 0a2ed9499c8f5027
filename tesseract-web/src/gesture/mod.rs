//! Gesture module - landmark validation, mudra classification, lock state
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod mudra;
mod lock;

// Index constants are part of the landmark contract with the JS glue
pub use landmarks::*;
pub use mudra::{Mudra, classify, is_extended, TOUCH_RATIO, FOLD_RATIO};
pub use lock::{MudraLock, MudraState, LockOutcome};

#[cfg(test)]
pub(crate) use mudra::test_hands;
