//! Engine storage for the JS side
//!
//! The engine is created by `init` and lives here until the page goes
//! away. Until then every entry point is a no-op.

use std::cell::RefCell;
use crate::engine::{Engine, FrameOutput};

/// Engine plus the last frame it produced, for the buffer getters
pub(crate) struct Runtime {
    pub engine: Engine,
    pub frame: Option<FrameOutput>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

pub(crate) fn install(engine: Engine) {
    RUNTIME.with(|cell| {
        *cell.borrow_mut() = Some(Runtime { engine, frame: None });
    });
}

pub(crate) fn is_installed() -> bool {
    RUNTIME.with(|cell| cell.borrow().is_some())
}

/// Run `f` against the runtime, or return `None` before `init`
pub(crate) fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    RUNTIME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Same as `with_runtime` for callers that only need the engine
pub(crate) fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
    with_runtime(|rt| f(&mut rt.engine))
}

/// Milliseconds on the clock shared by ticks and inference frames
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}
