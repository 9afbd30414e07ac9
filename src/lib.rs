//! Pure core of the input highlighter. Keep this file free of Win32 FFI so
//! tests can run as normal integration tests on any platform.

pub mod animation;
pub mod error;
pub mod events;
pub mod indicator;
pub mod model;
pub mod platform;
pub mod render;

// Re-export the types the entry point wires together
pub use error::StartupError;
pub use events::{InputEvent, InputSink};
pub use indicator::{Indicators, KeyboardIndicator, MouseIndicator};
pub use model::OverlayConfig;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Linear fraction of `elapsed` through `span`, clamped to [0, 1].
///
/// A zero-length span counts as already complete.
pub fn progress(elapsed: std::time::Duration, span: std::time::Duration) -> f64 {
    if span.is_zero() {
        return 1.0;
    }
    clamp(elapsed.as_secs_f64() / span.as_secs_f64(), 0.0, 1.0)
}
