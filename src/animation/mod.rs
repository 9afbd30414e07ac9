//! Timing model: pure functions mapping elapsed time to opacity and size.
//!
//! Nothing here stores a phase. Callers keep a single timestamp per
//! indicator and recompute grow/fade/invisible from `now - timestamp`
//! every frame.

pub mod fade;

pub use fade::{grow_fade, FadeSample, HoldFade};
