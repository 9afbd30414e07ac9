//! Input events and the sink they are delivered to.
//!
//! ```text
//! ┌──────────────────┐   decode    ┌────────────┐  apply()  ┌──────────────┐
//! │ WH_MOUSE_LL /    │ ──────────▶ │ InputEvent │ ────────▶ │  InputSink   │
//! │ WH_KEYBOARD_LL   │             └────────────┘           │ (Indicators) │
//! └──────────────────┘                                      └──────┬───────┘
//!                                                                  │ sample(now)
//!                                                                  ▼
//!                                                           render thread
//! ```
//!
//! There is no queue between the hook and the indicators: every event is
//! applied under the indicator's lock before the hook returns.
//!
//! # Module Structure
//!
//! - [`types`]: Event payloads (`InputEvent`, buttons, keys, modifiers)
//! - [`sink`]: The `InputSink` trait implemented by the indicators

pub mod sink;
pub mod types;

pub use sink::InputSink;
pub use types::{
    is_exit_chord, key_down_modifiers, InputEvent, KeyCode, Modifiers, MouseButton,
    ScrollDirection,
};
