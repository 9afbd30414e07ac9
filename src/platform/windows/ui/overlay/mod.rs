//! Overlay windows and their Direct2D renderer.

pub mod renderer;
pub mod window;

pub use renderer::{D2dCanvas, Graphics};
pub use window::{desktop_bounds, pump_messages, LayeredWindow};
