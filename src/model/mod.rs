//! Application domain model.
//!
//! Pure data (no FFI): configuration constants, the static overlay
//! configuration, colours and geometry shared by the indicators and the
//! render surface.

pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;

pub use color::Color;
pub use config::{ButtonPalette, KeyboardConfig, MouseConfig, OverlayConfig};
pub use constants::*;
pub use geometry::{Point, Rect, Size, WindowRect};
