//! Windows-specific implementation using Win32 API and Direct2D.
//!
//! - Input handling (global low-level mouse and keyboard hooks)
//! - UI components (layered window overlays)
//! - App plumbing (the render thread)

pub mod app;
pub mod input;
pub mod ui;
