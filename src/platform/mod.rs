//! Platform-specific implementations.
//!
//! Only Windows has a backend: global input hooks and layered overlay
//! windows. Everything above this module is platform independent.

#[cfg(target_os = "windows")]
pub mod windows;
