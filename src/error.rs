//! Startup error taxonomy.
//!
//! Only startup can fail: once the windows and hooks exist, the core is pure
//! arithmetic over timestamps and a bad frame is simply skipped.

use thiserror::Error;

/// Fatal errors raised before the overlay becomes visible.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Unable to query desktop bounds: {0}")]
    DesktopBounds(String),

    #[error("Unable to create render surface: {0}")]
    Surface(String),

    #[error("Unable to install input hook: {0}")]
    Hook(String),

    #[error("Graphics initialisation failed: {0}")]
    Graphics(String),

    #[error("Render thread failed: {0}")]
    RenderThread(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(&'static str),
}

/// Result type for startup operations
pub type StartupResult<T> = Result<T, StartupError>;
