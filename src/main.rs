//! Highlight Input: on-screen mouse click and keystroke indicators.

#[cfg(target_os = "windows")]
mod windows_main;

use highlight_input::{OverlayConfig, StartupError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("highlight_input=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting highlight-input");

    if let Err(e) = run(OverlayConfig::builtin()) {
        tracing::error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

#[cfg(target_os = "windows")]
fn run(config: OverlayConfig) -> Result<(), StartupError> {
    windows_main::run(config)
}

#[cfg(not(target_os = "windows"))]
fn run(_config: OverlayConfig) -> Result<(), StartupError> {
    Err(StartupError::UnsupportedPlatform(std::env::consts::OS))
}
