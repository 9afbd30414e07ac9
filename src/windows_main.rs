//! Windows entry point.
//!
//! The main thread installs the low-level hooks and runs the message loop
//! that delivers them; the render thread owns the overlay windows. The loop
//! ends when the exit chord posts `WM_QUIT`.

use std::sync::Arc;

use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{DispatchMessageW, GetMessageW, TranslateMessage, MSG};

use highlight_input::error::StartupResult;
use highlight_input::platform::windows::app::spawn_render_thread;
use highlight_input::platform::windows::input::install_hooks;
use highlight_input::{Indicators, InputSink, OverlayConfig};

pub fn run(config: OverlayConfig) -> StartupResult<()> {
    // Work in physical pixels so hook coordinates match window placement
    if let Err(e) = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }
    {
        tracing::warn!(error = %e, "Unable to enable per-monitor DPI awareness");
    }

    let indicators = Arc::new(Indicators::new(&config));
    let render = spawn_render_thread(Arc::clone(&indicators), config)?;

    let sink: Arc<dyn InputSink> = indicators;
    let hooks = match install_hooks(sink) {
        Ok(hooks) => hooks,
        Err(e) => {
            render.stop();
            return Err(e);
        }
    };

    tracing::info!("Running; press Ctrl+Alt+Esc to quit");

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    drop(hooks);
    render.stop();
    tracing::info!("Shut down");
    Ok(())
}
