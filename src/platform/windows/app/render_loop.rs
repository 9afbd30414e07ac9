//! The render thread.
//!
//! Owns both overlay windows and the Direct2D objects. Every frame it
//! samples the indicators at one `now`, paints, and pushes the result with
//! `UpdateLayeredWindow`. A window that was invisible last frame and is
//! still invisible is left untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use windows::core::w;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};

use crate::error::{StartupError, StartupResult};
use crate::indicator::Indicators;
use crate::model::{OverlayConfig, WindowRect};
use crate::platform::windows::ui::overlay::{desktop_bounds, pump_messages, Graphics, LayeredWindow};
use crate::render::{paint_label, FrameTicker};

/// Handle to the running render thread.
pub struct RenderThread {
    handle: JoinHandle<()>,
    shutdown: Arc<AtomicBool>,
}

impl RenderThread {
    /// Ask the thread to finish its current frame and wait for it.
    /// The overlay windows are destroyed on the render thread as it exits.
    pub fn stop(self) {
        self.shutdown.store(true, Ordering::Release);
        if self.handle.join().is_err() {
            tracing::error!("Render thread panicked");
        }
    }
}

/// Start the render thread and wait until its windows exist.
pub fn spawn_render_thread(
    indicators: Arc<Indicators>,
    config: OverlayConfig,
) -> StartupResult<RenderThread> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let (ready_tx, ready_rx) = mpsc::channel::<StartupResult<()>>();

    let flag = Arc::clone(&shutdown);
    let handle = thread::Builder::new()
        .name("overlay-render".to_string())
        .spawn(move || {
            let _com = match ComApartment::enter() {
                Ok(com) => com,
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };
            let mut overlay = match Overlay::create(&config) {
                Ok(overlay) => overlay,
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));
            overlay.run(&indicators, &config, &flag);
        })
        .map_err(|e| StartupError::RenderThread(e.to_string()))?;

    let thread = RenderThread { handle, shutdown };
    match ready_rx.recv() {
        Ok(Ok(())) => Ok(thread),
        Ok(Err(e)) => {
            thread.stop();
            Err(e)
        }
        Err(_) => {
            thread.stop();
            Err(StartupError::RenderThread(
                "render thread exited during startup".to_string(),
            ))
        }
    }
}

/// COM apartment for the calling thread; left on drop.
struct ComApartment;

impl ComApartment {
    fn enter() -> StartupResult<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| StartupError::Graphics(format!("COM initialisation: {e}")))?;
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

struct Overlay {
    graphics: Graphics,
    mouse_window: LayeredWindow,
    keyboard_window: LayeredWindow,
    extent: i32,
}

impl Overlay {
    fn create(config: &OverlayConfig) -> StartupResult<Self> {
        let graphics = Graphics::new(&config.keyboard)?;

        let extent = config.mouse.window_extent();
        let mouse_window = LayeredWindow::create(
            w!("Highlight Input Mouse"),
            WindowRect::new(0, 0, extent, extent),
        )?;

        let desktop = desktop_bounds()?;
        let keyboard_window = LayeredWindow::create(
            w!("Highlight Input Keyboard"),
            config.keyboard.window_rect(desktop),
        )?;

        tracing::info!(
            mouse_extent = extent,
            keyboard = ?keyboard_window.rect(),
            "Overlay windows created"
        );
        let palette = &config.mouse.palette;
        tracing::debug!(
            left = %palette.left.to_hex(),
            right = %palette.right.to_hex(),
            middle = %palette.middle.to_hex(),
            "Click palette"
        );

        Ok(Self {
            graphics,
            mouse_window,
            keyboard_window,
            extent,
        })
    }

    fn run(&mut self, indicators: &Indicators, config: &OverlayConfig, shutdown: &AtomicBool) {
        let mut ticker = FrameTicker::new(config.frame_interval, Instant::now());
        let mut last_desktop_check = Instant::now();
        // Start as "visible" so the first frame clears both windows.
        let mut mouse_was_visible = true;
        let mut label_was_visible = true;
        let mut failures = 0u32;

        tracing::debug!(interval = ?ticker.interval(), "Render loop started");

        while !shutdown.load(Ordering::Acquire) {
            pump_messages();
            let now = ticker.wait();

            if now.saturating_duration_since(last_desktop_check) >= config.desktop_recheck {
                last_desktop_check = now;
                self.reanchor_keyboard_window(config);
            }

            let mouse = indicators.mouse.sample(now);
            let mouse_visible = mouse.is_visible();
            if mouse_visible || mouse_was_visible {
                let extent = self.extent as f32;
                let result = self
                    .graphics
                    .present(&mut self.mouse_window, |canvas| mouse.paint(canvas, extent));
                report(result, "mouse", &mut failures);
            }
            mouse_was_visible = mouse_visible;

            let label_visible = indicators.keyboard.is_visible(now);
            if label_visible || label_was_visible {
                let result = self.graphics.present(&mut self.keyboard_window, |canvas| {
                    let area = canvas.area();
                    let label = indicators.keyboard.sample(now, &*canvas, area);
                    paint_label(label.as_ref(), canvas);
                });
                report(result, "keyboard", &mut failures);
            }
            label_was_visible = label_visible;
        }

        tracing::debug!("Render loop stopped");
    }

    /// Keep the keyboard window anchored when the desktop size changes.
    fn reanchor_keyboard_window(&mut self, config: &OverlayConfig) {
        match desktop_bounds() {
            Ok(desktop) => {
                let rect = config.keyboard.window_rect(desktop);
                if rect != self.keyboard_window.rect() {
                    tracing::info!(?desktop, "Desktop bounds changed, moving keyboard window");
                    self.keyboard_window.set_rect(rect);
                }
            }
            Err(e) => tracing::debug!(error = %e, "Desktop bounds recheck failed"),
        }
    }
}

/// Log the first frame failure at warn and the rest at debug.
fn report(result: windows::core::Result<()>, window: &str, failures: &mut u32) {
    if let Err(e) = result {
        if *failures == 0 {
            tracing::warn!(window, error = %e, "Failed to present overlay frame");
        } else {
            tracing::debug!(window, error = %e, "Failed to present overlay frame");
        }
        *failures = failures.saturating_add(1);
    }
}
