//! Layered, click-through, topmost overlay windows.

use std::sync::Once;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetDesktopWindow,
    GetWindowRect, PeekMessageW, RegisterClassW, ShowWindow, TranslateMessage, MSG, PM_REMOVE,
    SW_SHOWNOACTIVATE, WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW,
    WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use crate::error::{StartupError, StartupResult};
use crate::model::WindowRect;

const CLASS_NAME: PCWSTR = w!("HighlightInputOverlay");

static REGISTER_CLASS: Once = Once::new();

extern "system" fn overlay_wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

fn register_class() -> StartupResult<()> {
    let instance = unsafe { GetModuleHandleW(None) }
        .map_err(|e| StartupError::Surface(format!("module handle: {e}")))?;

    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wndproc),
            hInstance: instance.into(),
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
    Ok(())
}

/// Bounds of the primary desktop.
pub fn desktop_bounds() -> StartupResult<WindowRect> {
    unsafe {
        let desktop = GetDesktopWindow();
        if desktop.is_invalid() {
            return Err(StartupError::DesktopBounds(
                "unable to get the desktop window".to_string(),
            ));
        }

        let mut rect = RECT::default();
        GetWindowRect(desktop, &mut rect).map_err(|e| StartupError::DesktopBounds(e.to_string()))?;

        Ok(WindowRect::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }
}

/// Drain pending messages for windows owned by the calling thread.
pub fn pump_messages() {
    unsafe {
        let mut msg = MSG::default();
        while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// A transparent overlay window. Destroyed on drop.
///
/// The window never takes focus and passes clicks through to whatever
/// is underneath. Its content is supplied with `UpdateLayeredWindow`.
pub struct LayeredWindow {
    hwnd: HWND,
    rect: WindowRect,
}

impl LayeredWindow {
    pub fn create(title: PCWSTR, rect: WindowRect) -> StartupResult<Self> {
        register_class()?;

        let ex_style =
            WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW;

        unsafe {
            let instance = GetModuleHandleW(None)
                .map_err(|e| StartupError::Surface(format!("module handle: {e}")))?;

            let hwnd = CreateWindowExW(
                ex_style,
                CLASS_NAME,
                title,
                WS_POPUP,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                None,
                None,
                Some(instance.into()),
                None,
            )
            .map_err(|e| StartupError::Surface(e.to_string()))?;

            let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
            Ok(Self { hwnd, rect })
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    /// Record a new position and size; applied on the next present.
    pub fn set_rect(&mut self, rect: WindowRect) {
        self.rect = rect;
    }
}

impl Drop for LayeredWindow {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
    }
}
