//! Global low-level mouse and keyboard hooks for Windows.
//!
//! Hook callbacks run on the thread that installed them, inside its
//! message loop. Each raw message is decoded into an `InputEvent` and applied
//! to the shared sink before the callback returns.

use std::sync::atomic::{AtomicIsize, Ordering};
use std::sync::{Arc, OnceLock};

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, VK_CONTROL, VK_MENU, VK_SHIFT};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, PostQuitMessage, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK,
    KBDLLHOOKSTRUCT, MSLLHOOKSTRUCT, WH_KEYBOARD_LL, WH_MOUSE_LL, WM_KEYDOWN, WM_LBUTTONDOWN,
    WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEMOVE, WM_MOUSEWHEEL, WM_RBUTTONDOWN,
    WM_RBUTTONUP, WM_SYSKEYDOWN, WM_XBUTTONDOWN, WM_XBUTTONUP,
};

use crate::error::{StartupError, StartupResult};
use crate::events::{
    is_exit_chord, key_down_modifiers, InputEvent, InputSink, KeyCode, Modifiers, MouseButton,
    ScrollDirection,
};
use crate::model::Point;

/// Global mouse hook handle (must be static for the hook callback).
pub static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Global keyboard hook handle.
pub static KEYBOARD_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Receiver of decoded events. Set once, before the hooks are installed.
static SINK: OnceLock<Arc<dyn InputSink>> = OnceLock::new();

/// Decode a low-level mouse message.
pub fn decode_mouse(msg: u32, info: &MSLLHOOKSTRUCT) -> Option<InputEvent> {
    let position = Point::new(info.pt.x as f32, info.pt.y as f32);
    let high_word = (info.mouseData >> 16) as u16;

    let pressed = |button| Some(InputEvent::ButtonDown { button, position });
    match msg {
        WM_LBUTTONDOWN => pressed(MouseButton::Left),
        WM_RBUTTONDOWN => pressed(MouseButton::Right),
        WM_MBUTTONDOWN => pressed(MouseButton::Middle),
        WM_XBUTTONDOWN => MouseButton::from_xbutton(high_word).and_then(pressed),
        WM_LBUTTONUP | WM_RBUTTONUP | WM_MBUTTONUP | WM_XBUTTONUP => Some(InputEvent::ButtonUp),
        WM_MOUSEMOVE => Some(InputEvent::Move { position }),
        WM_MOUSEWHEEL => ScrollDirection::from_wheel_delta(high_word as i16)
            .map(|direction| InputEvent::Wheel {
                direction,
                position,
            }),
        _ => None,
    }
}

/// Modifier keys currently held.
///
/// Low-level hooks run before the key state is updated, so the first press
/// of Shift reports no modifiers, but its autorepeats already report SHIFT.
/// Callers pass the result through `key_down_modifiers`.
fn current_modifiers() -> Modifiers {
    let held = |vk: u16| unsafe { (GetAsyncKeyState(vk as i32) as u16) & 0x8000 != 0 };
    let mut modifiers = Modifiers::empty();
    if held(VK_SHIFT.0) {
        modifiers |= Modifiers::SHIFT;
    }
    if held(VK_CONTROL.0) {
        modifiers |= Modifiers::CONTROL;
    }
    if held(VK_MENU.0) {
        modifiers |= Modifiers::ALT;
    }
    modifiers
}

/// Low-level mouse hook procedure.
pub extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode >= 0 {
            let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
            if let (Some(event), Some(sink)) = (decode_mouse(wparam.0 as u32, info), SINK.get()) {
                event.apply(sink.as_ref());
            }
        }

        let hook = MOUSE_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}

/// Low-level keyboard hook procedure.
///
/// Control+Alt+Escape is swallowed and ends the message loop.
pub extern "system" fn keyboard_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        let msg = wparam.0 as u32;
        if ncode >= 0 && (msg == WM_KEYDOWN || msg == WM_SYSKEYDOWN) {
            let info = &*(lparam.0 as *const KBDLLHOOKSTRUCT);
            let key = KeyCode(info.vkCode as u16);
            let modifiers = key_down_modifiers(key, current_modifiers());

            if is_exit_chord(key, modifiers) {
                tracing::info!("Exit chord pressed");
                PostQuitMessage(0);
                return LRESULT(1);
            }

            if let Some(sink) = SINK.get() {
                InputEvent::KeyDown { key, modifiers }.apply(sink.as_ref());
            }
        }

        let hook = KEYBOARD_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}

/// Installed hooks; dropping this removes them.
pub struct HookGuard {
    _private: (),
}

/// Install both hooks on the calling thread, which must then run a message
/// loop. Can only be done once per process.
pub fn install_hooks(sink: Arc<dyn InputSink>) -> StartupResult<HookGuard> {
    SINK.set(sink)
        .map_err(|_| StartupError::Hook("hooks already installed".to_string()))?;

    unsafe {
        let mouse = SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0)
            .map_err(|e| StartupError::Hook(format!("mouse: {e}")))?;
        MOUSE_HOOK.store(mouse.0 as isize, Ordering::SeqCst);

        // From here on the guard owns the mouse hook, so a keyboard failure
        // still unhooks it.
        let guard = HookGuard { _private: () };

        let keyboard = SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), None, 0)
            .map_err(|e| StartupError::Hook(format!("keyboard: {e}")))?;
        KEYBOARD_HOOK.store(keyboard.0 as isize, Ordering::SeqCst);

        tracing::info!("Global mouse and keyboard hooks installed");
        Ok(guard)
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        for slot in [&MOUSE_HOOK, &KEYBOARD_HOOK] {
            let handle = slot.swap(0, Ordering::SeqCst);
            if handle != 0 {
                unsafe {
                    let _ = UnhookWindowsHookEx(HHOOK(handle as *mut _));
                }
            }
        }
        tracing::debug!("Input hooks removed");
    }
}
