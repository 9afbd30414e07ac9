//! Input handling for Windows (global mouse and keyboard hooks).

pub mod hooks;

pub use hooks::{
    decode_mouse, install_hooks, keyboard_hook_proc, mouse_hook_proc, HookGuard, KEYBOARD_HOOK,
    MOUSE_HOOK,
};
