//! Global input events delivered by the platform hooks.
//!
//! These are pure Rust payloads with no FFI dependencies; the platform
//! layer decodes raw hook data into them and applies them synchronously.

use std::fmt;

use bitflags::bitflags;

use super::sink::InputSink;
use crate::model::Point;

/// A physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// First extended ("back") button.
    X1,
    /// Second extended ("forward") button.
    X2,
}

impl MouseButton {
    /// Decode the extended button index carried by X-button messages.
    pub fn from_xbutton(index: u16) -> Option<Self> {
        match index {
            1 => Some(MouseButton::X1),
            2 => Some(MouseButton::X2),
            _ => None,
        }
    }
}

/// Wheel rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Positive deltas roll away from the user (up); zero carries no direction.
    pub fn from_wheel_delta(delta: i16) -> Option<Self> {
        match delta {
            d if d > 0 => Some(ScrollDirection::Up),
            d if d < 0 => Some(ScrollDirection::Down),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier keys held while another key went down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl fmt::Display for Modifiers {
    /// Formats as `Shift, Control, Alt`, listing only the held keys.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::CONTROL, "Control"),
            (Modifiers::ALT, "Alt"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A Windows virtual-key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const BACK: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const RETURN: KeyCode = KeyCode(0x0D);
    pub const SHIFT: KeyCode = KeyCode(0x10);
    pub const CONTROL: KeyCode = KeyCode(0x11);
    pub const MENU: KeyCode = KeyCode(0x12);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const D0: KeyCode = KeyCode(0x30);
    pub const D9: KeyCode = KeyCode(0x39);
    pub const A: KeyCode = KeyCode(0x41);
    pub const Z: KeyCode = KeyCode(0x5A);
    pub const NUMPAD0: KeyCode = KeyCode(0x60);
    pub const NUMPAD9: KeyCode = KeyCode(0x69);
    pub const F1: KeyCode = KeyCode(0x70);
    pub const F24: KeyCode = KeyCode(0x87);
    pub const LSHIFT: KeyCode = KeyCode(0xA0);
    pub const RSHIFT: KeyCode = KeyCode(0xA1);
    pub const LCONTROL: KeyCode = KeyCode(0xA2);
    pub const RCONTROL: KeyCode = KeyCode(0xA3);
    pub const LMENU: KeyCode = KeyCode(0xA4);
    pub const RMENU: KeyCode = KeyCode(0xA5);
    pub const OEM_PLUS: KeyCode = KeyCode(0xBB);
    pub const OEM_MINUS: KeyCode = KeyCode(0xBD);
    pub const OEM_3: KeyCode = KeyCode(0xC0);
    pub const OEM_8: KeyCode = KeyCode(0xDF);

    /// Digit key `0`-`9` on the main row.
    pub fn digit(n: u8) -> Option<KeyCode> {
        (n <= 9).then(|| KeyCode(Self::D0.0 + n as u16))
    }

    /// Letter key `A`-`Z` (case-insensitive).
    pub fn letter(c: char) -> Option<KeyCode> {
        let c = c.to_ascii_uppercase();
        c.is_ascii_uppercase().then(|| KeyCode(c as u16))
    }

    /// True for Shift, Control and Alt in any of their left/right/generic forms.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::SHIFT
                | KeyCode::CONTROL
                | KeyCode::MENU
                | KeyCode::LSHIFT
                | KeyCode::RSHIFT
                | KeyCode::LCONTROL
                | KeyCode::RCONTROL
                | KeyCode::LMENU
                | KeyCode::RMENU
        )
    }

    /// The flag this key sets while held; empty for ordinary keys.
    pub fn modifier_flag(self) -> Modifiers {
        match self {
            KeyCode::SHIFT | KeyCode::LSHIFT | KeyCode::RSHIFT => Modifiers::SHIFT,
            KeyCode::CONTROL | KeyCode::LCONTROL | KeyCode::RCONTROL => Modifiers::CONTROL,
            KeyCode::MENU | KeyCode::LMENU | KeyCode::RMENU => Modifiers::ALT,
            _ => Modifiers::empty(),
        }
    }
}

/// Modifiers that qualify a press of `key`, given the keys `held` when it
/// went down.
///
/// A held modifier autorepeats with its own flag already set, so that flag
/// is removed. AltGr arrives as Right Alt with a synthetic Control held, so
/// Right Alt drops Control as well.
pub fn key_down_modifiers(key: KeyCode, held: Modifiers) -> Modifiers {
    let mut own = key.modifier_flag();
    if key == KeyCode::RMENU {
        own |= Modifiers::CONTROL;
    }
    held.difference(own)
}

/// True for the Control+Alt+Escape chord that ends the process.
pub fn is_exit_chord(key: KeyCode, modifiers: Modifiers) -> bool {
    key == KeyCode::ESCAPE && modifiers.contains(Modifiers::CONTROL | Modifiers::ALT)
}

/// One global input event, in desktop pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ButtonDown {
        button: MouseButton,
        position: Point,
    },
    Move {
        position: Point,
    },
    ButtonUp,
    Wheel {
        direction: ScrollDirection,
        position: Point,
    },
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Deliver this event to `sink` immediately.
    pub fn apply(&self, sink: &dyn InputSink) {
        match *self {
            InputEvent::ButtonDown { button, position } => sink.on_button_down(button, position),
            InputEvent::Move { position } => sink.on_move(position),
            InputEvent::ButtonUp => sink.on_button_up(),
            InputEvent::Wheel {
                direction,
                position,
            } => sink.on_wheel(direction, position),
            InputEvent::KeyDown { key, modifiers } => sink.on_key_down(key, modifiers),
        }
    }
}
