//! Human-readable key names.
//!
//! Keys get a canonical name after their virtual-key constant
//! (`Back`, `OemMinus`, `D3`, ...). The alias table swaps the ones that
//! read badly on screen for the character printed on the keycap.

use std::borrow::Cow;

use crate::events::KeyCode;

/// Keycap text for keys whose canonical name reads badly.
const ALIASES: &[(KeyCode, &str)] = &[
    (KeyCode::OEM_8, "`"),
    (KeyCode::OEM_3, "`"),
    (KeyCode(0x30), "0"),
    (KeyCode(0x31), "1"),
    (KeyCode(0x32), "2"),
    (KeyCode(0x33), "3"),
    (KeyCode(0x34), "4"),
    (KeyCode(0x35), "5"),
    (KeyCode(0x36), "6"),
    (KeyCode(0x37), "7"),
    (KeyCode(0x38), "8"),
    (KeyCode(0x39), "9"),
    (KeyCode::BACK, "Backspace"),
    (KeyCode::OEM_MINUS, "-"),
    (KeyCode::OEM_PLUS, "+"),
    (KeyCode(0xBA), ";"),
    (KeyCode(0xBC), ","),
    (KeyCode(0xBE), "."),
    (KeyCode(0xBF), "/"),
    (KeyCode(0xDB), "["),
    (KeyCode(0xDC), "\\"),
    (KeyCode(0xDD), "]"),
    (KeyCode(0xDE), "'"),
];

/// Keycap alias for `key`, if it has one.
pub fn alias(key: KeyCode) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, text)| *text)
}

/// Canonical name of a virtual key; unknown codes render as their number.
pub fn canonical_name(key: KeyCode) -> Cow<'static, str> {
    let code = key.0;
    let name = match code {
        0x03 => "Cancel",
        0x08 => "Back",
        0x09 => "Tab",
        0x0C => "Clear",
        0x0D => "Return",
        0x10 => "ShiftKey",
        0x11 => "ControlKey",
        0x12 => "Menu",
        0x13 => "Pause",
        0x14 => "CapsLock",
        0x1B => "Escape",
        0x20 => "Space",
        0x21 => "PageUp",
        0x22 => "PageDown",
        0x23 => "End",
        0x24 => "Home",
        0x25 => "Left",
        0x26 => "Up",
        0x27 => "Right",
        0x28 => "Down",
        0x2C => "PrintScreen",
        0x2D => "Insert",
        0x2E => "Delete",
        0x2F => "Help",
        0x30..=0x39 => return Cow::Owned(format!("D{}", code - 0x30)),
        0x41..=0x5A => return Cow::Owned(char::from(code as u8).to_string()),
        0x5B => "LWin",
        0x5C => "RWin",
        0x5D => "Apps",
        0x5F => "Sleep",
        0x60..=0x69 => return Cow::Owned(format!("NumPad{}", code - 0x60)),
        0x6A => "Multiply",
        0x6B => "Add",
        0x6C => "Separator",
        0x6D => "Subtract",
        0x6E => "Decimal",
        0x6F => "Divide",
        0x70..=0x87 => return Cow::Owned(format!("F{}", code - 0x70 + 1)),
        0x90 => "NumLock",
        0x91 => "Scroll",
        0xA0 => "LShiftKey",
        0xA1 => "RShiftKey",
        0xA2 => "LControlKey",
        0xA3 => "RControlKey",
        0xA4 => "LMenu",
        0xA5 => "RMenu",
        0xA6 => "BrowserBack",
        0xA7 => "BrowserForward",
        0xAD => "VolumeMute",
        0xAE => "VolumeDown",
        0xAF => "VolumeUp",
        0xB0 => "MediaNextTrack",
        0xB1 => "MediaPreviousTrack",
        0xB2 => "MediaStop",
        0xB3 => "MediaPlayPause",
        0xBA => "OemSemicolon",
        0xBB => "Oemplus",
        0xBC => "Oemcomma",
        0xBD => "OemMinus",
        0xBE => "OemPeriod",
        0xBF => "OemQuestion",
        0xC0 => "Oemtilde",
        0xDB => "OemOpenBrackets",
        0xDC => "OemPipe",
        0xDD => "OemCloseBrackets",
        0xDE => "OemQuotes",
        0xDF => "Oem8",
        0xE2 => "OemBackslash",
        _ => return Cow::Owned(code.to_string()),
    };
    Cow::Borrowed(name)
}

/// Text shown for `key`: its alias if it has one, else its canonical name.
pub fn display_name(key: KeyCode) -> Cow<'static, str> {
    match alias(key) {
        Some(text) => Cow::Borrowed(text),
        None => canonical_name(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_use_alias() {
        for n in 0..=9u8 {
            let key = KeyCode::digit(n).unwrap();
            assert_eq!(display_name(key), n.to_string());
        }
    }

    #[test]
    fn canonical_names_for_common_keys() {
        assert_eq!(canonical_name(KeyCode(0x33)), "D3");
        assert_eq!(canonical_name(KeyCode::A), "A");
        assert_eq!(canonical_name(KeyCode::F1), "F1");
        assert_eq!(canonical_name(KeyCode::F24), "F24");
        assert_eq!(canonical_name(KeyCode(0x63)), "NumPad3");
        assert_eq!(canonical_name(KeyCode::ESCAPE), "Escape");
    }

    #[test]
    fn unknown_codes_render_as_number() {
        assert_eq!(canonical_name(KeyCode(0xFF)), "255");
    }

    #[test]
    fn letters_have_no_alias() {
        assert!(alias(KeyCode::A).is_none());
        assert_eq!(display_name(KeyCode::Z), "Z");
    }
}
