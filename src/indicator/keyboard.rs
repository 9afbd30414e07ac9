//! Key label state.

use std::time::Instant;

use parking_lot::Mutex;

use super::keys::display_name;
use crate::animation::HoldFade;
use crate::events::{KeyCode, Modifiers};
use crate::model::{KeyboardConfig, Point, Rect, Size};
use crate::render::{LabelBorder, LabelSample, TextMeasure};

#[derive(Debug, Clone, Default)]
struct LabelState {
    label: String,
    /// `None` until the first qualifying key press.
    shown_at: Option<Instant>,
}

/// Shared keyboard indicator.
pub struct KeyboardIndicator {
    config: KeyboardConfig,
    curve: HoldFade,
    state: Mutex<LabelState>,
}

/// Label text for a key press, or `None` for a modifier pressed on its own.
pub fn format_label(key: KeyCode, modifiers: Modifiers) -> Option<String> {
    let name = display_name(key);
    if modifiers.is_empty() {
        if key.is_modifier() {
            return None;
        }
        return Some(name.into_owned());
    }
    Some(format!("{} + {}", modifiers, name))
}

impl KeyboardIndicator {
    pub fn new(config: KeyboardConfig) -> Self {
        let curve = HoldFade::new(config.flash_suppress, config.fade_delay, config.fade);
        Self {
            config,
            curve,
            state: Mutex::new(LabelState::default()),
        }
    }

    pub fn on_key_down(&self, key: KeyCode, modifiers: Modifiers) -> bool {
        self.on_key_down_at(key, modifiers, Instant::now())
    }

    /// Show the label for a key press. Returns `false` (and leaves the
    /// current label alone) for a bare Shift, Control or Alt.
    pub fn on_key_down_at(&self, key: KeyCode, modifiers: Modifiers, now: Instant) -> bool {
        let Some(label) = format_label(key, modifiers) else {
            return false;
        };
        tracing::trace!(%label, "key label");

        let mut state = self.state.lock();
        state.label = label;
        state.shown_at = Some(now);
        true
    }

    pub fn label(&self) -> String {
        self.state.lock().label.clone()
    }

    pub fn shown_at(&self) -> Option<Instant> {
        self.state.lock().shown_at
    }

    /// Whether a label would be drawn at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        let state = self.state.lock();
        match state.shown_at {
            Some(shown_at) if !state.label.is_empty() => self
                .curve
                .opacity(now.saturating_duration_since(shown_at))
                .is_some(),
            _ => false,
        }
    }

    /// Draw parameters for the frame at `now`, laid out centred in a window
    /// of size `area`. `None` while the label is hidden.
    pub fn sample(
        &self,
        now: Instant,
        measure: &dyn TextMeasure,
        area: Size,
    ) -> Option<LabelSample> {
        let (text, shown_at) = {
            let state = self.state.lock();
            (state.label.clone(), state.shown_at?)
        };
        if text.is_empty() {
            return None;
        }

        let alpha = self.curve.opacity(now.saturating_duration_since(shown_at))?;
        let cfg = &self.config;

        let middle = Point::new(area.width / 2.0, area.height / 2.0);
        let text_box = Rect::centered(middle, measure.measure_text(&text));
        let background = text_box.inflate(cfg.padding_x, cfg.padding_y);

        let border = (cfg.border > 0.0).then(|| LabelBorder {
            rect: background.inflate(cfg.border / 2.0, cfg.border / 2.0),
            width: cfg.border,
            color: cfg.border_color.faded(alpha),
        });

        Some(LabelSample {
            text,
            text_origin: Point::new(text_box.left, text_box.top),
            text_color: cfg.text_color.faded(alpha),
            background,
            background_color: cfg.background.faded(alpha),
            border,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_plain_and_modified_keys() {
        assert_eq!(format_label(KeyCode::A, Modifiers::empty()).as_deref(), Some("A"));
        assert_eq!(
            format_label(KeyCode::letter('c').unwrap(), Modifiers::CONTROL).as_deref(),
            Some("Control + C")
        );
        assert_eq!(
            format_label(KeyCode::OEM_MINUS, Modifiers::SHIFT | Modifiers::ALT).as_deref(),
            Some("Shift, Alt + -")
        );
    }

    #[test]
    fn bare_modifiers_are_dropped() {
        for key in [KeyCode::LSHIFT, KeyCode::RCONTROL, KeyCode::LMENU, KeyCode::SHIFT] {
            assert_eq!(format_label(key, Modifiers::empty()), None);
        }
    }

    #[test]
    fn modifier_with_other_modifier_held_is_shown() {
        assert_eq!(
            format_label(KeyCode::LCONTROL, Modifiers::SHIFT).as_deref(),
            Some("Shift + LControlKey")
        );
    }
}
