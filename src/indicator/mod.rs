//! Indicator states fed by global input and sampled every frame.
//!
//! Each indicator owns one mutex; mutators and `sample` all take it. The
//! two are independent and bundled in [`Indicators`], which is what the
//! platform hooks deliver events to.

pub mod keyboard;
pub mod keys;
pub mod mouse;

pub use keyboard::{format_label, KeyboardIndicator};
pub use keys::display_name;
pub use mouse::MouseIndicator;

use crate::events::{InputSink, KeyCode, Modifiers, MouseButton, ScrollDirection};
use crate::model::{OverlayConfig, Point};

/// The mouse and keyboard indicators, shared between the hook thread and
/// the render thread.
pub struct Indicators {
    pub mouse: MouseIndicator,
    pub keyboard: KeyboardIndicator,
}

impl Indicators {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            mouse: MouseIndicator::new(config.mouse.clone()),
            keyboard: KeyboardIndicator::new(config.keyboard.clone()),
        }
    }
}

impl InputSink for Indicators {
    fn on_button_down(&self, button: MouseButton, position: Point) {
        self.mouse.on_button_down(button, position);
    }

    fn on_move(&self, position: Point) {
        self.mouse.on_move(position);
    }

    fn on_button_up(&self) {
        self.mouse.on_button_up();
    }

    fn on_wheel(&self, direction: ScrollDirection, position: Point) {
        self.mouse.on_wheel(direction, position);
    }

    fn on_key_down(&self, key: KeyCode, modifiers: Modifiers) {
        self.keyboard.on_key_down(key, modifiers);
    }
}
