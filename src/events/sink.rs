//! Receiver side of the global input hooks.

use super::types::{KeyCode, Modifiers, MouseButton, ScrollDirection};
use crate::model::Point;

/// Something that reacts to global input.
///
/// The platform hooks hold a shared reference to an implementor for as long
/// as they listen and call these methods on the hook thread. Each call must
/// apply its change before returning so the next rendered frame sees it.
pub trait InputSink: Send + Sync {
    fn on_button_down(&self, button: MouseButton, position: Point);

    /// Pointer moved; only matters while a button is held.
    fn on_move(&self, position: Point);

    fn on_button_up(&self);

    fn on_wheel(&self, direction: ScrollDirection, position: Point);

    fn on_key_down(&self, key: KeyCode, modifiers: Modifiers);
}
