//! Drawing contract between the indicators and a render surface.
//!
//! The Win32 implementation lives in `platform::windows::ui::overlay`;
//! tests use a canvas that records calls.

use crate::events::ScrollDirection;
use crate::model::{Color, Point, Rect, Size};

/// Measures text in the label font.
pub trait TextMeasure {
    fn measure_text(&self, text: &str) -> Size;
}

/// Primitives a render surface offers for one frame.
///
/// Colours are straight alpha; the surface premultiplies if it needs to.
pub trait Canvas: TextMeasure {
    /// Clear to fully transparent.
    fn clear(&mut self);

    /// Place the backing window's top-left corner at a desktop position.
    fn move_window(&mut self, top_left: Point);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn outline_circle(&mut self, center: Point, radius: f32, width: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn outline_rect(&mut self, rect: Rect, width: f32, color: Color);

    /// Draw `text` with its layout box's top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color);

    /// Draw the fixed up or down arrow, `size` pixels tall, centred on `center`.
    fn draw_glyph(&mut self, direction: ScrollDirection, center: Point, size: f32, color: Color);
}
