//! Render samples: the draw parameters for one frame.
//!
//! Samples are computed from the indicator state and the current time,
//! handed to a [`Canvas`], and thrown away. They are never stored.

use super::canvas::Canvas;
use crate::events::ScrollDirection;
use crate::model::{Color, Point, Rect};

/// Ring drawn around the click circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Radius of the stroke centre line.
    pub radius: f32,
    pub width: f32,
    pub color: Color,
}

/// The click circle for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSample {
    pub radius: f32,
    pub fill: Color,
    pub outline: Option<Outline>,
}

/// The scroll direction glyph for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSample {
    pub direction: ScrollDirection,
    /// Offset of the glyph centre from the cursor position.
    pub offset: Point,
    pub size: f32,
    pub color: Color,
}

/// Everything the mouse window draws in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseSample {
    /// Desktop position the window is centred on.
    pub position: Point,
    pub circle: Option<CircleSample>,
    pub glyph: Option<GlyphSample>,
}

impl MouseSample {
    pub fn is_visible(&self) -> bool {
        self.circle.is_some() || self.glyph.is_some()
    }

    /// Top-left corner of a square window of side `extent` centred on
    /// the cursor position.
    pub fn window_origin(&self, extent: f32) -> Point {
        self.position.offset(-extent / 2.0, -extent / 2.0)
    }

    /// Clear the frame, move the window over the cursor and draw.
    ///
    /// Coordinates passed to the canvas are window-local.
    pub fn paint(&self, canvas: &mut dyn Canvas, extent: f32) {
        canvas.clear();
        if !self.is_visible() {
            return;
        }

        canvas.move_window(self.window_origin(extent));
        let center = Point::new(extent / 2.0, extent / 2.0);

        if let Some(circle) = &self.circle {
            canvas.fill_circle(center, circle.radius, circle.fill);
            if let Some(outline) = &circle.outline {
                canvas.outline_circle(center, outline.radius, outline.width, outline.color);
            }
        }

        if let Some(glyph) = &self.glyph {
            let at = center.offset(glyph.offset.x, glyph.offset.y);
            canvas.draw_glyph(glyph.direction, at, glyph.size, glyph.color);
        }
    }
}

/// Border drawn around the label background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBorder {
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
}

/// Everything the keyboard window draws in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSample {
    pub text: String,
    /// Top-left corner of the text box.
    pub text_origin: Point,
    pub text_color: Color,
    pub background: Rect,
    pub background_color: Color,
    pub border: Option<LabelBorder>,
}

impl LabelSample {
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.background, self.background_color);
        if let Some(border) = &self.border {
            canvas.outline_rect(border.rect, border.width, border.color);
        }
        canvas.draw_text(self.text_origin, &self.text, self.text_color);
    }
}

/// Clear the keyboard window and draw `sample` if there is one.
pub fn paint_label(sample: Option<&LabelSample>, canvas: &mut dyn Canvas) {
    canvas.clear();
    if let Some(sample) = sample {
        sample.paint(canvas);
    }
}
