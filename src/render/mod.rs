//! Render contract: per-frame samples, the canvas they draw onto, and the
//! frame ticker that drives the render thread.

pub mod canvas;
pub mod sample;
pub mod ticker;

pub use canvas::{Canvas, TextMeasure};
pub use sample::{
    paint_label, CircleSample, GlyphSample, LabelBorder, LabelSample, MouseSample, Outline,
};
pub use ticker::FrameTicker;
