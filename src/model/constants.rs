//! Configuration constants and default values.
//!
//! Every tweakable of the overlay lives here. Nothing is read from disk or
//! the environment; `model::config` builds its defaults from these values.

use std::time::Duration;

// === Mouse Indicator ===

/// Default click circle radius in pixels.
pub const DEFAULT_RADIUS: f32 = 35.0;

/// Opacity of the click circle at the start of the fade stage.
pub const DEFAULT_INITIAL_OPACITY: f32 = 0.5;

/// Time for the click circle to grow from nothing to full radius.
pub const DEFAULT_GROW: Duration = Duration::from_millis(100);

/// Time for the click circle to fade out once fully grown.
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

/// Outline width around the click circle (0 = no outline).
pub const DEFAULT_OUTLINE_WIDTH: f32 = 0.0;

/// Left button colour (R, G, B) - yellow.
pub const COLOR_LEFT: (f32, f32, f32) = (1.0, 1.0, 0.0);

/// Right button colour (R, G, B) - dark red.
pub const COLOR_RIGHT: (f32, f32, f32) = (0.7, 0.0, 0.0);

/// Middle button colour (R, G, B) - blue.
pub const COLOR_MIDDLE: (f32, f32, f32) = (0.0, 0.5, 1.0);

/// Outline colour (R, G, B) - black.
pub const COLOR_OUTLINE: (f32, f32, f32) = (0.0, 0.0, 0.0);

// === Scroll Glyph ===

/// The glyph stays hidden this long after a wheel event so it does not
/// collide with a click circle drawn at the same instant.
pub const SCROLL_SUPPRESS: Duration = Duration::from_millis(50);

/// The glyph stays fully opaque until this much time has passed.
pub const SCROLL_FADE_DELAY: Duration = Duration::from_millis(300);

/// Fade-out length of the scroll glyph.
pub const SCROLL_FADE: Duration = Duration::from_millis(1000);

/// Glyph height in pixels.
pub const SCROLL_GLYPH_SIZE: f32 = 14.0;

/// Gap between the circle edge and the glyph centre.
pub const SCROLL_GLYPH_GAP: f32 = 14.0;

/// Glyph colour (R, G, B) - white.
pub const COLOR_SCROLL_GLYPH: (f32, f32, f32) = (1.0, 1.0, 1.0);

/// Slack added to the mouse window so anti-aliased edges are not clipped.
pub const MOUSE_WINDOW_SLACK: f32 = 1.05;

// === Keyboard Indicator ===

/// Label is hidden this long after a key press ("flash"), so repeated
/// presses read as distinct events.
pub const FLASH_SUPPRESS: Duration = Duration::from_millis(30);

/// Label stays fully opaque until this much time has passed.
pub const LABEL_FADE_DELAY: Duration = Duration::from_millis(1000);

/// Fade-out length of the key label.
pub const LABEL_FADE: Duration = Duration::from_millis(1000);

/// Horizontal padding between text and background edge.
pub const LABEL_PADDING_X: f32 = 20.0;

/// Vertical padding between text and background edge.
pub const LABEL_PADDING_Y: f32 = 10.0;

/// Border thickness around the label background (0 = no border).
pub const LABEL_BORDER: f32 = 6.0;

/// Label window sits this fraction of the desktop height above the bottom.
pub const LABEL_ANCHOR_FROM_BOTTOM: f32 = 0.2;

/// Label window width; bounds the widest label we expect.
pub const LABEL_WINDOW_WIDTH: i32 = 1000;

/// Label window height.
pub const LABEL_WINDOW_HEIGHT: i32 = 200;

/// Label font family.
pub const LABEL_FONT_FAMILY: &str = "Calibri";

/// Label font size in DIPs.
pub const LABEL_FONT_SIZE: f32 = 50.0;

/// Label background colour (R, G, B, A) before fading.
pub const COLOR_LABEL_BACKGROUND: (f32, f32, f32, f32) = (0.6, 0.6, 0.6, 0.85);

/// Label border colour (R, G, B) - near black.
pub const COLOR_LABEL_BORDER: (f32, f32, f32) = (0.05, 0.05, 0.05);

/// Label text colour (R, G, B) - black.
pub const COLOR_LABEL_TEXT: (f32, f32, f32) = (0.0, 0.0, 0.0);

// === Render Loop ===

/// Frame interval (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How often the desktop bounds are re-read to re-anchor the label window.
pub const DESKTOP_RECHECK: Duration = Duration::from_secs(5);

// === Validation Limits ===

/// Minimum radius value in pixels.
pub const MIN_RADIUS: f32 = 5.0;

/// Maximum radius value in pixels.
pub const MAX_RADIUS: f32 = 200.0;

/// Maximum outline or border width in pixels.
pub const MAX_BORDER: f32 = 20.0;

/// Maximum label padding in pixels.
pub const MAX_PADDING: f32 = 100.0;
