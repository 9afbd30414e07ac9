//! Static overlay configuration (pure Rust, no FFI).
//!
//! Built once at startup from `model::constants`; never edited at runtime.

use std::time::Duration;

use super::color::Color;
use super::constants::*;
use super::geometry::{Point, WindowRect};
use crate::clamp;
use crate::events::MouseButton;

/// Fill colour per mouse button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPalette {
    pub left: Color,
    pub right: Color,
    pub middle: Color,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            left: Color::from_rgb_tuple(COLOR_LEFT),
            right: Color::from_rgb_tuple(COLOR_RIGHT),
            middle: Color::from_rgb_tuple(COLOR_MIDDLE),
        }
    }
}

impl ButtonPalette {
    /// Colour for `button`; buttons without an entry use the left colour.
    pub fn color_for(&self, button: MouseButton) -> Color {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
            MouseButton::X1 | MouseButton::X2 => self.left,
        }
    }
}

/// Click circle and scroll glyph settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseConfig {
    /// Full circle radius in pixels.
    pub radius: f32,
    /// Circle opacity when fully grown [0.0, 1.0].
    pub initial_opacity: f32,
    /// Grow stage length; zero skips the grow stage.
    pub grow: Duration,
    /// Fade stage length.
    pub fade: Duration,
    /// Outline width at full radius; zero draws no outline.
    pub outline_width: f32,
    pub outline_color: Color,
    pub palette: ButtonPalette,
    pub scroll_suppress: Duration,
    pub scroll_fade_delay: Duration,
    pub scroll_fade: Duration,
    pub glyph_size: f32,
    pub glyph_color: Color,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            initial_opacity: DEFAULT_INITIAL_OPACITY,
            grow: DEFAULT_GROW,
            fade: DEFAULT_FADE,
            outline_width: DEFAULT_OUTLINE_WIDTH,
            outline_color: Color::from_rgb_tuple(COLOR_OUTLINE),
            palette: ButtonPalette::default(),
            scroll_suppress: SCROLL_SUPPRESS,
            scroll_fade_delay: SCROLL_FADE_DELAY,
            scroll_fade: SCROLL_FADE,
            glyph_size: SCROLL_GLYPH_SIZE,
            glyph_color: Color::from_rgb_tuple(COLOR_SCROLL_GLYPH),
        }
    }
}

impl MouseConfig {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.radius = clamp(self.radius as f64, MIN_RADIUS as f64, MAX_RADIUS as f64) as f32;
        self.initial_opacity = clamp(self.initial_opacity as f64, 0.0, 1.0) as f32;
        self.outline_width = clamp(self.outline_width as f64, 0.0, MAX_BORDER as f64) as f32;
        self.glyph_size = clamp(self.glyph_size as f64, 0.0, MAX_RADIUS as f64) as f32;
        if self.scroll_fade_delay < self.scroll_suppress {
            self.scroll_fade_delay = self.scroll_suppress;
        }
    }

    /// Offset of the scroll glyph centre from the cursor (to the right).
    pub fn glyph_offset(&self) -> Point {
        Point::new(self.radius + SCROLL_GLYPH_GAP, 0.0)
    }

    /// Side length of the square window that tracks the cursor.
    ///
    /// Fits the full circle with its outline and the scroll glyph on
    /// either side of the centre, plus a little slack against clipping.
    pub fn window_extent(&self) -> i32 {
        let circle = self.radius + self.outline_width;
        let glyph = self.glyph_offset().x + self.glyph_size / 2.0;
        let reach = circle.max(glyph);
        (reach * 2.0 * MOUSE_WINDOW_SLACK).ceil() as i32
    }
}

/// Key label settings.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardConfig {
    pub flash_suppress: Duration,
    pub fade_delay: Duration,
    pub fade: Duration,
    pub padding_x: f32,
    pub padding_y: f32,
    /// Border thickness; zero draws no border.
    pub border: f32,
    /// Distance of the window top from the desktop bottom, as a fraction
    /// of desktop height.
    pub anchor_from_bottom: f32,
    pub window_width: i32,
    pub window_height: i32,
    pub font_family: &'static str,
    pub font_size: f32,
    pub background: Color,
    pub border_color: Color,
    pub text_color: Color,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            flash_suppress: FLASH_SUPPRESS,
            fade_delay: LABEL_FADE_DELAY,
            fade: LABEL_FADE,
            padding_x: LABEL_PADDING_X,
            padding_y: LABEL_PADDING_Y,
            border: LABEL_BORDER,
            anchor_from_bottom: LABEL_ANCHOR_FROM_BOTTOM,
            window_width: LABEL_WINDOW_WIDTH,
            window_height: LABEL_WINDOW_HEIGHT,
            font_family: LABEL_FONT_FAMILY,
            font_size: LABEL_FONT_SIZE,
            background: Color::from_rgba_tuple(COLOR_LABEL_BACKGROUND),
            border_color: Color::from_rgb_tuple(COLOR_LABEL_BORDER),
            text_color: Color::from_rgb_tuple(COLOR_LABEL_TEXT),
        }
    }
}

impl KeyboardConfig {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.padding_x = clamp(self.padding_x as f64, 0.0, MAX_PADDING as f64) as f32;
        self.padding_y = clamp(self.padding_y as f64, 0.0, MAX_PADDING as f64) as f32;
        self.border = clamp(self.border as f64, 0.0, MAX_BORDER as f64) as f32;
        self.anchor_from_bottom = clamp(self.anchor_from_bottom as f64, 0.0, 1.0) as f32;
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
        if self.fade_delay < self.flash_suppress {
            self.fade_delay = self.flash_suppress;
        }
    }

    /// Stationary label window: horizontally centred on the desktop, its top
    /// edge `anchor_from_bottom` of the desktop height above the bottom.
    pub fn window_rect(&self, desktop: WindowRect) -> WindowRect {
        let middle_x = desktop.x + desktop.width / 2;
        let top = desktop.y + (desktop.height as f32 * (1.0 - self.anchor_from_bottom)) as i32;
        WindowRect::new(
            middle_x - self.window_width / 2,
            top,
            self.window_width,
            self.window_height,
        )
    }
}

/// Complete overlay configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub mouse: MouseConfig,
    pub keyboard: KeyboardConfig,
    pub frame_interval: Duration,
    pub desktop_recheck: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            mouse: MouseConfig::default(),
            keyboard: KeyboardConfig::default(),
            frame_interval: FRAME_INTERVAL,
            desktop_recheck: DESKTOP_RECHECK,
        }
    }
}

impl OverlayConfig {
    /// Compiled-in defaults, validated.
    pub fn builtin() -> Self {
        let mut config = Self::default();
        config.validate();
        config
    }

    pub fn validate(&mut self) {
        self.mouse.validate();
        self.keyboard.validate();
        if self.frame_interval.is_zero() {
            self.frame_interval = FRAME_INTERVAL;
        }
    }
}
