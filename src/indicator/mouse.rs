//! Click circle and scroll glyph state.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::animation::{grow_fade, HoldFade};
use crate::events::{MouseButton, ScrollDirection};
use crate::model::{MouseConfig, Point};
use crate::render::{CircleSample, GlyphSample, MouseSample, Outline};

#[derive(Debug, Clone, Copy)]
struct MouseState {
    position: Point,
    button_down: bool,
    active_button: MouseButton,
    /// `None` until the first click.
    down_at: Option<Instant>,
    /// `None` until the first wheel event.
    scroll_at: Option<Instant>,
    scroll_direction: ScrollDirection,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            position: Point::default(),
            button_down: false,
            active_button: MouseButton::Left,
            down_at: None,
            scroll_at: None,
            scroll_direction: ScrollDirection::Up,
        }
    }
}

/// Shared mouse indicator.
///
/// Mutated from the hook thread and sampled from the render thread; every
/// access goes through one lock so a frame never sees a half-applied event.
/// The grow/fade/invisible phase is never stored: it is recomputed from
/// `now - down_at` on every sample.
pub struct MouseIndicator {
    config: MouseConfig,
    scroll_curve: HoldFade,
    state: Mutex<MouseState>,
}

impl MouseIndicator {
    pub fn new(config: MouseConfig) -> Self {
        let scroll_curve = HoldFade::new(
            config.scroll_suppress,
            config.scroll_fade_delay,
            config.scroll_fade,
        );
        Self {
            config,
            scroll_curve,
            state: Mutex::new(MouseState::default()),
        }
    }

    pub fn on_button_down(&self, button: MouseButton, position: Point) {
        self.on_button_down_at(button, position, Instant::now());
    }

    pub fn on_button_down_at(&self, button: MouseButton, position: Point, now: Instant) {
        let mut state = self.state.lock();
        state.active_button = button;
        state.position = position;
        state.button_down = true;
        state.down_at = Some(now);
    }

    /// Track the pointer only while dragging.
    pub fn on_move(&self, position: Point) {
        let mut state = self.state.lock();
        if state.button_down {
            state.position = position;
        }
    }

    /// Release keeps the press timestamp so the circle fades out naturally.
    pub fn on_button_up(&self) {
        self.state.lock().button_down = false;
    }

    pub fn on_wheel(&self, direction: ScrollDirection, position: Point) {
        self.on_wheel_at(direction, position, Instant::now());
    }

    pub fn on_wheel_at(&self, direction: ScrollDirection, position: Point, now: Instant) {
        let mut state = self.state.lock();
        state.scroll_direction = direction;
        state.scroll_at = Some(now);
        state.position = position;
    }

    pub fn is_button_down(&self) -> bool {
        self.state.lock().button_down
    }

    pub fn position(&self) -> Point {
        self.state.lock().position
    }

    /// Draw parameters for the frame at `now`.
    ///
    /// While a button is held the press timestamp is pinned to
    /// `now - grow`, so the circle stays fully grown at full opacity and
    /// starts fading from the moment of release. Pinning is the only write;
    /// sampling twice at the same `now` yields the same result.
    pub fn sample(&self, now: Instant) -> MouseSample {
        let mut state = self.state.lock();

        if state.button_down {
            if let (Some(down_at), Some(pinned)) = (state.down_at, now.checked_sub(self.config.grow)) {
                if down_at < pinned {
                    state.down_at = Some(pinned);
                }
            }
        }

        let circle = state.down_at.and_then(|down_at| {
            self.circle_at(now.saturating_duration_since(down_at), state.active_button)
        });
        let glyph = state.scroll_at.and_then(|scroll_at| {
            self.glyph_at(now.saturating_duration_since(scroll_at), state.scroll_direction)
        });

        MouseSample {
            position: state.position,
            circle,
            glyph,
        }
    }

    fn circle_at(&self, elapsed: Duration, button: MouseButton) -> Option<CircleSample> {
        let cfg = &self.config;
        let fade = grow_fade(elapsed, cfg.grow, cfg.fade, cfg.initial_opacity)?;
        let radius = cfg.radius * fade.size_scale;

        let outline = (cfg.outline_width > 0.0).then(|| {
            let width = cfg.outline_width * fade.size_scale;
            Outline {
                radius: radius + width / 2.0,
                width,
                color: cfg.outline_color.with_alpha(fade.opacity),
            }
        });

        Some(CircleSample {
            radius,
            fill: cfg.palette.color_for(button).with_alpha(fade.opacity),
            outline,
        })
    }

    fn glyph_at(&self, elapsed: Duration, direction: ScrollDirection) -> Option<GlyphSample> {
        let opacity = self.scroll_curve.opacity(elapsed)?;
        Some(GlyphSample {
            direction,
            offset: self.config.glyph_offset(),
            size: self.config.glyph_size,
            color: self.config.glyph_color.faded(opacity),
        })
    }
}
