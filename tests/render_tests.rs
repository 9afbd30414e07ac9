//! Tests for frame painting against a recording canvas.

use std::time::{Duration, Instant};

use highlight_input::events::{KeyCode, Modifiers, MouseButton, ScrollDirection};
use highlight_input::model::{Color, KeyboardConfig, MouseConfig, Point, Rect, Size};
use highlight_input::render::{paint_label, Canvas, TextMeasure};
use highlight_input::{KeyboardIndicator, MouseIndicator};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Move(Point),
    FillCircle(Point, f32),
    OutlineCircle(Point, f32, f32),
    FillRect(Rect),
    OutlineRect(Rect, f32),
    Text(Point, String),
    Glyph(ScrollDirection, Point),
}

#[derive(Default)]
struct RecordingCanvas {
    ops: Vec<Op>,
}

impl TextMeasure for RecordingCanvas {
    fn measure_text(&self, text: &str) -> Size {
        Size::new(text.len() as f32 * 10.0, 20.0)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn move_window(&mut self, top_left: Point) {
        self.ops.push(Op::Move(top_left));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, _color: Color) {
        self.ops.push(Op::FillCircle(center, radius));
    }

    fn outline_circle(&mut self, center: Point, radius: f32, width: f32, _color: Color) {
        self.ops.push(Op::OutlineCircle(center, radius, width));
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        self.ops.push(Op::FillRect(rect));
    }

    fn outline_rect(&mut self, rect: Rect, width: f32, _color: Color) {
        self.ops.push(Op::OutlineRect(rect, width));
    }

    fn draw_text(&mut self, origin: Point, text: &str, _color: Color) {
        self.ops.push(Op::Text(origin, text.to_string()));
    }

    fn draw_glyph(&mut self, direction: ScrollDirection, center: Point, _size: f32, _color: Color) {
        self.ops.push(Op::Glyph(direction, center));
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

// === Mouse window ===

#[test]
fn invisible_mouse_frame_only_clears() {
    let mouse = MouseIndicator::new(MouseConfig::default());
    let mut canvas = RecordingCanvas::default();
    mouse.sample(Instant::now()).paint(&mut canvas, 118.0);
    assert_eq!(canvas.ops, vec![Op::Clear]);
}

#[test]
fn click_frame_moves_window_over_cursor_and_draws_circle() {
    let mouse = MouseIndicator::new(MouseConfig::default());
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Left, Point::new(300.0, 200.0), t0);

    let mut canvas = RecordingCanvas::default();
    mouse.sample(t0 + ms(100)).paint(&mut canvas, 100.0);

    assert_eq!(
        canvas.ops,
        vec![
            Op::Clear,
            Op::Move(Point::new(250.0, 150.0)),
            Op::FillCircle(Point::new(50.0, 50.0), 35.0),
        ]
    );
}

#[test]
fn outline_is_drawn_after_fill() {
    let config = MouseConfig {
        outline_width: 2.0,
        ..MouseConfig::default()
    };
    let mouse = MouseIndicator::new(config);
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Right, Point::new(50.0, 50.0), t0);

    let mut canvas = RecordingCanvas::default();
    mouse.sample(t0 + ms(100)).paint(&mut canvas, 100.0);

    assert_eq!(
        canvas.ops[2..],
        [
            Op::FillCircle(Point::new(50.0, 50.0), 35.0),
            Op::OutlineCircle(Point::new(50.0, 50.0), 36.0, 2.0),
        ]
    );
}

#[test]
fn scroll_glyph_drawn_beside_cursor() {
    let config = MouseConfig::default();
    let offset = config.glyph_offset();
    let mouse = MouseIndicator::new(config);
    let t0 = Instant::now();
    mouse.on_wheel_at(ScrollDirection::Up, Point::new(500.0, 500.0), t0);

    let mut canvas = RecordingCanvas::default();
    mouse.sample(t0 + ms(100)).paint(&mut canvas, 120.0);

    assert_eq!(
        canvas.ops,
        vec![
            Op::Clear,
            Op::Move(Point::new(440.0, 440.0)),
            Op::Glyph(ScrollDirection::Up, Point::new(60.0 + offset.x, 60.0 + offset.y)),
        ]
    );
}

// === Keyboard window ===

#[test]
fn hidden_label_only_clears() {
    let mut canvas = RecordingCanvas::default();
    paint_label(None, &mut canvas);
    assert_eq!(canvas.ops, vec![Op::Clear]);
}

#[test]
fn label_paints_background_border_then_text() {
    let keyboard = KeyboardIndicator::new(KeyboardConfig::default());
    let t0 = Instant::now();
    keyboard.on_key_down_at(KeyCode::letter('q').unwrap(), Modifiers::CONTROL, t0);

    let mut canvas = RecordingCanvas::default();
    let area = Size::new(1000.0, 200.0);
    let sample = keyboard.sample(t0 + ms(100), &canvas, area);
    paint_label(sample.as_ref(), &mut canvas);

    // "Control + Q" is 11 characters: 110 x 20, centred at (500, 100).
    assert_eq!(
        canvas.ops,
        vec![
            Op::Clear,
            Op::FillRect(Rect::new(425.0, 80.0, 575.0, 120.0)),
            Op::OutlineRect(Rect::new(422.0, 77.0, 578.0, 123.0), 6.0),
            Op::Text(Point::new(445.0, 90.0), "Control + Q".to_string()),
        ]
    );
}
