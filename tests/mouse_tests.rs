//! Tests for the click circle and scroll glyph.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use highlight_input::events::{InputEvent, MouseButton, ScrollDirection};
use highlight_input::model::{MouseConfig, OverlayConfig, Point};
use highlight_input::{Indicators, MouseIndicator};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn indicator() -> (MouseIndicator, MouseConfig) {
    let config = MouseConfig::default();
    (MouseIndicator::new(config.clone()), config)
}

// === Click circle ===

#[test]
fn circle_grows_then_fades_after_quick_click() {
    let (mouse, config) = indicator();
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Left, Point::new(100.0, 100.0), t0);
    mouse.on_button_up();

    let growing = mouse.sample(t0 + ms(50)).circle.unwrap();
    assert!(approx_eq(growing.radius, config.radius / 2.0));
    assert!(approx_eq(growing.fill.a, 0.5));

    let fading = mouse.sample(t0 + ms(350)).circle.unwrap();
    assert!(approx_eq(fading.radius, config.radius));
    assert!(approx_eq(fading.fill.a, 0.25));

    assert!(mouse.sample(t0 + ms(700)).circle.is_none());
}

#[test]
fn held_button_keeps_circle_full() {
    let (mouse, config) = indicator();
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Left, Point::default(), t0);

    for t in [200, 800, 3000] {
        let circle = mouse.sample(t0 + ms(t)).circle.unwrap();
        assert!(approx_eq(circle.radius, config.radius));
        assert!(approx_eq(circle.fill.a, config.initial_opacity));
    }
}

#[test]
fn fade_starts_at_release_after_long_hold() {
    let (mouse, _) = indicator();
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Left, Point::default(), t0);
    mouse.sample(t0 + ms(2000));
    mouse.on_button_up();

    // 250 ms into the fade that began at the last held frame.
    let circle = mouse.sample(t0 + ms(2250)).circle.unwrap();
    assert!(approx_eq(circle.fill.a, 0.25));
    assert!(mouse.sample(t0 + ms(2501)).circle.is_none());
}

#[test]
fn release_without_held_frames_keeps_press_time() {
    let (mouse, _) = indicator();
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Left, Point::default(), t0);
    mouse.on_button_up();

    let circle = mouse.sample(t0 + ms(250)).circle.unwrap();
    assert!(approx_eq(circle.fill.a, 0.35));
}

#[test]
fn sampling_twice_at_same_instant_is_stable() {
    let (mouse, _) = indicator();
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Middle, Point::new(3.0, 4.0), t0);

    let now = t0 + ms(450);
    assert_eq!(mouse.sample(now), mouse.sample(now));
}

#[test]
fn circle_colour_follows_button() {
    let (mouse, config) = indicator();
    let t0 = Instant::now();
    for (button, colour) in [
        (MouseButton::Left, config.palette.left),
        (MouseButton::Right, config.palette.right),
        (MouseButton::Middle, config.palette.middle),
        (MouseButton::X1, config.palette.left),
    ] {
        mouse.on_button_down_at(button, Point::default(), t0);
        let fill = mouse.sample(t0 + ms(10)).circle.unwrap().fill;
        assert_eq!((fill.r, fill.g, fill.b), (colour.r, colour.g, colour.b));
    }
}

#[test]
fn new_click_restarts_animation() {
    let (mouse, config) = indicator();
    let t0 = Instant::now();
    mouse.on_button_down_at(MouseButton::Left, Point::default(), t0);
    mouse.on_button_up();
    mouse.on_button_down_at(MouseButton::Right, Point::new(9.0, 9.0), t0 + ms(500));
    mouse.on_button_up();

    let circle = mouse.sample(t0 + ms(550)).circle.unwrap();
    assert!(approx_eq(circle.radius, config.radius / 2.0));
    assert_eq!(mouse.sample(t0 + ms(550)).position, Point::new(9.0, 9.0));
}

// === Scroll glyph ===

#[test]
fn scroll_glyph_points_in_wheel_direction() {
    let (mouse, config) = indicator();
    let t0 = Instant::now();
    mouse.on_wheel_at(ScrollDirection::Down, Point::new(50.0, 60.0), t0);

    assert!(mouse.sample(t0 + ms(10)).glyph.is_none());

    let sample = mouse.sample(t0 + ms(100));
    let glyph = sample.glyph.unwrap();
    assert_eq!(glyph.direction, ScrollDirection::Down);
    assert_eq!(glyph.offset, config.glyph_offset());
    assert!(approx_eq(glyph.color.a, 1.0));
    assert_eq!(sample.position, Point::new(50.0, 60.0));
    assert!(sample.circle.is_none());
}

#[test]
fn scroll_glyph_fades_out() {
    let (mouse, _) = indicator();
    let t0 = Instant::now();
    mouse.on_wheel_at(ScrollDirection::Up, Point::default(), t0);

    let glyph = mouse.sample(t0 + ms(800)).glyph.unwrap();
    assert!(approx_eq(glyph.color.a, 0.5));
    assert!(!mouse.sample(t0 + ms(1400)).is_visible());
}

// === Event delivery ===

#[test]
fn events_reach_the_mouse_indicator() {
    let indicators = Indicators::new(&OverlayConfig::builtin());

    InputEvent::ButtonDown {
        button: MouseButton::Right,
        position: Point::new(10.0, 20.0),
    }
    .apply(&indicators);
    assert!(indicators.mouse.is_button_down());

    InputEvent::Move {
        position: Point::new(15.0, 25.0),
    }
    .apply(&indicators);
    assert_eq!(indicators.mouse.position(), Point::new(15.0, 25.0));

    InputEvent::ButtonUp.apply(&indicators);
    assert!(!indicators.mouse.is_button_down());

    InputEvent::Wheel {
        direction: ScrollDirection::Up,
        position: Point::new(1.0, 2.0),
    }
    .apply(&indicators);
    assert_eq!(indicators.mouse.position(), Point::new(1.0, 2.0));
}

#[test]
fn mutators_and_sampling_from_two_threads() {
    let mouse = Arc::new(MouseIndicator::new(MouseConfig::default()));
    let t0 = Instant::now();

    let writer = {
        let mouse = Arc::clone(&mouse);
        thread::spawn(move || {
            for i in 0..5_000u64 {
                let at = Point::new(i as f32, i as f32);
                mouse.on_button_down_at(MouseButton::Left, at, t0 + ms(i));
                mouse.on_move(at.offset(1.0, 1.0));
                mouse.on_wheel_at(ScrollDirection::Down, at, t0 + ms(i));
                mouse.on_button_up();
            }
        })
    };

    for i in 0..5_000u64 {
        let sample = mouse.sample(t0 + ms(i));
        if let Some(circle) = sample.circle {
            assert!(circle.radius >= 0.0 && circle.radius <= 35.0 + 1e-3);
            assert!(circle.fill.a >= 0.0 && circle.fill.a <= 0.5 + 1e-6);
        }
    }

    writer.join().unwrap();
    assert!(!mouse.is_button_down());
    assert_eq!(mouse.position(), Point::new(4999.0, 4999.0));
}
