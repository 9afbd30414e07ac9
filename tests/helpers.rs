use std::time::Duration;

use highlight_input::model::Color;
use highlight_input::{clamp, progress};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn progress_is_linear_and_clamped() {
    let span = Duration::from_millis(400);
    assert!(approx_eq(progress(Duration::ZERO, span), 0.0));
    assert!(approx_eq(progress(Duration::from_millis(100), span), 0.25));
    assert!(approx_eq(progress(Duration::from_millis(900), span), 1.0));
}

#[test]
fn progress_over_empty_span_is_complete() {
    assert!(approx_eq(progress(Duration::from_millis(5), Duration::ZERO), 1.0));
    assert!(approx_eq(progress(Duration::ZERO, Duration::ZERO), 1.0));
}

#[test]
fn color_to_hex_without_alpha_when_opaque() {
    assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_hex(), "#FF0080");
}

#[test]
fn color_to_hex_with_alpha_when_not_opaque() {
    assert_eq!(Color::rgba(0.2, 0.4, 0.6, 0.5).to_hex(), "#33669980");
}
