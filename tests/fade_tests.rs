//! Tests for the indicator curves.

use std::time::Duration;

use highlight_input::animation::{grow_fade, HoldFade};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

const GROW: Duration = Duration::from_millis(100);
const FADE: Duration = Duration::from_millis(500);
const OPACITY: f32 = 0.5;

// === Grow then fade ===

#[test]
fn halfway_through_grow() {
    let s = grow_fade(ms(50), GROW, FADE, OPACITY).unwrap();
    assert!(approx_eq(s.size_scale, 0.5));
    assert!(approx_eq(s.opacity, 0.5));
}

#[test]
fn end_of_grow_is_full_size_at_initial_opacity() {
    let s = grow_fade(GROW, GROW, FADE, OPACITY).unwrap();
    assert!(approx_eq(s.size_scale, 1.0));
    assert!(approx_eq(s.opacity, OPACITY));
}

#[test]
fn halfway_through_fade() {
    let s = grow_fade(ms(350), GROW, FADE, OPACITY).unwrap();
    assert!(approx_eq(s.size_scale, 1.0));
    assert!(approx_eq(s.opacity, 0.25));
}

#[test]
fn gone_after_grow_plus_fade() {
    assert!(grow_fade(ms(700), GROW, FADE, OPACITY).is_none());
    assert!(grow_fade(ms(601), GROW, FADE, OPACITY).is_none());
}

#[test]
fn end_of_fade_is_transparent() {
    let s = grow_fade(GROW + FADE, GROW, FADE, OPACITY).unwrap();
    assert!(approx_eq(s.opacity, 0.0));
}

#[test]
fn opacity_never_increases() {
    let mut last = f32::INFINITY;
    for t in (0..=600).step_by(10) {
        let s = grow_fade(ms(t), GROW, FADE, OPACITY).unwrap();
        assert!(s.opacity <= last + 1e-6, "opacity rose at {t} ms");
        last = s.opacity;
    }
}

// === Hold then fade (key label, scroll glyph) ===

#[test]
fn scroll_glyph_curve() {
    let curve = HoldFade::new(ms(50), ms(300), ms(1000));
    assert_eq!(curve.opacity(ms(20)), None);
    assert_eq!(curve.opacity(ms(100)), Some(1.0));
    assert_eq!(curve.opacity(ms(300)), Some(1.0));
    assert!(approx_eq(curve.opacity(ms(800)).unwrap(), 0.5));
    assert_eq!(curve.opacity(ms(1400)), None);
    assert!(approx_eq(curve.opacity(ms(1300)).unwrap(), 0.0));
}

#[test]
fn key_label_curve() {
    let curve = HoldFade::new(ms(30), ms(1000), ms(1000));
    assert_eq!(curve.opacity(ms(29)), None);
    assert_eq!(curve.opacity(ms(30)), Some(1.0));
    assert!(approx_eq(curve.opacity(ms(1250)).unwrap(), 0.75));
    assert_eq!(curve.opacity(ms(2001)), None);
}
