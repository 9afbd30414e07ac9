//! Grow-then-fade and hold-then-fade curves.

use std::time::Duration;

use crate::progress;

/// Opacity and size of an indicator at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSample {
    /// Opacity in [0.0, initial_opacity].
    pub opacity: f32,
    /// Fraction of the full size in [0.0, 1.0].
    pub size_scale: f32,
}

/// Click circle curve.
///
/// Grows linearly from nothing to full size over `grow` at `initial_opacity`,
/// then fades linearly to zero over `fade` at full size. A zero `grow` skips
/// the grow stage. Returns `None` once `elapsed` passes `grow + fade`.
pub fn grow_fade(
    elapsed: Duration,
    grow: Duration,
    fade: Duration,
    initial_opacity: f32,
) -> Option<FadeSample> {
    if !grow.is_zero() && elapsed <= grow {
        return Some(FadeSample {
            opacity: initial_opacity,
            size_scale: progress(elapsed, grow) as f32,
        });
    }

    if elapsed <= grow + fade {
        let faded = progress(elapsed.saturating_sub(grow), fade) as f32;
        return Some(FadeSample {
            opacity: initial_opacity * (1.0 - faded),
            size_scale: 1.0,
        });
    }

    None
}

/// Curve used by the key label and the scroll glyph: hidden for `suppress`,
/// fully opaque until `hold_until`, then fading linearly to zero over `fade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldFade {
    pub suppress: Duration,
    pub hold_until: Duration,
    pub fade: Duration,
}

impl HoldFade {
    pub const fn new(suppress: Duration, hold_until: Duration, fade: Duration) -> Self {
        Self {
            suppress,
            hold_until,
            fade,
        }
    }

    /// Opacity multiplier in [0.0, 1.0], or `None` while hidden.
    pub fn opacity(&self, elapsed: Duration) -> Option<f32> {
        if elapsed < self.suppress || elapsed > self.hold_until + self.fade {
            return None;
        }
        if elapsed <= self.hold_until {
            return Some(1.0);
        }
        Some(1.0 - progress(elapsed - self.hold_until, self.fade) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn grow_stage_keeps_initial_opacity() {
        let s = grow_fade(ms(25), ms(100), ms(500), 0.4).unwrap();
        assert_eq!(s.opacity, 0.4);
        assert!((s.size_scale - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_grow_starts_fading_immediately() {
        let s = grow_fade(ms(0), ms(0), ms(400), 0.4).unwrap();
        assert_eq!(s.size_scale, 1.0);
        assert!((s.opacity - 0.4).abs() < 1e-6);

        let s = grow_fade(ms(200), ms(0), ms(400), 0.4).unwrap();
        assert_eq!(s.size_scale, 1.0);
        assert!((s.opacity - 0.2).abs() < 1e-6);
    }

    #[test]
    fn zero_fade_does_not_divide_by_zero() {
        let s = grow_fade(ms(0), ms(0), ms(0), 0.4).unwrap();
        assert!(s.opacity.is_finite());
        assert!(grow_fade(ms(1), ms(0), ms(0), 0.4).is_none());
    }

    #[test]
    fn hold_fade_hidden_before_suppress_and_after_fade() {
        let curve = HoldFade::new(ms(30), ms(1000), ms(1000));
        assert_eq!(curve.opacity(ms(29)), None);
        assert_eq!(curve.opacity(ms(30)), Some(1.0));
        assert_eq!(curve.opacity(ms(2001)), None);
    }

    #[test]
    fn hold_fade_is_linear_after_hold() {
        let curve = HoldFade::new(ms(30), ms(1000), ms(1000));
        let alpha = curve.opacity(ms(1250)).unwrap();
        assert!((alpha - 0.75).abs() < 1e-6);
    }
}
