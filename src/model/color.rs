//! RGBA colour with opacity scaling.

use crate::clamp;

/// Straight (non-premultiplied) RGBA colour, components in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb_tuple(c: (f32, f32, f32)) -> Self {
        Self::rgb(c.0, c.1, c.2)
    }

    pub const fn from_rgba_tuple(c: (f32, f32, f32, f32)) -> Self {
        Self::rgba(c.0, c.1, c.2, c.3)
    }

    /// Same colour with alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: clamp(a as f64, 0.0, 1.0) as f32,
            ..self
        }
    }

    /// Same colour with alpha multiplied by `opacity`.
    pub fn faded(self, opacity: f32) -> Self {
        self.with_alpha(self.a * opacity)
    }

    /// Format as `#RRGGBB` or `#RRGGBBAA` (if alpha < 1), for logs.
    pub fn to_hex(self) -> String {
        let byte = |v: f32| (clamp(v as f64, 0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}
