//! Colour values and the elevation tint used by chip surfaces.

use std::fmt;

/// Non-premultiplied RGBA colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(0xFFFFFFFF);
    pub const BLACK: Color = Color::from_argb(0xFF000000);
    pub const TRANSPARENT: Color = Color::from_argb(0x00000000);

    /// Builds a colour from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: ((argb >> 24) & 0xFF) as f32 / 255.0,
            red: ((argb >> 16) & 0xFF) as f32 / 255.0,
            green: ((argb >> 8) & 0xFF) as f32 / 255.0,
            blue: (argb & 0xFF) as f32 / 255.0,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Source-over compositing of `self` on top of `background`.
    pub fn composite_over(self, background: Color) -> Color {
        let fg = self.alpha.clamp(0.0, 1.0);
        let bg = background.alpha * (1.0 - fg);
        let alpha = fg + bg;
        if alpha <= 0.0 {
            return Color::TRANSPARENT;
        }
        let mix = |f: f32, b: f32| (f * fg + b * bg) / alpha;
        Color {
            red: mix(self.red, background.red),
            green: mix(self.green, background.green),
            blue: mix(self.blue, background.blue),
            alpha,
        }
    }

    /// Manhattan distance to opaque white, used to compare lightness.
    pub fn distance_to_white(&self) -> f32 {
        (1.0 - self.red) + (1.0 - self.green) + (1.0 - self.blue) + (1.0 - self.alpha)
    }

    fn channel_u8(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            Self::channel_u8(self.red),
            Self::channel_u8(self.green),
            Self::channel_u8(self.blue),
            self.alpha.clamp(0.0, 1.0)
        )
    }
}

fn overlay_alpha(elevation: f32) -> f32 {
    (4.5 * (elevation + 1.0).ln() + 2.0) / 100.0
}

/// Overlays white on `base`, more strongly the higher the elevation.
///
/// Zero elevation returns `base` untouched. Elevation must not be negative.
pub fn tint(base: Color, elevation: f32) -> Color {
    debug_assert!(elevation >= 0.0, "negative elevation {elevation}");
    if elevation <= 0.0 {
        return base;
    }
    Color::WHITE
        .with_alpha(overlay_alpha(elevation))
        .composite_over(base)
}
