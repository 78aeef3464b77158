//!
//! RGBA colors and the arithmetic to derive shades from them.
//!

/// RGBA color.
///
/// Red/green/blue are kept as f32 in `0..=255`, alpha in `0..=1`.
/// Derived colors stay fractional through any chain of operations,
/// rounding happens only when formatting as hex.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
            a: 1.0,
        }
    }

    /// Color from 8-bit channels and an alpha in `0..=1`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
            a,
        }
    }

    /// Linear interpolation towards target.
    /// ratio is `0..=1`, 0 gives self, 1 gives target.
    pub const fn mix(self, target: Self, ratio: f32) -> Self {
        Self {
            r: self.r + (target.r - self.r) * ratio,
            g: self.g + (target.g - self.g) * ratio,
            b: self.b + (target.b - self.b) * ratio,
            a: self.a + (target.a - self.a) * ratio,
        }
    }

    /// Multiplies alpha by `1 - ratio` and clamps.
    /// fade(0) keeps the color, fade(1) makes it fully transparent.
    pub const fn fade(self, ratio: f32) -> Self {
        let a = self.a * (1.0 - ratio);
        let a = if a < 0.0 {
            0.0
        } else if a > 1.0 {
            1.0
        } else {
            a
        };
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Lightens the color. Scales the HSL lightness by `1 + ratio`
    /// and clamps. Alpha is untouched.
    pub fn lighten(self, ratio: f32) -> Self {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        let l = (l * (1.0 + ratio)).clamp(0.0, 1.0);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self { r, g, b, a: self.a }
    }

    /// Luminance according to BT.709.
    pub const fn luminance(self) -> f32 {
        0.2126f32 * (self.r / 255f32)
            + 0.7152f32 * (self.g / 255f32)
            + 0.0722f32 * (self.b / 255f32)
    }

    /// Formats as `#RRGGBBAA`. Channels round half-up, alpha is
    /// scaled to `0..=255` first.
    pub fn hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.a * 255.0).round() as u8
        )
    }
}

fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        // achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        let v = l * 255.0;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
