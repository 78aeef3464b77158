//!
//! Base colors for a theme plus the standard derivations.
//!

use crate::Color;

/// Color palette.
///
/// The named base colors a theme is built from. The palette is
/// defined once as a const and never mutated, everything else is
/// derived via [gray](Palette::gray), [accented](Palette::accented)
/// and the [Color] ops.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Name of the color palette. Doubles as the theme name.
    pub name: &'static str,

    pub transparent: Color,
    pub black: Color,
    pub white: Color,

    pub red: Color,
    pub coral: Color,
    pub auburn: Color,
    pub orange: Color,
    pub peach: Color,
    pub yellow: Color,
    pub green: Color,
    pub mint: Color,
    pub sea: Color,
    pub cyan: Color,
    pub slate: Color,
    pub sky: Color,
    pub blue: Color,
    pub indigo: Color,
    pub violet: Color,
    pub lavender: Color,
    pub purple: Color,
    pub magenta: Color,
    pub salmon: Color,
}

impl Palette {
    /// Stops of the grayscale ramp.
    pub const GRAY_LEVELS: [u16; 16] = [
        25, 50, 75, 100, 150, 200, 250, 300, 400, 500, 600, 700, 800, 850, 900, 950,
    ];

    /// Gray shade for the given ramp level.
    /// Interpolates black towards white, level is `0..=1000`.
    pub const fn gray(&self, level: u16) -> Color {
        self.black.mix(self.white, level as f32 / 1000.0)
    }

    /// Shifts a color halfway towards the accent color.
    pub const fn accented(&self, color: Color) -> Color {
        color.mix(self.blue, 0.5)
    }
}
