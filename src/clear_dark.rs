//!
//! The Clear Dark color palette.
//!

use crate::Color;
use crate::palette::Palette;

/// Author credited in the generated theme file.
pub const AUTHOR: &str = "Conrad Hale";

/// Clear Dark scheme.
///
/// Near-black neutrals with a slight blue cast, a blue accent and
/// soft pastels for syntax.
pub const CLEAR_DARK: Palette = Palette {
    name: "Clear Dark",

    transparent: Color::rgba(0, 0, 0, 0.0),
    black: Color::rgb(17, 17, 19),
    white: Color::rgb(242, 244, 248),

    red: Color::rgb(245, 69, 69),
    coral: Color::rgb(250, 126, 142),
    auburn: Color::rgb(224, 125, 112),
    orange: Color::rgb(250, 139, 65),
    peach: Color::rgb(253, 207, 148),
    yellow: Color::rgb(242, 212, 82),
    green: Color::rgb(92, 242, 102),
    mint: Color::rgb(148, 246, 156),
    sea: Color::rgb(122, 250, 227),
    cyan: Color::rgb(98, 225, 248),
    slate: Color::rgb(168, 206, 228),
    sky: Color::rgb(180, 203, 250),
    blue: Color::rgb(90, 152, 248),
    indigo: Color::rgb(124, 120, 252),
    violet: Color::rgb(172, 171, 255),
    lavender: Color::rgb(206, 176, 252),
    purple: Color::rgb(213, 138, 255),
    magenta: Color::rgb(242, 75, 147),
    salmon: Color::rgb(250, 175, 175),
};
