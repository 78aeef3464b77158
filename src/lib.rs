//!
//! Generates the Clear Dark theme for the zed editor.
//!
//! [CLEAR_DARK] holds the base colors, [dark_theme] maps them onto
//! the role schema of the theme file, [save_theme] writes the json.
//!
//! ```rust,no_run
//! use clear_theme::{clear_dark, save_theme};
//!
//! let family = clear_dark();
//! save_theme(&family, "themes").expect("write");
//! ```

use crate::theme::{THEME_SCHEMA, ThemeFamily};

mod clear_dark;
mod color;
mod dark_theme;
pub mod palette;
pub mod style;
pub mod theme;

pub use clear_dark::{AUTHOR, CLEAR_DARK};
pub use color::Color;
pub use dark_theme::dark_theme;
pub use theme::{save_theme, store_theme};

/// Builds the Clear Dark theme family.
pub fn clear_dark() -> ThemeFamily {
    ThemeFamily {
        schema: THEME_SCHEMA,
        name: CLEAR_DARK.name.to_string(),
        author: AUTHOR.to_string(),
        themes: vec![dark_theme(CLEAR_DARK.name, &CLEAR_DARK)],
    }
}
