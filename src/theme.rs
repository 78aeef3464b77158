//!
//! The zed theme-file format and writing it out.
//!

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::fs::{File, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};

/// Schema the generated file declares.
pub const THEME_SCHEMA: &str = "https://zed.dev/schema/themes/v0.2.0.json";

/// Theme family, the top level of a theme file.
#[derive(Debug, Serialize)]
pub struct ThemeFamily {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub name: String,
    pub author: String,
    pub themes: Vec<Theme>,
}

/// One theme of a family.
#[derive(Debug, Serialize)]
pub struct Theme {
    pub name: String,
    pub appearance: Appearance,
    pub style: ThemeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

/// Style block of a theme.
///
/// Serializes as a single flat object: players, syntax, then the
/// flattened role colors in tree order.
#[derive(Debug, Serialize)]
pub struct ThemeStyle {
    pub players: Vec<PlayerColor>,
    pub syntax: IndexMap<&'static str, SyntaxStyle>,
    #[serde(flatten)]
    pub colors: IndexMap<String, String>,
}

/// Cursor colors for one collaborator.
#[derive(Debug, Serialize)]
pub struct PlayerColor {
    pub background: String,
    pub cursor: String,
    pub selection: String,
}

/// Highlight for one syntax element.
/// Unset fields serialize as explicit null.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SyntaxStyle {
    pub color: Option<String>,
    pub font_style: Option<&'static str>,
    pub font_weight: Option<u32>,
}

/// Store a theme family as a zed theme file.
pub fn store_theme(family: &ThemeFamily, mut buf: impl io::Write) -> Result<(), io::Error> {
    let json = serde_json::to_string(family).map_err(io::Error::other)?;
    buf.write_all(json.as_bytes())
}

/// Write the theme file for the family under dir, named after
/// the family. Creates the directory if needed.
pub fn save_theme(family: &ThemeFamily, dir: impl AsRef<Path>) -> Result<PathBuf, io::Error> {
    create_dir_all(dir.as_ref())?;

    let file = dir.as_ref().join(format!("{}.json", family.name));
    store_theme(family, File::create(&file)?)?;
    debug!("stored theme {:?}", file);

    Ok(file)
}
