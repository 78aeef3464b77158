//!
//! Maps a palette onto the role schema of a dark theme.
//!

use crate::Color;
use crate::palette::Palette;
use crate::style::StyleTree;
use crate::styles;
use crate::theme::{Appearance, PlayerColor, SyntaxStyle, Theme, ThemeStyle};
use indexmap::IndexMap;
use log::debug;

/// Builds the dark theme for the given palette.
pub fn dark_theme(name: &str, p: &Palette) -> Theme {
    debug!("build dark theme {:?}", name);
    Theme {
        name: name.to_string(),
        appearance: Appearance::Dark,
        style: ThemeStyle {
            players: players(p),
            syntax: syntax(p),
            colors: theme_colors(p).flatten(),
        },
    }
}

/// The full role tree.
fn theme_colors(p: &Palette) -> StyleTree {
    let mut tree = styles! {
        "background" => p.gray(25),
        "foreground" => p.white,
        "tab" => styles! {
            "active_background" => p.gray(50),
            "inactive_background" => p.gray(25),
        },
        "tab_bar" => styles! {
            "background" => p.gray(25),
        },
        "title_bar" => styles! {
            "background" => p.gray(25),
        },
        "toolbar" => styles! {
            "background" => p.gray(50),
        },
        "drop_target" => styles! {
            "background" => p.gray(200),
        },
        "border" => styles! {
            "" => p.gray(150),
            "transparent" => p.transparent,
            "disabled" => p.gray(75),
            "focused" => p.accented(p.gray(150)),
            "selected" => p.accented(p.gray(150)),
            "variant" => p.gray(200),
        },
        "element" => styles! {
            "background" => p.gray(75),
            "hover" => p.gray(150),
            "active" => p.gray(250),
            "selected" => p.accented(p.gray(75)),
            "disabled" => p.gray(50),
        },
        "ghost_element" => styles! {
            "background" => p.transparent,
            "hover" => p.gray(100),
            "active" => p.gray(200),
            "selected" => p.accented(p.gray(25)),
            "disabled" => p.transparent,
        },
        "editor" => styles! {
            "background" => p.gray(25),
            "foreground" => p.white,
            "line_number" => p.gray(400),
            "active_line_number" => p.gray(900),
            "wrap_guide" => p.gray(200),
            "active_wrap_guide" => p.gray(300),
            "invisible" => p.gray(250).fade(0.5),
            "document_highlight" => styles! {
                "read_background" => p.accented(p.white).fade(0.95),
                "write_background" => p.accented(p.white).fade(0.8),
            },
            "active_line" => styles! {
                "background" => p.gray(75),
            },
            "highlighted_line" => styles! {
                "background" => p.gray(50),
            },
            "gutter" => styles! {
                "background" => p.gray(25),
            },
            "subheader" => styles! {
                "background" => p.gray(25),
            },
        },
        "icon" => text_colors(p),
        "text" => text_colors(p),
        "scrollbar" => styles! {
            "thumb" => styles! {
                "border" => p.gray(500),
                "background" => p.gray(300).fade(0.7),
                "hover_background" => p.gray(300).fade(0.45),
            },
            "track" => styles! {
                "background" => p.gray(25),
                "border" => p.gray(150),
            },
        },
        "link_text" => styles! {
            "hover" => p.blue,
        },
        "panel" => styles! {
            "background" => p.gray(50),
            "focused_border" => p.blue,
        },
        "pane" => styles! {
            "focused_border" => p.blue,
        },
        "status_bar" => styles! {
            "background" => p.gray(50),
        },
        "surface" => styles! {
            "background" => p.gray(25),
        },
        "elevated_surface" => styles! {
            "background" => p.gray(50),
        },
        "search" => styles! {
            "match_background" => p.accented(p.gray(25)).fade(0.5),
        },
    };
    status_colors(p, &mut tree);
    tree.insert("terminal", terminal(p));
    tree
}

/// Shared block for the icon and text roles.
fn text_colors(p: &Palette) -> StyleTree {
    styles! {
        "" => p.white,
        "muted" => p.gray(800),
        "disabled" => p.gray(500),
        "placeholder" => p.gray(500),
        "accent" => p.accented(p.gray(600)),
    }
}

/// Status colors. Each role contributes the bare color plus
/// derived background and border entries.
fn status_colors(p: &Palette, tree: &mut StyleTree) {
    let status = [
        ("created", p.green),
        ("conflict", p.yellow),
        ("deleted", p.red),
        ("success", p.green),
        ("warning", p.yellow),
        ("error", p.red),
        ("modified", p.yellow),
        ("renamed", p.blue),
        ("info", p.blue),
        ("hint", p.violet),
        ("predictive", p.accented(p.gray(500))),
        ("unreachable", p.gray(700)),
        ("ignored", p.gray(500)),
        ("hidden", p.gray(500)),
    ];
    for (role, color) in status {
        tree.insert(role, color);
        tree.insert(format!("{}.background", role), color.fade(0.8));
        tree.insert(format!("{}.border", role), color.mix(p.gray(25), 0.6));
    }
}

/// Terminal colors. Every ansi color gets a dim and a bright
/// variant next to it.
fn terminal(p: &Palette) -> StyleTree {
    let mut ansi = StyleTree::new();
    let base = [
        ("black", p.black),
        ("blue", p.blue),
        ("cyan", p.cyan),
        ("green", p.green),
        ("magenta", p.purple),
        ("red", p.red),
        ("white", p.white),
        ("yellow", p.yellow),
    ];
    for (name, color) in base {
        ansi.insert(name, color);
        ansi.insert(format!("dim_{}", name), color.mix(p.gray(25), 0.5));
        ansi.insert(format!("bright_{}", name), color.lighten(0.16));
    }

    let mut tree = styles! {
        "background" => p.gray(25),
        "foreground" => p.gray(900),
        "dim_foreground" => p.gray(600),
        "bright_foreground" => p.white,
    };
    tree.insert("ansi", ansi);
    tree
}

/// Collaborator cursor colors.
fn players(p: &Palette) -> Vec<PlayerColor> {
    [
        p.blue, p.magenta, p.cyan, p.purple, p.orange, p.green, p.yellow, p.red,
    ]
    .into_iter()
    .map(|color| PlayerColor {
        background: color.hex(),
        cursor: color.hex(),
        selection: color.fade(0.8).hex(),
    })
    .collect()
}

/// Syntax highlighting. The map keeps the order of the theme file.
fn syntax(p: &Palette) -> IndexMap<&'static str, SyntaxStyle> {
    let plain = |color: Color| SyntaxStyle {
        color: Some(color.hex()),
        ..Default::default()
    };

    IndexMap::from([
        ("attribute", plain(p.violet)),
        ("boolean", plain(p.indigo)),
        (
            "comment",
            SyntaxStyle {
                color: Some(p.gray(600).hex()),
                font_style: Some("italic"),
                ..Default::default()
            },
        ),
        (
            "comment.doc",
            SyntaxStyle {
                color: Some(p.gray(600).hex()),
                font_style: Some("italic"),
                font_weight: Some(400),
            },
        ),
        (
            "constant",
            SyntaxStyle {
                color: Some(p.blue.hex()),
                font_weight: Some(400),
                ..Default::default()
            },
        ),
        ("constructor", plain(p.slate)),
        ("embedded", plain(p.blue)),
        (
            "emphasis",
            SyntaxStyle {
                color: Some(p.blue.hex()),
                font_style: Some("italic"),
                ..Default::default()
            },
        ),
        (
            "emphasis.strong",
            SyntaxStyle {
                color: Some(p.blue.hex()),
                font_weight: Some(700),
                ..Default::default()
            },
        ),
        (
            "enum",
            SyntaxStyle {
                color: Some(p.blue.hex()),
                font_weight: Some(700),
                ..Default::default()
            },
        ),
        ("function", plain(p.violet)),
        ("function.method", plain(p.lavender)),
        ("function.special.definition", plain(p.coral)),
        ("keyword", plain(p.auburn)),
        ("label", plain(p.magenta)),
        ("link_text", plain(p.cyan)),
        ("link_uri", plain(p.cyan)),
        ("number", plain(p.white)),
        ("operator", plain(p.coral)),
        ("predictive", plain(p.accented(p.gray(500)))),
        ("preproc", plain(p.gray(700))),
        ("primary", plain(p.blue)),
        ("property", plain(p.sky)),
        ("punctuation", plain(p.gray(800))),
        ("punctuation.bracket", plain(p.salmon)),
        ("punctuation.delimiter", plain(p.gray(700))),
        ("punctuation.list_marker", plain(p.gray(700))),
        ("punctuation.special", plain(p.salmon)),
        ("string", plain(p.peach)),
        ("string.escape", plain(p.coral)),
        ("string.regex", plain(p.mint)),
        ("string.special", plain(p.violet)),
        ("string.special.symbol", plain(p.lavender)),
        ("tag", plain(p.sky)),
        ("text.literal", plain(p.blue)),
        (
            "title",
            SyntaxStyle {
                color: Some(p.magenta.hex()),
                font_weight: Some(700),
                ..Default::default()
            },
        ),
        ("type", plain(p.mint)),
        ("type.builtin", plain(p.mint)),
        ("variable", plain(p.sea)),
        ("variable.special", plain(p.coral)),
    ])
}
