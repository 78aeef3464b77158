use clear_theme::palette::Palette;
use clear_theme::{CLEAR_DARK, Color};

#[test]
fn test_gray_ramp() {
    let p = CLEAR_DARK;

    let mut last = -1.0f32;
    for level in Palette::GRAY_LEVELS {
        let lum = p.gray(level).luminance();
        assert!(lum >= last, "level {}", level);
        last = lum;
    }
}

#[test]
fn test_gray_hex() {
    let p = CLEAR_DARK;

    let expected = [
        (25, "#171719FF"),
        (50, "#1C1C1EFF"),
        (75, "#222224FF"),
        (100, "#28282AFF"),
        (150, "#333335FF"),
        (200, "#3E3E41FF"),
        (250, "#494A4CFF"),
        (300, "#555558FF"),
        (400, "#6B6C6FFF"),
        (500, "#828386FF"),
        (600, "#98999CFF"),
        (700, "#AFB0B3FF"),
        (800, "#C5C7CAFF"),
        (850, "#D0D2D6FF"),
        (900, "#DCDDE1FF"),
        (950, "#E7E9EDFF"),
    ];
    for (level, hex) in expected {
        assert_eq!(p.gray(level).hex(), hex, "level {}", level);
    }
}

#[test]
fn test_mix_identity() {
    let c = Color::rgb(90, 152, 248);
    for ratio in [0.0, 0.1, 0.33, 0.5, 0.77, 1.0] {
        assert_eq!(c.mix(c, ratio), c);
    }
}

#[test]
fn test_mix_endpoints() {
    let black = Color::rgb(17, 17, 19);
    let white = Color::rgb(242, 244, 248);

    assert_eq!(black.mix(white, 0.0), black);
    assert_eq!(black.mix(white, 1.0), white);
    // lands exactly on .5 and rounds up
    assert_eq!(black.mix(white, 0.5).hex(), "#828386FF");
}

#[test]
fn test_fade() {
    let red = Color::rgb(245, 69, 69);

    assert_eq!(red.fade(0.0), red);
    assert_eq!(red.fade(1.0).a, 0.0);
    assert_eq!(red.fade(0.8).hex(), "#F5454533");
    // clamps both ways
    assert_eq!(red.fade(2.0).a, 0.0);
    assert_eq!(red.fade(-2.0).a, 1.0);
}

#[test]
fn test_lighten() {
    let red = Color::rgb(245, 69, 69);
    assert_eq!(red.lighten(0.16).hex(), "#F87575FF");

    // white is already at the top of the lightness range
    let white = Color::rgb(242, 244, 248);
    assert_eq!(white.lighten(0.16).hex(), "#FFFFFFFF");

    // alpha passes through
    assert_eq!(red.fade(0.5).lighten(0.16).hex(), "#F8757580");
}

#[test]
fn test_hex_format() {
    assert_eq!(Color::rgb(17, 17, 19).hex(), "#111113FF");
    assert_eq!(Color::rgb(242, 244, 248).hex(), "#F2F4F8FF");
    assert_eq!(Color::rgba(0, 0, 0, 0.0).hex(), "#00000000");
    assert_eq!(Color::rgba(0, 0, 0, 0.5).hex(), "#00000080");
}

#[test]
fn test_luminance() {
    assert_eq!(Color::rgb(0, 0, 0).luminance(), 0.0);
    assert!((Color::rgb(255, 255, 255).luminance() - 1.0).abs() < 1e-6);
    assert!(Color::rgb(242, 244, 248).luminance() > Color::rgb(17, 17, 19).luminance());
}

#[test]
fn test_accented() {
    let p = CLEAR_DARK;

    assert_eq!(p.accented(p.gray(150)).hex(), "#466697FF");
    assert_eq!(p.accented(p.gray(600)).hex(), "#7999CAFF");
    // accenting the accent is a no-op
    assert_eq!(p.accented(p.blue).hex(), p.blue.hex());
}
