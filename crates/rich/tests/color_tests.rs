//! Comprehensive tests for the Rgba color type.

use rich::{ColorParseError, Rgba};

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn parse_named_table() {
    let table = [
        ("red", (255, 0, 0)),
        ("green", (0, 255, 0)),
        ("blue", (0, 0, 255)),
        ("yellow", (255, 255, 0)),
        ("cyan", (0, 255, 255)),
        ("magenta", (255, 0, 255)),
        ("white", (255, 255, 255)),
        ("black", (0, 0, 0)),
        ("gray", (128, 128, 128)),
        ("grey", (128, 128, 128)),
        ("orange", (255, 165, 0)),
        ("purple", (128, 0, 128)),
        ("pink", (255, 192, 203)),
    ];

    for (name, (r, g, b)) in table {
        assert_eq!(Rgba::parse(name), Ok(Rgba::rgb(r, g, b)), "{name}");
    }
}

#[test]
fn parse_case_insensitive() {
    assert_eq!(Rgba::parse("RED").unwrap(), Rgba::rgb(255, 0, 0));
    assert_eq!(Rgba::parse("Red").unwrap(), Rgba::rgb(255, 0, 0));
    assert_eq!(Rgba::parse("rEd").unwrap(), Rgba::rgb(255, 0, 0));
}

#[test]
fn parse_with_whitespace() {
    assert_eq!(Rgba::parse("  red  ").unwrap(), Rgba::rgb(255, 0, 0));
    assert_eq!(Rgba::parse("\tblue\t").unwrap(), Rgba::rgb(0, 0, 255));
}

#[test]
fn names_outside_table_are_rejected() {
    for name in ["teal", "navy", "bright_red", "rebeccapurple", ""] {
        assert!(
            matches!(Rgba::parse(name), Err(ColorParseError::UnknownName(_))),
            "{name}"
        );
    }
}

#[test]
fn named_only_lookup() {
    assert_eq!(Rgba::named("Grey"), Ok(Rgba::rgb(128, 128, 128)));
    assert!(Rgba::named("#fff").is_err());
}

// ============================================================================
// Hex Colors
// ============================================================================

#[test]
fn parse_hex_shorthand_duplicates_nibbles() {
    assert_eq!(Rgba::parse("#123").unwrap(), Rgba::rgb(0x11, 0x22, 0x33));
    assert_eq!(Rgba::parse("#FfF").unwrap(), Rgba::WHITE);
}

#[test]
fn parse_hex_six_digits() {
    assert_eq!(Rgba::parse("#ff5733").unwrap(), Rgba::rgb(255, 87, 51));
    assert_eq!(Rgba::parse("#FF5733").unwrap(), Rgba::rgb(255, 87, 51));
}

#[test]
fn parse_hex_eight_digits_sets_alpha() {
    assert_eq!(Rgba::parse("#11223344").unwrap(), Rgba::new(0x11, 0x22, 0x33, 0x44));
}

#[test]
fn hex_without_hash() {
    assert_eq!(Rgba::parse("ff0000").unwrap(), Rgba::rgb(255, 0, 0));
    assert_eq!(Rgba::parse("0f0").unwrap(), Rgba::rgb(0, 255, 0));
}

#[test]
fn parse_hex_invalid() {
    for input in ["#", "#f", "#ff", "#ffff", "#fffff", "#ggg", "#12345z"] {
        assert!(
            matches!(Rgba::parse(input), Err(ColorParseError::InvalidHex(_))),
            "{input}"
        );
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        Rgba::parse("nope").unwrap_err().to_string(),
        "unknown color name: nope"
    );
    assert_eq!(
        Rgba::from_hex("12").unwrap_err().to_string(),
        "invalid hex color: #12"
    );
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn with_alpha_keeps_rgb() {
    let c = Rgba::rgb(1, 2, 3).with_alpha(9);
    assert_eq!(c, Rgba::new(1, 2, 3, 9));
    assert_eq!(c.to_rgb(), (1, 2, 3));
}

#[test]
fn from_tuple() {
    assert_eq!(Rgba::from((1, 2, 3, 4)), Rgba::new(1, 2, 3, 4));
}

#[test]
fn constants() {
    assert_eq!(Rgba::WHITE.a, 255);
    assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
    assert_eq!(Rgba::TRANSPARENT.a, 0);
}
