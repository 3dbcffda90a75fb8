//! Color type for rich text.
//!
//! Supports the fixed named-color table and hex (`#RGB`, `#RRGGBB`,
//! `#RRGGBBAA`) notation.

use crate::error::ColorParseError;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Fixed table of color names accepted by `[color=..]`.
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf::phf_map! {
    "red" => (255, 0, 0),
    "green" => (0, 255, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "white" => (255, 255, 255),
    "black" => (0, 0, 0),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "orange" => (255, 165, 0),
    "purple" => (128, 0, 128),
    "pink" => (255, 192, 203),
};

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns this color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the RGB components, dropping alpha.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse a color value the way `[color=..]` does.
    ///
    /// A leading `#` forces hex parsing. Otherwise the value is tried as
    /// bare hex first (only when it starts with a hex digit) and then looked
    /// up case-insensitively in the named-color table, so `blue` resolves to
    /// the name even though it starts with a hex digit.
    ///
    /// Named and 3/6-digit hex colors are opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::Rgba;
    ///
    /// assert_eq!(Rgba::parse("red").unwrap(), Rgba::rgb(255, 0, 0));
    /// assert_eq!(Rgba::parse("#f80").unwrap(), Rgba::rgb(255, 136, 0));
    /// assert_eq!(Rgba::parse("00FF00").unwrap(), Rgba::rgb(0, 255, 0));
    /// assert!(Rgba::parse("chartreuse").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::from_hex(hex);
        }

        if input.starts_with(|c: char| c.is_ascii_hexdigit()) {
            if let Ok(color) = Self::from_hex(input) {
                return Ok(color);
            }
        }

        Self::named(input)
    }

    /// Parse a hex color (without the `#` prefix).
    ///
    /// `RGB` shorthand duplicates each nibble (`f` becomes `ff`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));

        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;

        match digits.as_slice() {
            [r, g, b] => Ok(Rgba::rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Rgba::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Rgba::new(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
                a1 * 16 + a2,
            )),
            _ => Err(invalid()),
        }
    }

    /// Look up a color name (case-insensitive).
    pub fn named(name: &str) -> Result<Self, ColorParseError> {
        NAMED_COLORS
            .get(name.to_ascii_lowercase().as_str())
            .map(|&(r, g, b)| Rgba::rgb(r, g, b))
            .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }

    /// Linearly blend the RGB channels towards `target` by `t` (0..1).
    /// Alpha is left untouched.
    pub fn lerp_rgb(self, target: (f32, f32, f32), t: f32) -> Self {
        Self {
            r: lerp_channel(self.r, target.0, t),
            g: lerp_channel(self.g, target.1, t),
            b: lerp_channel(self.b, target.2, t),
            a: self.a,
        }
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Blend one 8-bit channel towards a 0..255 float target.
pub fn lerp_channel(from: u8, to: f32, t: f32) -> u8 {
    let from = from as f32;
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

/// Scale an 8-bit alpha by a factor, rounding to nearest.
pub fn scale_alpha(alpha: u8, factor: f32) -> u8 {
    (factor * alpha as f32).round().clamp(0.0, 255.0) as u8
}
