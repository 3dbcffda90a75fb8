//! Style types for rich text.
//!
//! [`TextStyle`] is the modifier set a span carries; [`Alignment`] is the
//! horizontal alignment used by the layout pass.

use bitflags::bitflags;

bitflags! {
    /// Text style modifiers, OR'd together as tags nest.
    ///
    /// # Example
    ///
    /// ```
    /// use rich::TextStyle;
    ///
    /// let mut style = TextStyle::empty();
    /// style |= TextStyle::BOLD;
    /// style |= TextStyle::ITALIC;
    ///
    /// assert!(style.contains(TextStyle::BOLD | TextStyle::ITALIC));
    /// assert!(!style.contains(TextStyle::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextStyle: u8 {
        /// `[b]`
        const BOLD          = 0b0000_0001;
        /// `[i]`
        const ITALIC        = 0b0000_0010;
        /// `[u]`
        const UNDERLINE     = 0b0000_0100;
        /// `[s]`
        const STRIKETHROUGH = 0b0000_1000;
    }
}

impl TextStyle {
    /// Map a single-letter style tag name to its modifier.
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "b" => Some(Self::BOLD),
            "i" => Some(Self::ITALIC),
            "u" => Some(Self::UNDERLINE),
            "s" => Some(Self::STRIKETHROUGH),
            _ => None,
        }
    }
}

/// Horizontal alignment of wrapped lines within `max_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Fraction of the leftover line width placed before the line.
    pub(crate) fn factor(self) -> f32 {
        match self {
            Alignment::Left => 0.0,
            Alignment::Center => 0.5,
            Alignment::Right => 1.0,
        }
    }
}
