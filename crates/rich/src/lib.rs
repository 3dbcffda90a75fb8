//! Rich-text markup with animated per-character effects.
//!
//! This crate parses BBCode-like markup such as
//! `[b]Hello[/b] [color=red][wave]world[/wave][/color]` into styled spans,
//! animates them with per-character effects, and lays them out for drawing
//! through a caller-supplied font service.
//!
//! # Overview
//!
//! Markup uses square-bracket tags:
//!
//! - `[b]`, `[i]`, `[u]`, `[s]` - bold, italic, underline, strikethrough
//! - `[color=red]`, `[color=#ff8800]`, `[color=f80]` - text color
//! - `[size=1.5]` - font size multiplier
//! - `[shake]`, `[wave]`, `[rainbow]`, `[pulse]`, `[fade]` - effects
//! - `[typewriter]`, `[typewriter speed=50]` - reveal one character at a time
//! - `[/name]` - close the innermost open tag (the name is not checked)
//!
//! Parsing never fails. A `[` with no closing `]` is literal text, unknown
//! tags are ignored (but still nest), and bad attribute values fall back to
//! defaults.
//!
//! # Usage
//!
//! ```
//! use rich::{ParsedMarkup, RichText, TextStyle};
//! use rich::testing::RecordingFont;
//!
//! let parsed = ParsedMarkup::parse("[b]Hi[/b] there");
//! assert_eq!(parsed.text(), "Hi there");
//! assert_eq!(parsed.spans()[0].style(), TextStyle::BOLD);
//!
//! let mut text = RichText::from_markup("[fade]Hello[/fade]");
//! let mut font = RecordingFont::new();
//! text.update(1.0 / 60.0);
//! text.draw(&mut font, 10.0, 10.0);
//! ```

pub mod color;
pub mod effect;
pub mod error;
pub mod font;
pub mod layout;
pub mod markup;
pub mod parser;
pub mod rich_text;
pub mod span;
pub mod style;
pub mod testing;

// Re-export main types at crate root
pub use color::Rgba;
pub use effect::{CustomEffect, EffectKind, Offset, TextEffect};
pub use error::{AttributeError, ColorParseError};
pub use font::FontService;
pub use layout::{Glyph, Layout, LayoutConfig};
pub use markup::ParsedMarkup;
pub use parser::{MarkupParser, ParseState};
pub use rich_text::RichText;
pub use span::TextSpan;
pub use style::{Alignment, TextStyle};
