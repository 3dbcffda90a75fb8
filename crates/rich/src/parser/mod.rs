//! Parser for rich-text markup.
//!
//! This module contains the lexer, tag parser, and main markup parser.

mod lexer;
mod markup;
mod tag;

pub use lexer::{Lexer, Token};
pub use markup::{MarkupParser, ParseState, parse};
pub use tag::{Tag, parse_size, parse_typewriter_speed};
