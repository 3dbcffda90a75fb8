//! Lexer for rich-text markup.
//!
//! Converts input text into a stream of tokens. Lexing never fails: a `[`
//! with no later `]` is returned as plain text.

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Tag content without the surrounding brackets: `color=red`, `/b`.
    Tag(&'a str),
}

/// Lexer for rich-text markup.
///
/// # Examples
///
/// ```
/// use rich::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("[b]Hi[/b]").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::Tag("b"), Token::Text("Hi"), Token::Tag("/b")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume text up to the next `[` or end of input.
    fn consume_text(&mut self) -> Token<'a> {
        let rest = self.remaining();
        let len = rest.find('[').unwrap_or(rest.len());
        self.pos += len;
        Token::Text(&rest[..len])
    }

    /// Consume a tag, or the rest of the input when the `[` is unterminated.
    fn consume_tag(&mut self) -> Token<'a> {
        let rest = self.remaining();

        // '[' is one byte, so the content starts at byte 1.
        match rest[1..].find(']') {
            Some(close) => {
                self.pos += close + 2;
                Token::Tag(&rest[1..close + 1])
            }
            None => {
                // No closing bracket anywhere ahead: everything left is literal.
                self.pos = self.input.len();
                Token::Text(rest)
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.remaining().starts_with('[') {
            Some(self.consume_tag())
        } else {
            Some(self.consume_text())
        }
    }
}
