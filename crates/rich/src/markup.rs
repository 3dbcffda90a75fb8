//! ParsedMarkup result type.
//!
//! This is the result of parsing rich-text markup.

use crate::effect::TextEffect;
use crate::span::TextSpan;

/// The result of parsing markup.
///
/// Holds the spans in order, one optional effect per span (index-aligned)
/// and the plain text, which is always the concatenation of the span texts.
///
/// # Examples
///
/// ```
/// use rich::ParsedMarkup;
///
/// let parsed = ParsedMarkup::parse("[b]Hello[/b] World");
/// assert_eq!(parsed.text(), "Hello World");
/// assert_eq!(parsed.spans().len(), 2);
/// assert_eq!(parsed.effects().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ParsedMarkup {
    spans: Vec<TextSpan>,
    effects: Vec<Option<TextEffect>>,
    text: String,
}

impl ParsedMarkup {
    pub(crate) fn new(
        spans: Vec<TextSpan>,
        effects: Vec<Option<TextEffect>>,
        text: String,
    ) -> Self {
        debug_assert_eq!(spans.len(), effects.len());
        Self {
            spans,
            effects,
            text,
        }
    }

    /// Parse markup with the default state. Never fails.
    pub fn parse(input: &str) -> Self {
        crate::parser::parse(input)
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all spans.
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Get the effects, index-aligned with [`spans`](Self::spans).
    pub fn effects(&self) -> &[Option<TextEffect>] {
        &self.effects
    }

    /// Get the length of the plain text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the plain text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into `(spans, effects, plain_text)`.
    pub fn into_parts(self) -> (Vec<TextSpan>, Vec<Option<TextEffect>>, String) {
        (self.spans, self.effects, self.text)
    }
}
