//! Main markup parser for rich text.
//!
//! Combines the lexer and tag parser to produce [`ParsedMarkup`]. Text is
//! buffered under the current [`ParseState`]; every tag flushes the buffer
//! into a span first. Opening tags push a copy of the state, closing tags
//! pop it, so nesting is tracked by depth alone.

use crate::color::Rgba;
use crate::effect::{EffectKind, TextEffect};
use crate::markup::ParsedMarkup;
use crate::span::TextSpan;
use crate::style::TextStyle;

use super::lexer::{Lexer, Token};
use super::tag::{Tag, parse_size, parse_typewriter_speed};

/// Styling in effect at a point of the markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParseState {
    pub style: TextStyle,
    pub font_size_mult: f32,
    pub color: Rgba,
    pub effect_kind: EffectKind,
    pub effect_speed: f32,
}

impl Default for ParseState {
    fn default() -> Self {
        Self {
            style: TextStyle::empty(),
            font_size_mult: 1.0,
            color: Rgba::WHITE,
            effect_kind: EffectKind::None,
            effect_speed: 1.0,
        }
    }
}

impl ParseState {
    /// Default state drawn in `color`.
    pub fn with_color(color: Rgba) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

/// A markup parser seeded with the state text starts in.
///
/// # Examples
///
/// ```
/// use rich::parser::{MarkupParser, ParseState};
/// use rich::Rgba;
///
/// let parser = MarkupParser::with_defaults(ParseState::with_color(Rgba::BLACK));
/// let parsed = parser.parse("plain [color=red]red[/color]");
///
/// assert_eq!(parsed.spans()[0].color(), Rgba::BLACK);
/// assert_eq!(parsed.spans()[1].color(), Rgba::rgb(255, 0, 0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkupParser {
    defaults: ParseState,
}

impl MarkupParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ParseState) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &ParseState {
        &self.defaults
    }

    /// Parse markup into spans, effects and plain text. Never fails.
    pub fn parse(&self, input: &str) -> ParsedMarkup {
        let mut builder = Builder::new(self.defaults);
        for token in Lexer::new(input) {
            builder.process_token(token);
        }
        builder.finish()
    }
}

/// Parse markup with default state.
///
/// # Examples
///
/// ```
/// use rich::parser::parse;
///
/// let parsed = parse("[b]Hi[/b] there");
/// assert_eq!(parsed.text(), "Hi there");
/// assert_eq!(parsed.spans().len(), 2);
/// ```
pub fn parse(input: &str) -> ParsedMarkup {
    MarkupParser::new().parse(input)
}

/// Accumulates spans while walking the token stream.
struct Builder {
    /// State applied to the text currently buffered.
    state: ParseState,
    /// States saved by opening tags.
    stack: Vec<ParseState>,
    /// Text not yet turned into a span.
    buffer: String,
    spans: Vec<TextSpan>,
    effects: Vec<Option<TextEffect>>,
    text: String,
}

impl Builder {
    fn new(state: ParseState) -> Self {
        Self {
            state,
            stack: Vec::new(),
            buffer: String::new(),
            spans: Vec::new(),
            effects: Vec::new(),
            text: String::new(),
        }
    }

    fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) => self.buffer.push_str(text),
            Token::Tag(content) => match Tag::parse(content) {
                Tag::Close(name) => self.process_close_tag(name),
                Tag::Open { name, value } => self.process_open_tag(&name, value),
            },
        }
    }

    fn process_close_tag(&mut self, name: &str) {
        self.flush();
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::debug!("closing tag [/{name}] without an open tag, ignored"),
        }
    }

    fn process_open_tag(&mut self, name: &str, value: Option<&str>) {
        self.flush();
        self.stack.push(self.state);
        self.apply_tag(name, value);
    }

    /// Mutate the current state for an opening tag.
    fn apply_tag(&mut self, name: &str, value: Option<&str>) {
        let state = &mut self.state;

        if let Some(style) = TextStyle::from_tag(name) {
            state.style |= style;
            return;
        }

        match name {
            "color" => match value.map(Rgba::parse) {
                Some(Ok(color)) => state.color = color,
                Some(Err(err)) => log::debug!("[color] {err}, keeping {}", state.color),
                None => log::debug!("[color] without a value, keeping {}", state.color),
            },
            "size" => {
                state.font_size_mult = match value.map(parse_size) {
                    Some(Ok(size)) => size,
                    Some(Err(err)) => {
                        log::debug!("[size] {err}, using 1.0");
                        1.0
                    }
                    None => 1.0,
                };
            }
            "typewriter" => {
                state.effect_kind = EffectKind::Typewriter;
                if let Some(value) = value {
                    state.effect_speed = parse_typewriter_speed(value).unwrap_or_else(|err| {
                        log::debug!("[typewriter] {err}, using speed 1.0");
                        1.0
                    });
                }
            }
            _ => match EffectKind::from_tag(name) {
                Some(kind) => state.effect_kind = kind,
                None => log::debug!("ignoring unknown tag [{name}]"),
            },
        }
    }

    /// Turn the buffered text into a span under the current state.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.buffer);
        let state = self.state;
        let char_count = text.chars().count();

        log::trace!(
            "span {}: {} chars, style={:?}, size={}, color={}, effect={:?}",
            self.spans.len(),
            char_count,
            state.style,
            state.font_size_mult,
            state.color,
            state.effect_kind
        );

        let effect = (state.effect_kind != EffectKind::None).then(|| {
            TextEffect::new(state.effect_kind, state.effect_speed, char_count as u32)
        });

        self.text.push_str(&text);
        self.spans.push(TextSpan::from_parts(
            text,
            state.style,
            state.font_size_mult,
            state.color,
            state.effect_kind,
            state.effect_speed,
        ));
        self.effects.push(effect);
    }

    fn finish(mut self) -> ParsedMarkup {
        self.flush();
        ParsedMarkup::new(self.spans, self.effects, self.text)
    }
}
