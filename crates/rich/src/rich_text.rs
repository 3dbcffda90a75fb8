//! The rich-text layout and draw driver.
//!
//! [`RichText`] owns the parsed spans, their effects and the layout
//! configuration. A frame is one [`update`](RichText::update) followed by any
//! number of [`draw`](RichText::draw) calls; drawing only reads state, so
//! repeated draws within a frame produce identical output.

use crate::color::Rgba;
use crate::effect::{EffectKind, Offset, TextEffect};
use crate::font::FontService;
use crate::layout::{Layout, LayoutConfig};
use crate::parser::{MarkupParser, ParseState};
use crate::span::TextSpan;
use crate::style::Alignment;

/// Parsed markup plus everything needed to animate and draw it.
///
/// # Examples
///
/// ```
/// use rich::RichText;
/// use rich::testing::RecordingFont;
///
/// let mut text = RichText::from_markup("[typewriter]Hello[/typewriter]");
/// let mut font = RecordingFont::new();
///
/// text.update(0.1);
/// text.draw(&mut font, 0.0, 0.0);
/// assert_eq!(font.drawn_text(), "He");
///
/// text.update(1.0);
/// assert!(text.effects_complete());
/// ```
#[derive(Debug, Default)]
pub struct RichText {
    spans: Vec<TextSpan>,
    /// Index-aligned with `spans`.
    effects: Vec<Option<TextEffect>>,
    plain_text: String,
    config: LayoutConfig,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn from_markup(markup: &str) -> Self {
        let mut text = Self::new();
        text.set_markup(markup);
        text
    }

    /// Replace the content, parsing `markup` with the configured default color.
    pub fn set_markup(&mut self, markup: &str) {
        let defaults = ParseState::with_color(self.config.default_color);
        let (spans, effects, plain_text) = MarkupParser::with_defaults(defaults)
            .parse(markup)
            .into_parts();

        self.spans = spans;
        self.effects = effects;
        self.plain_text = plain_text;

        log::debug!(
            "set_markup: {} spans ({} with effects), {} chars",
            self.spans.len(),
            self.effects.iter().flatten().count(),
            self.plain_text.chars().count()
        );
    }

    /// Remove all content, keeping the configuration.
    pub fn clear(&mut self) {
        self.spans.clear();
        self.effects.clear();
        self.plain_text.clear();
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Number of Unicode scalars in the plain text.
    pub fn char_count(&self) -> usize {
        self.plain_text.chars().count()
    }

    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    pub fn span(&self, index: usize) -> Option<&TextSpan> {
        self.spans.get(index)
    }

    /// Mutable access to a span's presentation attributes.
    pub fn span_mut(&mut self, index: usize) -> Option<&mut TextSpan> {
        self.spans.get_mut(index)
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// The effect attached to span `index`, if any.
    pub fn effect(&self, index: usize) -> Option<&TextEffect> {
        self.effects.get(index).and_then(Option::as_ref)
    }

    pub fn effect_mut(&mut self, index: usize) -> Option<&mut TextEffect> {
        self.effects.get_mut(index).and_then(Option::as_mut)
    }

    /// Attach, replace or (with `None`) remove the effect on span `index`.
    ///
    /// The effect is rebound to the span: its character count becomes the
    /// span's length, and the span's effect type and speed follow it.
    /// Returns `false` if there is no such span.
    pub fn set_effect(&mut self, index: usize, mut effect: Option<TextEffect>) -> bool {
        let (Some(span), Some(slot)) = (self.spans.get_mut(index), self.effects.get_mut(index))
        else {
            return false;
        };

        match &mut effect {
            Some(effect) => {
                effect.set_char_count(span.char_count() as u32);
                span.set_effect_binding(effect.kind(), effect.speed());
            }
            None => span.set_effect_binding(EffectKind::None, 1.0),
        }
        *slot = effect;
        true
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    pub fn font_size(&self) -> f32 {
        self.config.font_size
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.config.font_size = font_size;
    }

    pub fn line_spacing(&self) -> f32 {
        self.config.line_spacing
    }

    pub fn set_line_spacing(&mut self, line_spacing: f32) {
        self.config.line_spacing = line_spacing;
    }

    pub fn max_width(&self) -> f32 {
        self.config.max_width
    }

    /// Wrap width in pixels; `0.0` disables wrapping.
    pub fn set_max_width(&mut self, max_width: f32) {
        self.config.max_width = max_width;
    }

    pub fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.alignment = alignment;
    }

    pub fn default_color(&self) -> Rgba {
        self.config.default_color
    }

    /// Takes effect on the next [`set_markup`](Self::set_markup).
    pub fn set_default_color(&mut self, color: Rgba) {
        self.config.default_color = color;
    }

    /// Advance every effect's clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for effect in self.effects.iter_mut().flatten() {
            effect.update(dt);
        }
    }

    /// Rewind every effect.
    pub fn reset_effects(&mut self) {
        for effect in self.effects.iter_mut().flatten() {
            effect.reset();
        }
    }

    /// True when every present effect is complete. Spans without an effect
    /// count as complete, so text with no effects is always complete.
    pub fn effects_complete(&self) -> bool {
        self.effects.iter().flatten().all(TextEffect::is_complete)
    }

    /// Place every glyph starting at `(x, y)`, without effects.
    pub fn layout<F: FontService + ?Sized>(&self, font: &F, x: f32, y: f32) -> Layout {
        Layout::compute(&self.spans, &self.config, font, x, y)
    }

    /// Draw the text with its top-left corner at `(x, y)`.
    ///
    /// Each glyph starts at its layout position in its span's color; the span's
    /// effect then adjusts offset and color. Glyphs left fully transparent are
    /// skipped but still advance the cursor.
    pub fn draw<F: FontService + ?Sized>(&self, font: &mut F, x: f32, y: f32) {
        let layout = self.layout(&*font, x, y);
        let mut buf = [0u8; 4];

        for glyph in layout.glyphs() {
            let span = &self.spans[glyph.span_index];
            let mut offset = Offset::ZERO;
            let mut rgba = span.color();

            if let Some(effect) = &self.effects[glyph.span_index] {
                effect.apply(glyph.char_index, &mut offset, &mut rgba);
            }

            if rgba.a > 0 {
                font.draw_text(
                    span.custom_font(),
                    glyph.ch.encode_utf8(&mut buf),
                    glyph.x + offset.x,
                    glyph.y + offset.y,
                    glyph.size,
                    rgba,
                );
            }
        }
    }

    /// Coarse size of the plain text at the base font size.
    ///
    /// Ignores per-span sizes, fonts and wrapping; see
    /// [`measure_layout`](Self::measure_layout) for the exact bounds.
    pub fn measure<F: FontService + ?Sized>(&self, font: &F) -> (f32, f32) {
        font.measure_text(None, &self.plain_text, self.config.font_size)
    }

    /// Tight bounds of the laid-out glyphs.
    pub fn measure_layout<F: FontService + ?Sized>(&self, font: &F) -> (f32, f32) {
        self.layout(font, 0.0, 0.0).bounds()
    }
}
