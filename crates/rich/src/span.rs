//! Span type for styled runs in parsed markup.

use crate::color::Rgba;
use crate::effect::EffectKind;
use crate::style::TextStyle;

/// A contiguous run of text sharing one style, color and effect.
///
/// Spans own their text. The text is fixed once the parser produces the span
/// (so the owning [`RichText`](crate::RichText)'s plain text stays in sync);
/// the presentation attributes can be changed through the setters.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    text: String,
    style: TextStyle,
    font_size_mult: f32,
    color: Rgba,
    effect_type: EffectKind,
    effect_speed: f32,
    custom_font: Option<String>,
}

impl TextSpan {
    /// Create an unstyled span in the default color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub(crate) fn from_parts(
        text: String,
        style: TextStyle,
        font_size_mult: f32,
        color: Rgba,
        effect_type: EffectKind,
        effect_speed: f32,
    ) -> Self {
        Self {
            text,
            style,
            font_size_mult,
            color,
            effect_type,
            effect_speed,
            custom_font: None,
        }
    }

    /// Record which effect drives this span; `None` clears it.
    pub(crate) fn set_effect_binding(&mut self, effect_type: EffectKind, effect_speed: f32) {
        self.effect_type = effect_type;
        self.effect_speed = effect_speed;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of Unicode scalars in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn is_bold(&self) -> bool {
        self.style.contains(TextStyle::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.style.contains(TextStyle::ITALIC)
    }

    pub fn is_underline(&self) -> bool {
        self.style.contains(TextStyle::UNDERLINE)
    }

    pub fn is_strikethrough(&self) -> bool {
        self.style.contains(TextStyle::STRIKETHROUGH)
    }

    /// Multiplier applied to the owner's base font size.
    pub fn font_size_mult(&self) -> f32 {
        self.font_size_mult
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn effect_type(&self) -> EffectKind {
        self.effect_type
    }

    pub fn effect_speed(&self) -> f32 {
        self.effect_speed
    }

    pub fn custom_font(&self) -> Option<&str> {
        self.custom_font.as_deref()
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Set the size multiplier. Non-positive values are ignored.
    pub fn set_font_size_mult(&mut self, mult: f32) {
        if mult.is_finite() && mult > 0.0 {
            self.font_size_mult = mult;
        }
    }

    /// Draw this span with a named font instead of the default one.
    pub fn set_custom_font(&mut self, font: Option<String>) {
        self.custom_font = font;
    }
}

impl Default for TextSpan {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: TextStyle::empty(),
            font_size_mult: 1.0,
            color: Rgba::WHITE,
            effect_type: EffectKind::None,
            effect_speed: 1.0,
            custom_font: None,
        }
    }
}
