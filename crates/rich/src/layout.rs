//! Layout configuration and glyph placement.
//!
//! The layout pass walks spans and their Unicode scalars with a single cursor:
//!
//! - `\n` returns the cursor to the left edge and moves down one line.
//! - Any other scalar is placed at the cursor, measured through the
//!   [`FontService`], and the cursor advances by its width. If that pushes the
//!   cursor past `max_width` (when non-zero), the line wraps *after* the
//!   character, so the overflowing glyph stays on the line it started.
//! - Line height is `span size * line_spacing` of the span being walked.
//!
//! Every scalar, newlines included, consumes one global character index.
//! Effects use that index, so timing runs across span boundaries.

use crate::color::Rgba;
use crate::font::FontService;
use crate::span::TextSpan;
use crate::style::Alignment;

/// Layout settings owned by a [`RichText`](crate::RichText).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Base font size; spans multiply it by their size multiplier.
    pub font_size: f32,
    /// Line advance as a multiple of the font size.
    pub line_spacing: f32,
    /// Wrap width in pixels, `0.0` disables wrapping.
    pub max_width: f32,
    pub alignment: Alignment,
    /// Color of text outside any `[color]` tag.
    pub default_color: Rgba,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            line_spacing: 1.2,
            max_width: 0.0,
            alignment: Alignment::Left,
            default_color: Rgba::WHITE,
        }
    }
}

impl LayoutConfig {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_default_color(mut self, default_color: Rgba) -> Self {
        self.default_color = default_color;
        self
    }

    fn wraps(&self) -> bool {
        self.max_width > 0.0
    }
}

/// One positioned character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// Span the character belongs to.
    pub span_index: usize,
    /// Global character index across the whole text.
    pub char_index: u32,
    pub x: f32,
    pub y: f32,
    /// Effective font size (`span multiplier * base size`).
    pub size: f32,
    /// Measured width.
    pub advance: f32,
    /// Measured height.
    pub height: f32,
}

/// Result of the layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    glyphs: Vec<Glyph>,
    origin: (f32, f32),
    line_count: usize,
}

impl Layout {
    /// Lay out `spans` starting at `(x, y)`.
    pub fn compute<F: FontService + ?Sized>(
        spans: &[TextSpan],
        config: &LayoutConfig,
        font: &F,
        x: f32,
        y: f32,
    ) -> Self {
        let mut lines = LineBuilder::new(config, x);
        let mut cursor_y = y;
        let mut char_index: u32 = 0;
        let mut buf = [0u8; 4];

        for (span_index, span) in spans.iter().enumerate() {
            let size = span.font_size_mult() * config.font_size;
            let line_height = size * config.line_spacing;

            for ch in span.text().chars() {
                if ch == '\n' {
                    lines.break_line();
                    cursor_y += line_height;
                } else {
                    let (advance, height) =
                        font.measure_text(span.custom_font(), ch.encode_utf8(&mut buf), size);
                    lines.push(Glyph {
                        ch,
                        span_index,
                        char_index,
                        x: lines.cursor_x,
                        y: cursor_y,
                        size,
                        advance,
                        height,
                    });

                    if config.wraps() && lines.line_width() > config.max_width {
                        lines.break_line();
                        cursor_y += line_height;
                    }
                }
                char_index = char_index.wrapping_add(1);
            }
        }

        lines.finish(x, y)
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of lines, counting explicit newlines and wraps.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Tight `(width, height)` of all glyphs, measured from the origin.
    pub fn bounds(&self) -> (f32, f32) {
        let (ox, oy) = self.origin;
        self.glyphs.iter().fold((0.0f32, 0.0f32), |(w, h), g| {
            (w.max(g.x + g.advance - ox), h.max(g.y + g.height - oy))
        })
    }
}

/// Tracks the current line so it can be aligned once it is finished.
struct LineBuilder {
    glyphs: Vec<Glyph>,
    line_start: usize,
    left: f32,
    cursor_x: f32,
    max_width: f32,
    align: f32,
    line_count: usize,
}

impl LineBuilder {
    fn new(config: &LayoutConfig, left: f32) -> Self {
        let align = if config.wraps() {
            config.alignment.factor()
        } else {
            0.0
        };
        Self {
            glyphs: Vec::new(),
            line_start: 0,
            left,
            cursor_x: left,
            max_width: config.max_width,
            align,
            line_count: 1,
        }
    }

    fn push(&mut self, glyph: Glyph) {
        self.cursor_x += glyph.advance;
        self.glyphs.push(glyph);
    }

    fn line_width(&self) -> f32 {
        self.cursor_x - self.left
    }

    fn break_line(&mut self) {
        self.align_current();
        self.cursor_x = self.left;
        self.line_start = self.glyphs.len();
        self.line_count += 1;
    }

    fn align_current(&mut self) {
        if self.align == 0.0 {
            return;
        }
        let shift = ((self.max_width - self.line_width()) * self.align).max(0.0);
        for glyph in &mut self.glyphs[self.line_start..] {
            glyph.x += shift;
        }
    }

    fn finish(mut self, x: f32, y: f32) -> Layout {
        self.align_current();
        Layout {
            glyphs: self.glyphs,
            origin: (x, y),
            line_count: self.line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::testing::RecordingFont;

    fn layout(markup: &str, config: LayoutConfig) -> Layout {
        let parsed = parse(markup);
        Layout::compute(parsed.spans(), &config, &RecordingFont::new(), 0.0, 0.0)
    }

    fn positions(layout: &Layout) -> Vec<(char, f32, f32)> {
        layout.glyphs().iter().map(|g| (g.ch, g.x, g.y)).collect()
    }

    #[test]
    fn single_line_advances_cursor() {
        let layout = layout("abc", LayoutConfig::default().with_font_size(10.0));
        assert_eq!(
            positions(&layout),
            vec![('a', 0.0, 0.0), ('b', 5.0, 0.0), ('c', 10.0, 0.0)]
        );
        assert_eq!(layout.line_count(), 1);
        assert_eq!(layout.bounds(), (15.0, 10.0));
    }

    #[test]
    fn newline_moves_down_and_consumes_index() {
        let config = LayoutConfig::default()
            .with_font_size(10.0)
            .with_line_spacing(2.0);
        let layout = layout("a\nb", config);

        assert_eq!(positions(&layout), vec![('a', 0.0, 0.0), ('b', 0.0, 20.0)]);
        let indices: Vec<_> = layout.glyphs().iter().map(|g| g.char_index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(layout.line_count(), 2);
    }

    #[test]
    fn wrap_happens_after_overflowing_char() {
        let config = LayoutConfig::default()
            .with_font_size(10.0)
            .with_line_spacing(1.0)
            .with_max_width(12.0);
        let layout = layout("abcd", config);

        // 'c' ends at 15 > 12: it is drawn on line one, then the line wraps.
        assert_eq!(
            positions(&layout),
            vec![
                ('a', 0.0, 0.0),
                ('b', 5.0, 0.0),
                ('c', 10.0, 0.0),
                ('d', 0.0, 10.0),
            ]
        );
    }

    #[test]
    fn span_size_multiplier_applies() {
        let layout = layout("a[size=2]b", LayoutConfig::default().with_font_size(10.0));
        let sizes: Vec<_> = layout.glyphs().iter().map(|g| g.size).collect();
        assert_eq!(sizes, vec![10.0, 20.0]);
        assert_eq!(layout.glyphs()[1].x, 5.0);
        assert_eq!(layout.glyphs()[1].span_index, 1);
    }

    #[test]
    fn center_alignment_shifts_lines() {
        let config = LayoutConfig::default()
            .with_font_size(10.0)
            .with_max_width(20.0)
            .with_alignment(Alignment::Center);
        let layout = layout("ab", config);
        assert_eq!(layout.glyphs()[0].x, 5.0);
        assert_eq!(layout.glyphs()[1].x, 10.0);
    }

    #[test]
    fn right_alignment_per_line() {
        let config = LayoutConfig::default()
            .with_font_size(10.0)
            .with_line_spacing(1.0)
            .with_max_width(20.0)
            .with_alignment(Alignment::Right);
        let layout = layout("ab\nc", config);
        assert_eq!(
            positions(&layout),
            vec![('a', 10.0, 0.0), ('b', 15.0, 0.0), ('c', 15.0, 10.0)]
        );
    }

    #[test]
    fn alignment_ignored_without_wrap_width() {
        let config = LayoutConfig::default()
            .with_font_size(10.0)
            .with_alignment(Alignment::Right);
        let layout = layout("ab", config);
        assert_eq!(layout.glyphs()[0].x, 0.0);
    }

    #[test]
    fn empty_layout() {
        let layout = layout("", LayoutConfig::default());
        assert!(layout.is_empty());
        assert_eq!(layout.bounds(), (0.0, 0.0));
    }
}
