//! Test utilities for snapshot testing rich-text drawing.
//!
//! [`RecordingFont`] is a deterministic monospace [`FontService`]: every
//! scalar is `size * 0.5` wide and `size` tall, and every draw call is
//! recorded instead of rasterized.
//!
//! # Examples
//!
//! ```
//! use rich::RichText;
//! use rich::testing::RecordingFont;
//!
//! let mut text = RichText::from_markup("[color=red]Hi[/color]");
//! text.set_font_size(10.0);
//!
//! let mut font = RecordingFont::new();
//! text.draw(&mut font, 0.0, 0.0);
//!
//! assert_eq!(
//!     font.to_trace(),
//!     "'H' (0.0, 0.0) 10.0 #ff0000ff\n'i' (5.0, 0.0) 10.0 #ff0000ff"
//! );
//! ```

use std::collections::HashMap;

use crate::color::Rgba;
use crate::font::FontService;

/// Width of one scalar as a fraction of the font size.
const DEFAULT_ADVANCE: f32 = 0.5;

/// A single captured `draw_text` call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub font: Option<String>,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rgba: Rgba,
}

/// A font service that records draw calls.
#[derive(Clone, Debug, Default)]
pub struct RecordingFont {
    calls: Vec<DrawCall>,
    /// Per-font advance ratios; fonts not listed use [`DEFAULT_ADVANCE`].
    advances: HashMap<String, f32>,
}

impl RecordingFont {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give a named font its own advance ratio.
    pub fn with_font(mut self, name: impl Into<String>, advance: f32) -> Self {
        self.advances.insert(name.into(), advance);
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text of every drawn call, concatenated.
    pub fn drawn_text(&self) -> String {
        self.calls.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// One line per call: `'ch' (x, y) size #rrggbbaa [font]`.
    pub fn to_trace(&self) -> String {
        self.calls
            .iter()
            .map(|call| {
                let mut chars = call.text.chars();
                let text = match (chars.next(), chars.next()) {
                    (Some(ch), None) => format!("{ch:?}"),
                    _ => format!("{:?}", call.text),
                };
                let font = call
                    .font
                    .as_deref()
                    .map(|font| format!(" {font}"))
                    .unwrap_or_default();
                format!(
                    "{text} ({:.1}, {:.1}) {:.1} {}{font}",
                    call.x, call.y, call.size, call.rgba
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn advance(&self, font: Option<&str>) -> f32 {
        font.and_then(|name| self.advances.get(name))
            .copied()
            .unwrap_or(DEFAULT_ADVANCE)
    }
}

impl FontService for RecordingFont {
    fn measure_text(&self, font: Option<&str>, text: &str, size: f32) -> (f32, f32) {
        let lines = text.split('\n').collect::<Vec<_>>();
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        (
            widest as f32 * size * self.advance(font),
            lines.len() as f32 * size,
        )
    }

    fn draw_text(&mut self, font: Option<&str>, text: &str, x: f32, y: f32, size: f32, rgba: Rgba) {
        self.calls.push(DrawCall {
            font: font.map(str::to_string),
            text: text.to_string(),
            x,
            y,
            size,
            rgba,
        });
    }
}
