//! The font metrics/drawing seam.
//!
//! The engine never rasterizes glyphs itself. Layout and drawing go through a
//! [`FontService`] passed in by the caller, so the core runs without a
//! rendering backend (see [`RecordingFont`](crate::testing::RecordingFont)).

use crate::color::Rgba;

/// Font metrics and glyph drawing provided by the host renderer.
///
/// `font` is a span's custom font name, or `None` for the default font.
/// Implementations are expected to substitute a fallback for unknown fonts
/// rather than fail.
pub trait FontService {
    /// Size of `text` drawn at `size`, as `(width, height)`.
    fn measure_text(&self, font: Option<&str>, text: &str, size: f32) -> (f32, f32);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, font: Option<&str>, text: &str, x: f32, y: f32, size: f32, rgba: Rgba);
}

impl<T: FontService + ?Sized> FontService for &mut T {
    fn measure_text(&self, font: Option<&str>, text: &str, size: f32) -> (f32, f32) {
        (**self).measure_text(font, text, size)
    }

    fn draw_text(&mut self, font: Option<&str>, text: &str, x: f32, y: f32, size: f32, rgba: Rgba) {
        (**self).draw_text(font, text, x, y, size, rgba)
    }
}

impl<T: FontService + ?Sized> FontService for Box<T> {
    fn measure_text(&self, font: Option<&str>, text: &str, size: f32) -> (f32, f32) {
        (**self).measure_text(font, text, size)
    }

    fn draw_text(&mut self, font: Option<&str>, text: &str, x: f32, y: f32, size: f32, rgba: Rgba) {
        (**self).draw_text(font, text, x, y, size, rgba)
    }
}
