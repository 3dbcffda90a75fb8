//! Time-driven per-character text effects.
//!
//! A [`TextEffect`] is bound to one span. Each frame the owner calls
//! [`TextEffect::update`] once to advance the clock, then calls
//! [`TextEffect::apply`] for every visible character. `apply` only reads the
//! state fixed by the last `update`, so drawing the same frame twice yields
//! identical output.
//!
//! Effects are a closed set ([`EffectKind`]) dispatched with a single `match`;
//! [`EffectKind::Custom`] delegates to a caller-supplied [`CustomEffect`].
//!
//! # Completion
//!
//! `Typewriter` and `FadeIn` are *finite*: they report
//! [`is_complete`](TextEffect::is_complete) once every character of their span
//! is fully revealed. All other kinds run forever.

use std::fmt;

use crate::color::{Rgba, scale_alpha};

/// Seed restored by [`TextEffect::reset`].
pub const RESET_SEED: u32 = 42;

/// Characters revealed per second by a typewriter at speed 1.0.
const TYPEWRITER_RATE: f32 = 20.0;
/// Per-character start delay of a fade-in at speed 1.0, in seconds.
const FADE_CHAR_DELAY: f32 = 0.05;
/// Time for one character to fade fully in at speed 1.0, in seconds.
const FADE_DURATION: f32 = 0.5;
/// Multiplier mixing the character index into the shake seed.
const SHAKE_INDEX_SALT: u32 = 12345;

/// The kind of animation attached to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectKind {
    #[default]
    None,
    Shake,
    Wave,
    Rainbow,
    Typewriter,
    FadeIn,
    Pulse,
    Custom,
}

impl EffectKind {
    /// Map an effect tag name to its kind.
    ///
    /// `Custom` has no tag; it is attached programmatically.
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "shake" => Some(Self::Shake),
            "wave" => Some(Self::Wave),
            "rainbow" => Some(Self::Rainbow),
            "typewriter" => Some(Self::Typewriter),
            "fade" => Some(Self::FadeIn),
            "pulse" => Some(Self::Pulse),
            _ => None,
        }
    }

    /// Returns true for effects with an end condition.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Typewriter | Self::FadeIn)
    }
}

/// Per-character draw offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Caller-supplied behavior for [`EffectKind::Custom`].
///
/// Implemented for any `Fn(elapsed, char_index, &mut Offset, &mut Rgba)`
/// closure.
pub trait CustomEffect: Send {
    fn apply(&self, elapsed: f32, char_index: u32, offset: &mut Offset, rgba: &mut Rgba);
}

impl<F> CustomEffect for F
where
    F: Fn(f32, u32, &mut Offset, &mut Rgba) + Send,
{
    fn apply(&self, elapsed: f32, char_index: u32, offset: &mut Offset, rgba: &mut Rgba) {
        self(elapsed, char_index, offset, rgba)
    }
}

/// A stateful animator for one span.
pub struct TextEffect {
    kind: EffectKind,
    speed: f32,
    intensity: f32,
    elapsed: f32,
    char_count: u32,
    complete: bool,
    rng_seed: u32,
    custom: Option<Box<dyn CustomEffect>>,
}

impl TextEffect {
    /// Create an effect for a span of `char_count` Unicode scalars.
    ///
    /// Non-positive or non-finite speeds fall back to 1.0.
    pub fn new(kind: EffectKind, speed: f32, char_count: u32) -> Self {
        Self {
            kind,
            speed: sanitize_speed(speed),
            intensity: 1.0,
            elapsed: 0.0,
            char_count,
            complete: false,
            rng_seed: RESET_SEED,
            custom: None,
        }
    }

    /// Create a [`EffectKind::Custom`] effect driven by `handler`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::{EffectKind, Offset, Rgba, TextEffect};
    ///
    /// let mut effect = TextEffect::custom(
    ///     |elapsed: f32, _index: u32, offset: &mut Offset, _rgba: &mut Rgba| {
    ///         offset.x += elapsed;
    ///     },
    ///     3,
    /// );
    /// effect.update(0.5);
    ///
    /// let mut offset = Offset::ZERO;
    /// let mut rgba = Rgba::WHITE;
    /// effect.apply(0, &mut offset, &mut rgba);
    /// assert_eq!(effect.kind(), EffectKind::Custom);
    /// assert_eq!(offset.x, 0.5);
    /// ```
    pub fn custom(handler: impl CustomEffect + 'static, char_count: u32) -> Self {
        Self {
            custom: Some(Box::new(handler)),
            ..Self::new(EffectKind::Custom, 1.0, char_count)
        }
    }

    /// Builder-style intensity setter.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.set_intensity(intensity);
        self
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the speed; non-positive values are ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() && speed > 0.0 {
            self.speed = speed;
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Change the intensity, clamped to `0..=1`.
    pub fn set_intensity(&mut self, intensity: f32) {
        if intensity.is_finite() {
            self.intensity = intensity.clamp(0.0, 1.0);
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn char_count(&self) -> u32 {
        self.char_count
    }

    pub fn rng_seed(&self) -> u32 {
        self.rng_seed
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance the clock by `dt` seconds and re-evaluate completion.
    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).max(0.0);
        self.rng_seed = (self.elapsed * 1000.0).floor() as u32;
        self.refresh_complete();
    }

    /// Rebind the effect to a span of `char_count` scalars.
    pub(crate) fn set_char_count(&mut self, char_count: u32) {
        self.char_count = char_count;
        self.refresh_complete();
    }

    fn refresh_complete(&mut self) {
        let complete = match self.kind {
            EffectKind::Typewriter => self.revealed_chars() >= self.char_count,
            EffectKind::FadeIn => self.elapsed >= self.fade_in_duration(),
            EffectKind::None
            | EffectKind::Shake
            | EffectKind::Wave
            | EffectKind::Rainbow
            | EffectKind::Pulse
            | EffectKind::Custom => false,
        };

        if complete && !self.complete {
            log::trace!(
                "{:?} effect complete after {:.3}s ({} chars)",
                self.kind,
                self.elapsed,
                self.char_count
            );
        }
        self.complete = complete;
    }

    /// Mutate the offset and color of the character at `char_index`
    /// (a global index across the whole text).
    pub fn apply(&self, char_index: u32, offset: &mut Offset, rgba: &mut Rgba) {
        let index = char_index as f32;

        match self.kind {
            EffectKind::None => {}
            EffectKind::Shake => {
                let seed = self
                    .rng_seed
                    .wrapping_add(char_index.wrapping_mul(SHAKE_INDEX_SALT));
                let mut rng = XorShift32::new(seed);
                let amplitude = self.intensity * 4.0;
                offset.x += (rng.next_f32() - 0.5) * amplitude;
                offset.y += (rng.next_f32() - 0.5) * amplitude;
            }
            EffectKind::Wave => {
                let phase = self.elapsed * self.speed * 4.0 + index * 0.3;
                offset.y += phase.sin() * self.intensity * 6.0;
            }
            EffectKind::Rainbow => {
                let hue = (self.elapsed * self.speed + index * 0.1).rem_euclid(1.0);
                let (kr, kg, kb) = hue_to_rgb(hue);
                *rgba = rgba.lerp_rgb((kr * 255.0, kg * 255.0, kb * 255.0), self.intensity);
            }
            EffectKind::Typewriter => {
                if char_index >= self.revealed_chars() {
                    rgba.a = 0;
                }
            }
            EffectKind::FadeIn => {
                let char_delay = index * FADE_CHAR_DELAY / self.speed;
                let t = self.elapsed - char_delay;
                if t < 0.0 {
                    rgba.a = 0;
                } else {
                    let progress = (t * self.speed * 2.0).clamp(0.0, 1.0);
                    rgba.a = scale_alpha(rgba.a, progress * self.intensity);
                }
            }
            EffectKind::Pulse => {
                let phase = self.elapsed * self.speed * 4.0;
                let pulse = (1.0 - self.intensity) + self.intensity * (phase.sin() + 1.0) / 2.0;
                rgba.a = scale_alpha(rgba.a, pulse);
            }
            EffectKind::Custom => {
                if let Some(handler) = &self.custom {
                    handler.apply(self.elapsed, char_index, offset, rgba);
                }
            }
        }
    }

    /// Rewind to the start of the animation.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.complete = false;
        self.rng_seed = RESET_SEED;
    }

    /// Number of characters a typewriter has revealed so far.
    fn revealed_chars(&self) -> u32 {
        (self.elapsed * self.speed * TYPEWRITER_RATE).floor() as u32
    }

    /// Time until the last character of a fade-in is fully opaque.
    fn fade_in_duration(&self) -> f32 {
        self.char_count as f32 * FADE_CHAR_DELAY / self.speed + FADE_DURATION / self.speed
    }
}

impl fmt::Debug for TextEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEffect")
            .field("kind", &self.kind)
            .field("speed", &self.speed)
            .field("intensity", &self.intensity)
            .field("elapsed", &self.elapsed)
            .field("char_count", &self.char_count)
            .field("complete", &self.complete)
            .field("rng_seed", &self.rng_seed)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

pub(crate) fn sanitize_speed(speed: f32) -> f32 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        1.0
    }
}

/// Fast fully-saturated HSV to RGB using triangle waves. Each channel is in `0..=1`.
fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    let h6 = hue * 6.0;
    let r = ((h6 - 3.0).abs() - 1.0).clamp(0.0, 1.0);
    let g = (2.0 - (h6 - 2.0).abs()).clamp(0.0, 1.0);
    let b = (2.0 - (h6 - 4.0).abs()).clamp(0.0, 1.0);
    (r, g, b)
}

/// Small deterministic generator; one is created per character per draw.
struct XorShift32(u32);

impl XorShift32 {
    fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 0x9E37_79B9 } else { seed })
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform float in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(effect: &TextEffect, index: u32) -> (Offset, Rgba) {
        let mut offset = Offset::ZERO;
        let mut rgba = Rgba::WHITE;
        effect.apply(index, &mut offset, &mut rgba);
        (offset, rgba)
    }

    #[test]
    fn none_leaves_glyph_untouched() {
        let mut effect = TextEffect::new(EffectKind::None, 1.0, 4);
        effect.update(1.0);
        assert_eq!(apply(&effect, 2), (Offset::ZERO, Rgba::WHITE));
        assert!(!effect.is_complete());
    }

    #[test]
    fn new_sanitizes_speed() {
        assert_eq!(TextEffect::new(EffectKind::Wave, 0.0, 1).speed(), 1.0);
        assert_eq!(TextEffect::new(EffectKind::Wave, -2.0, 1).speed(), 1.0);
        assert_eq!(TextEffect::new(EffectKind::Wave, f32::NAN, 1).speed(), 1.0);
        assert_eq!(TextEffect::new(EffectKind::Wave, 2.5, 1).speed(), 2.5);
    }

    #[test]
    fn update_recomputes_seed_from_elapsed() {
        let mut effect = TextEffect::new(EffectKind::Shake, 1.0, 3);
        assert_eq!(effect.rng_seed(), RESET_SEED);
        effect.update(0.5);
        assert_eq!(effect.rng_seed(), 500);
    }

    #[test]
    fn shake_is_deterministic_and_bounded() {
        let mut effect = TextEffect::new(EffectKind::Shake, 1.0, 10);
        effect.update(0.123);

        for index in 0..10 {
            let (a, _) = apply(&effect, index);
            let (b, _) = apply(&effect, index);
            assert_eq!(a, b);
            assert!(a.x.abs() <= 2.0 && a.y.abs() <= 2.0, "{a:?}");
        }
        assert_ne!(apply(&effect, 0).0, apply(&effect, 1).0);
    }

    #[test]
    fn shake_scales_with_intensity() {
        let mut effect = TextEffect::new(EffectKind::Shake, 1.0, 1).with_intensity(0.0);
        effect.update(0.3);
        assert_eq!(apply(&effect, 0).0, Offset::ZERO);
    }

    #[test]
    fn wave_offsets_vertically() {
        let effect = TextEffect::new(EffectKind::Wave, 1.0, 4);
        let (first, _) = apply(&effect, 0);
        assert_eq!(first, Offset::ZERO);

        let (second, rgba) = apply(&effect, 1);
        assert_eq!(second.x, 0.0);
        assert!((second.y - 0.3f32.sin() * 6.0).abs() < 1e-5);
        assert_eq!(rgba, Rgba::WHITE);
    }

    #[test]
    fn rainbow_starts_red() {
        let effect = TextEffect::new(EffectKind::Rainbow, 1.0, 4);
        let (_, rgba) = apply(&effect, 0);
        assert_eq!(rgba, Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn rainbow_blends_by_intensity() {
        let effect = TextEffect::new(EffectKind::Rainbow, 1.0, 4).with_intensity(0.5);
        let (_, rgba) = apply(&effect, 0);
        assert_eq!(rgba, Rgba::new(255, 128, 128, 255));
    }

    #[test]
    fn typewriter_hides_unrevealed_chars() {
        let mut effect = TextEffect::new(EffectKind::Typewriter, 1.0, 5);
        effect.update(0.1);

        assert_eq!(apply(&effect, 0).1.a, 255);
        assert_eq!(apply(&effect, 1).1.a, 255);
        assert_eq!(apply(&effect, 2).1.a, 0);
        assert_eq!(apply(&effect, 4).1.a, 0);
        assert!(!effect.is_complete());
    }

    #[test]
    fn typewriter_completes_when_all_revealed() {
        let mut effect = TextEffect::new(EffectKind::Typewriter, 1.0, 5);
        effect.update(0.25);
        assert!(effect.is_complete());
    }

    #[test]
    fn fade_in_ramps_alpha() {
        let mut effect = TextEffect::new(EffectKind::FadeIn, 1.0, 5);
        effect.update(0.1);

        assert_eq!(apply(&effect, 0).1.a, 51);
        assert_eq!(apply(&effect, 3).1.a, 0);
        assert!(!effect.is_complete());

        effect.update(0.7);
        assert!(effect.is_complete());
        assert_eq!(apply(&effect, 4).1.a, 255);
    }

    #[test]
    fn pulse_scales_alpha() {
        let effect = TextEffect::new(EffectKind::Pulse, 1.0, 1);
        assert_eq!(apply(&effect, 0).1.a, 128);

        let flat = TextEffect::new(EffectKind::Pulse, 1.0, 1).with_intensity(0.0);
        assert_eq!(apply(&flat, 0).1.a, 255);
    }

    #[test]
    fn infinite_effects_never_complete() {
        for kind in [
            EffectKind::Shake,
            EffectKind::Wave,
            EffectKind::Rainbow,
            EffectKind::Pulse,
            EffectKind::Custom,
        ] {
            let mut effect = TextEffect::new(kind, 1.0, 1);
            effect.update(1000.0);
            assert!(!effect.is_complete(), "{kind:?}");
            assert!(!kind.is_finite());
        }
    }

    #[test]
    fn reset_rewinds_clock() {
        let mut effect = TextEffect::new(EffectKind::Typewriter, 1.0, 2);
        effect.update(5.0);
        assert!(effect.is_complete());

        effect.reset();
        assert_eq!(effect.elapsed(), 0.0);
        assert!(!effect.is_complete());
        assert_eq!(effect.rng_seed(), RESET_SEED);
    }

    #[test]
    fn intensity_is_clamped() {
        let mut effect = TextEffect::new(EffectKind::Wave, 1.0, 1);
        effect.set_intensity(3.0);
        assert_eq!(effect.intensity(), 1.0);
        effect.set_intensity(-1.0);
        assert_eq!(effect.intensity(), 0.0);
    }

    #[test]
    fn custom_effect_receives_elapsed_and_index() {
        let mut effect = TextEffect::custom(
            |elapsed: f32, index: u32, offset: &mut Offset, rgba: &mut Rgba| {
                offset.y -= elapsed;
                rgba.r = index as u8;
            },
            4,
        );
        effect.update(2.0);

        let (offset, rgba) = apply(&effect, 7);
        assert_eq!(offset.y, -2.0);
        assert_eq!(rgba.r, 7);
    }

    #[test]
    fn hue_wheel_primaries() {
        assert_eq!(hue_to_rgb(0.0), (1.0, 0.0, 0.0));
        assert_eq!(hue_to_rgb(0.25), (0.5, 1.0, 0.0));
        assert_eq!(hue_to_rgb(0.5), (0.0, 1.0, 1.0));
    }
}
