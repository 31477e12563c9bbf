//! Frames and the Frame Generator
//!
//! A [`SplashFrame`] is the unit the sequencer pushes to its surface: a text
//! block, the screen region it targets, and an opaque style hint the surface
//! maps to its own rendering target. The generator functions here are pure
//! given a random source; nothing in this module knows about timing.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Surface-agnostic RGB color.
///
/// A simple color representation that can be mapped to any rendering target:
/// - Terminal: nearest 256-color or true color
/// - Web: CSS `rgb()` or hex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Style metadata attached to a frame.
///
/// Opaque to the sequencer core; the surface interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHint {
    /// Foreground color.
    pub color: Color,
    /// Render emphasized.
    pub bold: bool,
    /// Render de-emphasized.
    pub dim: bool,
}

impl StyleHint {
    /// Plain style in the given color.
    #[must_use]
    pub const fn color(color: Color) -> Self {
        Self {
            color,
            bold: false,
            dim: false,
        }
    }

    /// Mark as bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark as dim.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// Screen region a frame targets.
///
/// The pulsing prompt renders beneath a still-visible title, so the surface
/// needs to know which region a frame replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// The large central art area.
    Title,
    /// The prompt line beneath the title.
    Prompt,
}

/// A displayable frame: text plus style, targeting one region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashFrame {
    /// Region this frame replaces.
    pub region: Region,
    /// Text content. Empty text blanks the region.
    pub text: String,
    /// Style hint for the surface.
    pub style: StyleHint,
}

impl SplashFrame {
    /// A title-region frame.
    #[must_use]
    pub fn title(text: impl Into<String>, style: StyleHint) -> Self {
        Self {
            region: Region::Title,
            text: text.into(),
            style,
        }
    }

    /// A prompt-region frame.
    #[must_use]
    pub fn prompt(text: impl Into<String>, style: StyleHint) -> Self {
        Self {
            region: Region::Prompt,
            text: text.into(),
            style,
        }
    }

    /// An empty frame that blanks a region.
    #[must_use]
    pub fn blank(region: Region) -> Self {
        Self {
            region,
            text: String::new(),
            style: StyleHint::color(Color::rgb(0, 0, 0)),
        }
    }

    /// Whether this frame blanks its region.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Corrupt `source` character-by-character.
///
/// Whitespace passes through unchanged. Every other character is kept with
/// probability `progress`, otherwise replaced by a glyph drawn uniformly
/// from `alphabet`. At `progress >= 1.0` the output is identical to the
/// source; at `progress <= 0.0` no original non-whitespace character
/// survives.
pub fn glitch_text<R: Rng>(source: &str, progress: f32, alphabet: &[char], rng: &mut R) -> String {
    if alphabet.is_empty() {
        // Nothing to corrupt with; validated configs never get here.
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    for ch in source.chars() {
        if ch.is_whitespace() || rng.gen::<f32>() < progress {
            out.push(ch);
        } else {
            out.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }
    }
    out
}

/// Pick the ramp color for a glitch progress value.
///
/// Four increasing-intensity steps with thresholds at 0.3, 0.6, and 0.8.
#[must_use]
pub fn ramp_color(progress: f32, ramp: &[Color; 4]) -> Color {
    if progress < 0.3 {
        ramp[0]
    } else if progress < 0.6 {
        ramp[1]
    } else if progress < 0.8 {
        ramp[2]
    } else {
        ramp[3]
    }
}

/// A title frame of corrupted text with the progress-ramped color.
pub fn glitch_frame<R: Rng>(
    source: &str,
    progress: f32,
    alphabet: &[char],
    ramp: &[Color; 4],
    rng: &mut R,
) -> SplashFrame {
    let text = glitch_text(source, progress, alphabet, rng);
    SplashFrame::title(text, StyleHint::color(ramp_color(progress, ramp)).bold())
}

/// A fixed text block with its fixed style hint. No randomness.
#[must_use]
pub fn static_frame(text: &str, style: StyleHint) -> SplashFrame {
    SplashFrame::title(text, style)
}

/// One of two fixed prompt frames for the pulse boolean.
#[must_use]
pub fn pulse_frame(bright: bool, text: &str, bright_style: StyleHint, dim_style: StyleHint) -> SplashFrame {
    let style = if bright { bright_style } else { dim_style };
    SplashFrame::prompt(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALPHABET: [char; 9] = ['▓', '▒', '░', '╬', '╫', '╪', '┼', '╳', '※'];

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_full_progress_reproduces_source() {
        let source = "THE GATE\n  OPENS █▓";
        for seed in 0..20 {
            let out = glitch_text(source, 1.0, &ALPHABET, &mut rng(seed));
            assert_eq!(out, source);
        }
    }

    #[test]
    fn test_progress_above_one_reproduces_source() {
        let source = "OVERDRIVEN";
        let out = glitch_text(source, 1.5, &ALPHABET, &mut rng(3));
        assert_eq!(out, source);
    }

    #[test]
    fn test_zero_progress_keeps_no_original_glyph() {
        // Source characters are disjoint from the corruption alphabet, so a
        // surviving original would be visible in the output.
        let source = "GATEFALL";
        for seed in 0..20 {
            let out = glitch_text(source, 0.0, &ALPHABET, &mut rng(seed));
            assert_eq!(out.chars().count(), source.chars().count());
            for ch in out.chars() {
                assert!(ALPHABET.contains(&ch), "original {ch:?} survived");
            }
        }
    }

    #[test]
    fn test_whitespace_passes_through_at_any_progress() {
        let source = " \n\t a";
        let out = glitch_text(source, 0.0, &ALPHABET, &mut rng(9));
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(&chars[..4], &[' ', '\n', '\t', ' ']);
    }

    #[test]
    fn test_seeded_output_is_deterministic() {
        let source = "DETERMINISM";
        let a = glitch_text(source, 0.4, &ALPHABET, &mut rng(42));
        let b = glitch_text(source, 0.4, &ALPHABET, &mut rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ramp_has_four_steps() {
        let ramp = [
            Color::rgb(10, 0, 0),
            Color::rgb(20, 0, 0),
            Color::rgb(30, 0, 0),
            Color::rgb(40, 0, 0),
        ];
        assert_eq!(ramp_color(0.0, &ramp), ramp[0]);
        assert_eq!(ramp_color(0.29, &ramp), ramp[0]);
        assert_eq!(ramp_color(0.3, &ramp), ramp[1]);
        assert_eq!(ramp_color(0.6, &ramp), ramp[2]);
        assert_eq!(ramp_color(0.8, &ramp), ramp[3]);
        assert_eq!(ramp_color(1.0, &ramp), ramp[3]);
    }

    #[test]
    fn test_pulse_frame_two_fixed_states() {
        let bright = StyleHint::color(Color::rgb(255, 31, 31)).bold();
        let dim = StyleHint::color(Color::rgb(139, 26, 26));
        let on = pulse_frame(true, "▸ open ◂", bright, dim);
        let off = pulse_frame(false, "▸ open ◂", bright, dim);
        assert_eq!(on.style, bright);
        assert_eq!(off.style, dim);
        assert_eq!(on.region, Region::Prompt);
        assert_eq!(on.text, off.text);
    }

    #[test]
    fn test_blank_frame() {
        let frame = SplashFrame::blank(Region::Title);
        assert!(frame.is_blank());
    }
}
