//! Marquee Light Effects
//!
//! Small tickable light animations used around the intro sequence: a
//! color-cycling spinner bulb, a strip of independently flickering bulbs,
//! and a letter-by-letter message reveal. Like the sequencer, none of these
//! own a clock - the surface ticks them on whatever cadence it likes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::frame::Color;

/// The marquee color wheel.
pub const LIGHT_WHEEL: [Color; 6] = [
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0x00, 0x66, 0xff),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0xff, 0x66, 0x00),
    Color::rgb(0x99, 0x32, 0xcc),
];

/// Bulb glyphs the spinner cycles through.
pub const SPINNER_BULBS: [char; 5] = ['●', '◉', '○', '◎', '◐'];

/// Probability per tick that a string bulb changes color.
const BULB_RECOLOR_CHANCE: f32 = 0.15;

/// Probability per tick that a string bulb renders dim.
const BULB_DIM_CHANCE: f32 = 0.1;

/// A one-cell spinner cycling through the color wheel.
///
/// The bulb glyph changes once per full color cycle.
#[derive(Debug, Default)]
pub struct LightsSpinner {
    position: usize,
    bulb_index: usize,
}

impl LightsSpinner {
    /// Create a spinner at the start of the wheel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current glyph and color without advancing.
    #[must_use]
    pub fn current_frame(&self) -> (char, Color) {
        (SPINNER_BULBS[self.bulb_index], LIGHT_WHEEL[self.position])
    }

    /// Advance one step and return the new frame.
    pub fn next_frame(&mut self) -> (char, Color) {
        let frame = self.current_frame();
        self.position = (self.position + 1) % LIGHT_WHEEL.len();
        if self.position == 0 {
            self.bulb_index = (self.bulb_index + 1) % SPINNER_BULBS.len();
        }
        frame
    }
}

/// One bulb of a [`LightString`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bulb {
    /// Current color.
    pub color: Color,
    /// Whether the bulb renders dimmed this tick.
    pub dim: bool,
}

/// A strip of independently flickering colored bulbs.
#[derive(Debug)]
pub struct LightString {
    bulbs: Vec<Bulb>,
    rng: StdRng,
}

impl LightString {
    /// Create a string of `count` bulbs with an entropy-seeded random source.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// Create a string with a fixed seed for reproducible flicker.
    #[must_use]
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, mut rng: StdRng) -> Self {
        let bulbs = (0..count)
            .map(|_| Bulb {
                color: LIGHT_WHEEL[rng.gen_range(0..LIGHT_WHEEL.len())],
                dim: false,
            })
            .collect();
        Self { bulbs, rng }
    }

    /// Advance one tick: some bulbs change color, some dim for a tick.
    pub fn tick(&mut self) {
        for bulb in &mut self.bulbs {
            if self.rng.gen::<f32>() < BULB_RECOLOR_CHANCE {
                bulb.color = LIGHT_WHEEL[self.rng.gen_range(0..LIGHT_WHEEL.len())];
            }
            bulb.dim = self.rng.gen::<f32>() < BULB_DIM_CHANCE;
        }
    }

    /// Current bulb states, for the surface to paint.
    #[must_use]
    pub fn bulbs(&self) -> &[Bulb] {
        &self.bulbs
    }
}

/// Letter-by-letter reveal of a rotating message list.
///
/// Each tick reveals one more character; after a message is fully revealed
/// it holds for a fixed number of ticks, then the next message starts from
/// scratch. Fully deterministic.
#[derive(Debug)]
pub struct MarqueeMessage {
    messages: Vec<String>,
    current: usize,
    revealed: usize,
    end_hold: usize,
}

impl MarqueeMessage {
    /// Create a reveal over `messages`, holding `end_hold` extra ticks at
    /// the end of each message.
    #[must_use]
    pub fn new(messages: Vec<String>, end_hold: usize) -> Self {
        Self {
            messages,
            current: 0,
            revealed: 0,
            end_hold,
        }
    }

    /// Advance one tick.
    pub fn tick(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let len = self.current_message().chars().count();
        self.revealed += 1;
        if self.revealed > len + self.end_hold {
            self.current = (self.current + 1) % self.messages.len();
            self.revealed = 0;
        }
    }

    fn current_message(&self) -> &str {
        &self.messages[self.current]
    }

    /// The currently revealed prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        if self.messages.is_empty() {
            return "";
        }
        let message = self.current_message();
        let end = message
            .char_indices()
            .nth(self.revealed)
            .map_or(message.len(), |(idx, _)| idx);
        &message[..end]
    }

    /// The revealed prefix with a wheel color per letter.
    ///
    /// Colors cycle deterministically over non-space characters, the way a
    /// marquee wires one bulb per letter.
    #[must_use]
    pub fn colored(&self) -> Vec<(char, Option<Color>)> {
        let mut color_idx = 0;
        self.visible()
            .chars()
            .map(|ch| {
                if ch == ' ' {
                    (ch, None)
                } else {
                    let color = LIGHT_WHEEL[color_idx % LIGHT_WHEEL.len()];
                    color_idx += 1;
                    (ch, Some(color))
                }
            })
            .collect()
    }
}
