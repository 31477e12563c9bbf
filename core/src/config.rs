//! Sequence Configuration
//!
//! Everything the sequencer needs is supplied at construction and treated as
//! immutable: timings, the title text, the corruption alphabet, the flicker
//! table, and the vortex frame table. [`SplashConfig::new`] starts from the
//! canonical timings; builder-style setters swap in custom content.
//!
//! Validation only rejects configurations that would break liveness - a zero
//! repeating interval or a zero glitch step would keep a phase ticking
//! forever.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frame::{Color, StyleHint};

/// Default corruption alphabet for glitch frames.
pub const DEFAULT_ALPHABET: [char; 9] = ['▓', '▒', '░', '╬', '╫', '╪', '┼', '╳', '※'];

/// One step of the flicker sub-sequence: at `delay` after the phase starts,
/// set title visibility to `visible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlickerStep {
    /// Delay from the start of the flicker phase.
    pub delay: Duration,
    /// Whether the title is shown or blanked at this step.
    pub visible: bool,
}

impl FlickerStep {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(delay: Duration, visible: bool) -> Self {
        Self { delay, visible }
    }
}

/// One entry of the vortex frame table, consumed strictly in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VortexEntry {
    /// Toggle title visibility once per tick for `count` ticks.
    Flicker {
        /// Number of ticks this entry consumes.
        count: u32,
    },
    /// A fixed art block shown for exactly one tick.
    Art {
        /// The art text.
        text: String,
        /// Per-entry style hint.
        style: StyleHint,
    },
    /// The terminal held frame: corrupted for the first fade ticks, then
    /// clean for the remainder of `hold`.
    Welcome {
        /// The welcome text.
        text: String,
        /// Total ticks this entry consumes.
        hold: u32,
        /// Style for both the corrupted and clean renders.
        style: StyleHint,
    },
}

impl VortexEntry {
    /// Ticks this entry consumes before the table index advances.
    #[must_use]
    pub fn tick_cost(&self) -> u32 {
        match self {
            Self::Flicker { count } => (*count).max(1),
            Self::Art { .. } => 1,
            Self::Welcome { hold, .. } => (*hold).max(1),
        }
    }
}

/// Errors from [`SplashConfig::validate`].
///
/// These are construction-time programmer errors; nothing at runtime can
/// produce one.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A repeating interval was zero, which would livelock the pump.
    #[error("{name} interval must be non-zero")]
    ZeroInterval {
        /// Which interval was zero.
        name: &'static str,
    },
    /// The glitch step was not positive, so progress would never reach 1.0.
    #[error("glitch step must be positive, got {step}")]
    ZeroGlitchStep {
        /// The offending step value.
        step: f32,
    },
    /// The corruption alphabet was empty.
    #[error("corruption alphabet must not be empty")]
    EmptyAlphabet,
}

/// Immutable configuration for one run of the intro sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Title text resolved during the glitch phase and flashed afterwards.
    pub title: String,
    /// Corruption alphabet for glitch frames.
    pub alphabet: Vec<char>,
    /// Delay before the glitch phase starts.
    pub initial_delay: Duration,
    /// Interval of the glitch repeating timer.
    pub glitch_interval: Duration,
    /// Progress added per glitch tick.
    pub glitch_step: f32,
    /// Four-step color ramp over glitch progress.
    pub glitch_ramp: [Color; 4],
    /// Style of the fully resolved title.
    pub title_style: StyleHint,
    /// Ordered flicker sub-sequence.
    pub flicker_steps: Vec<FlickerStep>,
    /// Delay from flicker start to the prompt phase.
    pub flicker_settle: Duration,
    /// Prompt line text.
    pub prompt_text: String,
    /// Prompt style on the bright half of the pulse.
    pub prompt_bright: StyleHint,
    /// Prompt style on the dim half of the pulse.
    pub prompt_dim: StyleHint,
    /// Interval of the prompt pulse timer.
    pub pulse_interval: Duration,
    /// Interval of the vortex consumption timer.
    pub portal_interval: Duration,
    /// Ordered vortex frame table.
    pub vortex: Vec<VortexEntry>,
    /// How many of a welcome entry's hold ticks render corrupted.
    pub welcome_fade_ticks: u32,
}

impl SplashConfig {
    /// Canonical timings with the given title and an empty vortex table.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            alphabet: DEFAULT_ALPHABET.to_vec(),
            initial_delay: Duration::from_millis(500),
            glitch_interval: Duration::from_millis(80),
            glitch_step: 0.02,
            glitch_ramp: [
                Color::rgb(0x4a, 0x1a, 0x1a),
                Color::rgb(0x8b, 0x2a, 0x2a),
                Color::rgb(0xc4, 0x1e, 0x1e),
                Color::rgb(0xe2, 0x1b, 0x1b),
            ],
            title_style: StyleHint::color(Color::rgb(0xe2, 0x1b, 0x1b)).bold(),
            flicker_steps: vec![
                FlickerStep::new(Duration::ZERO, true),
                FlickerStep::new(Duration::from_millis(150), false),
                FlickerStep::new(Duration::from_millis(250), true),
                FlickerStep::new(Duration::from_millis(350), false),
                FlickerStep::new(Duration::from_millis(500), true),
            ],
            flicker_settle: Duration::from_millis(800),
            prompt_text: "▸ Press ENTER to open the gate ◂".to_string(),
            prompt_bright: StyleHint::color(Color::rgb(0xff, 0x1f, 0x1f)).bold(),
            prompt_dim: StyleHint::color(Color::rgb(0x8b, 0x1a, 0x1a)),
            pulse_interval: Duration::from_millis(600),
            portal_interval: Duration::from_millis(150),
            vortex: Vec::new(),
            welcome_fade_ticks: 8,
        }
    }

    /// Replace the flicker table.
    #[must_use]
    pub fn with_flicker_steps(mut self, steps: Vec<FlickerStep>) -> Self {
        self.flicker_steps = steps;
        self
    }

    /// Replace the vortex table.
    #[must_use]
    pub fn with_vortex(mut self, vortex: Vec<VortexEntry>) -> Self {
        self.vortex = vortex;
        self
    }

    /// Replace the initial delay.
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Replace the glitch step.
    #[must_use]
    pub fn with_glitch_step(mut self, step: f32) -> Self {
        self.glitch_step = step;
        self
    }

    /// Replace the corruption alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Vec<char>) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Total ticks the vortex table consumes before completion.
    #[must_use]
    pub fn vortex_tick_cost(&self) -> u32 {
        self.vortex.iter().map(VortexEntry::tick_cost).sum()
    }

    /// Reject configurations that would break liveness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glitch_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { name: "glitch" });
        }
        if self.pulse_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { name: "pulse" });
        }
        if self.portal_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { name: "portal" });
        }
        if self.glitch_step <= 0.0 {
            return Err(ConfigError::ZeroGlitchStep {
                step: self.glitch_step,
            });
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }
}
