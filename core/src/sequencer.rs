//! The Phase Controller
//!
//! [`SplashSequencer`] owns the sequence state - current phase, glitch
//! progress, vortex position, sub-tick counters - and the timer queue that
//! drives it. The environment pumps it with elapsed time via
//! [`SplashSequencer::advance`] and delivers input via
//! [`SplashSequencer::handle_input`]; both run synchronously on the caller's
//! thread, so state is never mutated concurrently.
//!
//! # Timer discipline
//!
//! Every timer armed by a phase belongs to that phase. On any phase exit the
//! whole queue is cleared before the next phase arms its own timers, so a
//! stale firing can never mutate state the sequence has moved past. The
//! forced-complete path clears the queue unconditionally and terminates the
//! sequence within the call that received the cancel input.
//!
//! # Failure semantics
//!
//! Nothing here returns a runtime error. Programmer misuse - a second
//! `start`, input after completion - is logged at debug level and ignored: a
//! broken intro animation must never take the host application down with it.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::{ConfigError, SplashConfig, VortexEntry};
use crate::frame::{glitch_frame, pulse_frame, static_frame, Region, SplashFrame};
use crate::phase::Phase;
use crate::schedule::TimerQueue;

/// Abstract input events from the surface.
///
/// Only confirm and cancel are meaningful to the sequencer; everything else
/// the surface may see is delivered as [`InputEvent::Other`] and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The confirm action (opens the portal transition from the prompt).
    Confirm,
    /// The cancel action (skips directly to completion from any phase).
    Cancel,
    /// Any other input. Ignored.
    Other,
}

/// Render target plus completion notification.
///
/// Frames are applied in the order issued. `sequence_complete` is delivered
/// exactly once per sequencer, whether the sequence ran to natural
/// exhaustion or was cancelled.
pub trait SplashSink {
    /// Display a frame.
    fn render(&mut self, frame: SplashFrame);
    /// The sequence reached its terminal phase.
    fn sequence_complete(&mut self);
}

/// What a timer firing means. Plain data, dispatched in `on_timer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerToken {
    /// Initial delay elapsed: enter the glitch phase.
    Begin,
    /// One glitch progress step.
    GlitchTick,
    /// One flicker table step.
    Flicker { visible: bool },
    /// Flicker settled: enter the prompt phase.
    ShowPrompt,
    /// One prompt pulse toggle.
    PulseTick,
    /// One vortex table tick.
    VortexTick,
}

/// The timed animation sequencer.
///
/// Created per intro run, driven to `Complete`, then discarded. See the
/// crate docs for the phase diagram.
pub struct SplashSequencer {
    config: SplashConfig,
    timers: TimerQueue<TimerToken>,
    rng: StdRng,
    phase: Phase,
    started: bool,
    glitch_progress: f32,
    prompt_bright: bool,
    vortex_index: usize,
    flicker_ticks: u32,
    welcome_hold: u32,
}

impl SplashSequencer {
    /// Create a sequencer with an entropy-seeded random source.
    pub fn new(config: SplashConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a sequencer with a fixed seed for reproducible runs.
    pub fn with_seed(config: SplashConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SplashConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            timers: TimerQueue::new(),
            rng,
            phase: Phase::Waiting,
            started: false,
            glitch_progress: 0.0,
            prompt_bright: true,
            vortex_index: 0,
            flicker_ticks: 0,
            welcome_hold: 0,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current glitch progress. Meaningful only during [`Phase::Glitching`].
    #[must_use]
    pub fn glitch_progress(&self) -> f32 {
        self.glitch_progress
    }

    /// Number of currently armed timers.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.timers.armed_len()
    }

    /// Time until the next timer is due, for real-time drivers.
    #[must_use]
    pub fn until_next_deadline(&self) -> Option<Duration> {
        self.timers.until_next_deadline()
    }

    /// Begin the sequence: render the initial fully-corrupted title and arm
    /// the transition out of [`Phase::Waiting`].
    ///
    /// Calling this a second time is a no-op.
    pub fn start(&mut self, sink: &mut dyn SplashSink) {
        if self.started {
            debug!("start() called twice; ignoring");
            return;
        }
        self.started = true;

        sink.render(glitch_frame(
            &self.config.title,
            0.0,
            &self.config.alphabet,
            &self.config.glitch_ramp,
            &mut self.rng,
        ));
        self.timers
            .schedule_once(self.config.initial_delay, TimerToken::Begin);
    }

    /// Advance the logical clock by `dt` and dispatch every due firing.
    pub fn advance(&mut self, dt: Duration, sink: &mut dyn SplashSink) {
        if self.phase.is_terminal() {
            return;
        }
        self.timers.advance(dt);
        while let Some(token) = self.timers.pop_due() {
            self.on_timer(token, sink);
        }
    }

    /// Deliver an input event.
    ///
    /// Confirm opens the portal transition when the prompt is showing;
    /// cancel forces completion from any phase; anything else is ignored.
    pub fn handle_input(&mut self, event: InputEvent, sink: &mut dyn SplashSink) {
        if self.phase.is_terminal() {
            debug!(?event, "input after completion; ignoring");
            return;
        }
        match event {
            InputEvent::Confirm if self.phase == Phase::PromptVisible => {
                self.enter_portal(sink);
            }
            InputEvent::Cancel => self.complete(sink),
            _ => {}
        }
    }

    fn on_timer(&mut self, token: TimerToken, sink: &mut dyn SplashSink) {
        match token {
            TimerToken::Begin => self.enter_glitching(),
            TimerToken::GlitchTick => self.advance_glitch(sink),
            TimerToken::Flicker { visible } => self.render_title_visibility(visible, sink),
            TimerToken::ShowPrompt => self.enter_prompt(sink),
            TimerToken::PulseTick => self.pulse_prompt(sink),
            TimerToken::VortexTick => self.advance_vortex(sink),
        }
    }

    fn set_phase(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;
    }

    fn enter_glitching(&mut self) {
        self.timers.cancel_all();
        self.set_phase(Phase::Glitching);
        self.glitch_progress = 0.0;
        self.timers
            .schedule_repeating(self.config.glitch_interval, TimerToken::GlitchTick);
    }

    fn advance_glitch(&mut self, sink: &mut dyn SplashSink) {
        self.glitch_progress += self.config.glitch_step;
        if self.glitch_progress >= 1.0 {
            self.enter_flickering();
        } else {
            sink.render(glitch_frame(
                &self.config.title,
                self.glitch_progress,
                &self.config.alphabet,
                &self.config.glitch_ramp,
                &mut self.rng,
            ));
        }
    }

    fn enter_flickering(&mut self) {
        self.timers.cancel_all();
        self.set_phase(Phase::Flickering);
        for step in &self.config.flicker_steps {
            self.timers.schedule_once(
                step.delay,
                TimerToken::Flicker {
                    visible: step.visible,
                },
            );
        }
        self.timers
            .schedule_once(self.config.flicker_settle, TimerToken::ShowPrompt);
    }

    fn render_title_visibility(&mut self, visible: bool, sink: &mut dyn SplashSink) {
        if visible {
            sink.render(static_frame(&self.config.title, self.config.title_style));
        } else {
            sink.render(SplashFrame::blank(Region::Title));
        }
    }

    fn enter_prompt(&mut self, sink: &mut dyn SplashSink) {
        self.timers.cancel_all();
        self.set_phase(Phase::PromptVisible);
        self.prompt_bright = true;
        self.render_prompt(sink);
        self.timers
            .schedule_repeating(self.config.pulse_interval, TimerToken::PulseTick);
    }

    fn pulse_prompt(&mut self, sink: &mut dyn SplashSink) {
        self.prompt_bright = !self.prompt_bright;
        self.render_prompt(sink);
    }

    fn render_prompt(&mut self, sink: &mut dyn SplashSink) {
        sink.render(pulse_frame(
            self.prompt_bright,
            &self.config.prompt_text,
            self.config.prompt_bright,
            self.config.prompt_dim,
        ));
    }

    fn enter_portal(&mut self, sink: &mut dyn SplashSink) {
        self.timers.cancel_all();
        self.set_phase(Phase::PortalTransition);
        self.vortex_index = 0;
        self.flicker_ticks = 0;
        self.welcome_hold = 0;
        sink.render(SplashFrame::blank(Region::Prompt));
        self.timers
            .schedule_repeating(self.config.portal_interval, TimerToken::VortexTick);
    }

    fn advance_vortex(&mut self, sink: &mut dyn SplashSink) {
        let Some(entry) = self.config.vortex.get(self.vortex_index).cloned() else {
            self.complete(sink);
            return;
        };

        match entry {
            VortexEntry::Flicker { count } => {
                self.flicker_ticks += 1;
                let visible = self.flicker_ticks % 2 == 0;
                self.render_title_visibility(visible, sink);
                if self.flicker_ticks >= count {
                    self.vortex_index += 1;
                    self.flicker_ticks = 0;
                }
            }
            VortexEntry::Art { text, style } => {
                sink.render(static_frame(&text, style));
                self.vortex_index += 1;
            }
            VortexEntry::Welcome { text, hold, style } => {
                if self.welcome_hold < self.config.welcome_fade_ticks {
                    // Corruption fades linearly over the first fade ticks,
                    // starting from half-corrupted.
                    let fade = 1.0
                        - self.welcome_hold as f32 / self.config.welcome_fade_ticks as f32;
                    let keep = 1.0 - fade * 0.5;
                    let glitched = crate::frame::glitch_text(
                        &text,
                        keep,
                        &self.config.alphabet,
                        &mut self.rng,
                    );
                    sink.render(SplashFrame::title(glitched, style));
                } else {
                    sink.render(static_frame(&text, style));
                }
                self.welcome_hold += 1;
                if self.welcome_hold >= hold.max(1) {
                    self.vortex_index += 1;
                    self.welcome_hold = 0;
                }
            }
        }

        if self.vortex_index >= self.config.vortex.len() {
            self.complete(sink);
        }
    }

    /// Enter the terminal phase: disarm everything and notify the owner.
    ///
    /// Idempotent; the notification fires at most once.
    fn complete(&mut self, sink: &mut dyn SplashSink) {
        if self.phase.is_terminal() {
            return;
        }
        self.timers.cancel_all();
        self.set_phase(Phase::Complete);
        sink.sequence_complete();
    }
}
