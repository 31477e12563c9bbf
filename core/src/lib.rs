//! Gatefall Core - Headless Timed Animation Sequencer
//!
//! This crate provides the intro-sequence engine for gatefall, completely
//! independent of any UI framework. It can drive a TUI, a web terminal, or
//! run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Surfaces                              │
//! │   ┌──────────┐   ┌───────────┐   ┌───────────────────────┐   │
//! │   │   TUI    │   │  Web term │   │  Headless (tests)     │   │
//! │   │(ratatui) │   │           │   │                       │   │
//! │   └────┬─────┘   └─────┬─────┘   └───────────┬───────────┘   │
//! │        │               │                     │               │
//! │        └───────────────┴─────────────────────┘               │
//! │               InputEvent (up) / SplashFrame (down)           │
//! └────────────────────────┬─────────────────────────────────────┘
//!                          │
//! ┌────────────────────────┼─────────────────────────────────────┐
//! │                 GATEFALL CORE                                │
//! │   ┌────────────────────┴─────────────────────────────────┐   │
//! │   │                SplashSequencer                       │   │
//! │   │   ┌─────────┐  ┌────────────┐  ┌─────────────────┐   │   │
//! │   │   │  Phase  │  │ TimerQueue │  │ FrameGenerator  │   │   │
//! │   │   │ machine │  │ (logical   │  │ (glitch/static/ │   │   │
//! │   │   │         │  │  clock)    │  │  pulse frames)  │   │   │
//! │   │   └─────────┘  └────────────┘  └─────────────────┘   │   │
//! │   └──────────────────────────────────────────────────────┘   │
//! │   side animations: ParticleField, LightsSpinner, ...         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`SplashSequencer`]: the phase controller driving the intro sequence
//! - [`SplashSink`]: where rendered frames and the completion signal go
//! - [`SplashConfig`]: construction-time timing/content configuration
//! - [`Phase`]: the six stages of the sequence
//! - [`TimerQueue`]: deterministic single-threaded timer facility
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use gatefall_core::{InputEvent, SplashConfig, SplashFrame, SplashSequencer, SplashSink};
//!
//! struct Collector(Vec<SplashFrame>, bool);
//!
//! impl SplashSink for Collector {
//!     fn render(&mut self, frame: SplashFrame) {
//!         self.0.push(frame);
//!     }
//!     fn sequence_complete(&mut self) {
//!         self.1 = true;
//!     }
//! }
//!
//! let config = SplashConfig::new("GATEFALL");
//! let mut sequencer = SplashSequencer::with_seed(config, 7).unwrap();
//! let mut sink = Collector(Vec::new(), false);
//!
//! sequencer.start(&mut sink);
//! sequencer.advance(Duration::from_secs(1), &mut sink);
//!
//! // A cancel input terminates the sequence from any phase.
//! sequencer.handle_input(InputEvent::Cancel, &mut sink);
//! assert!(sink.1);
//! ```
//!
//! # Module Overview
//!
//! - [`phase`]: the `Phase` enum and its ordering
//! - [`schedule`]: logical-clock timer queue (one-shot + repeating)
//! - [`frame`]: frame/style types and the frame generator functions
//! - [`config`]: immutable sequence configuration and validation
//! - [`sequencer`]: the `SplashSequencer` phase controller
//! - [`particles`]: drifting background particle field
//! - [`lights`]: marquee light effects (spinner, string, message reveal)
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. Surfaces map [`frame::StyleHint`] to whatever their
//! rendering target understands.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod frame;
pub mod lights;
pub mod particles;
pub mod phase;
pub mod schedule;
pub mod sequencer;

pub use config::{ConfigError, FlickerStep, SplashConfig, VortexEntry};
pub use frame::{Color, Region, SplashFrame, StyleHint};
pub use phase::Phase;
pub use schedule::{TimerId, TimerQueue};
pub use sequencer::{InputEvent, SplashSequencer, SplashSink};
