//! Gatefall TUI - Terminal surface for the intro sequence
//!
//! This crate puts the headless sequencer from `gatefall-core` on a real
//! terminal:
//!
//! - **App**: tokio event loop bridging real time and key events to the core
//! - **Art**: the shipped skin (title, portal frames, default configuration)
//! - **Theme**: the gate palette and style-hint conversions

pub mod app;
pub mod art;
pub mod theme;

pub use app::App;
