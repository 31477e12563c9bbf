//! Theme and Colors
//!
//! Gatefall's signature palette - deep signal reds over a near-black
//! background, with dim ember tones for atmosphere. Style hints coming out
//! of the core are mapped to ratatui styles here.

use gatefall_core::{Color, StyleHint};
use ratatui::style::{Color as TermColor, Modifier, Style};

// ============================================================================
// Gate Palette
// ============================================================================

/// Background - near black.
pub const VOID_BLACK: Color = Color::rgb(0x0a, 0x0a, 0x0a);

/// Dimmest ember red (early glitch).
pub const EMBER_DARK: Color = Color::rgb(0x4a, 0x1a, 0x1a);

/// Mid ember red.
pub const EMBER_MID: Color = Color::rgb(0x8b, 0x2a, 0x2a);

/// Hot signal red.
pub const SIGNAL_RED: Color = Color::rgb(0xc4, 0x1e, 0x1e);

/// Full-intensity title red.
pub const TITLE_RED: Color = Color::rgb(0xe2, 0x1b, 0x1b);

/// Prompt at the bright half of its pulse.
pub const PROMPT_BRIGHT: Color = Color::rgb(0xff, 0x1f, 0x1f);

/// Prompt at the dim half of its pulse.
pub const PROMPT_DIM: Color = Color::rgb(0x8b, 0x1a, 0x1a);

// ============================================================================
// Portal art colors
// ============================================================================

/// Outer ring of the portal.
pub const PORTAL_OUTER: Color = Color::rgb(0xff, 0x33, 0x33);

/// Tunnel walls.
pub const PORTAL_TUNNEL: Color = Color::rgb(0xcc, 0x00, 0x00);

/// Inner swirl.
pub const PORTAL_SWIRL: Color = Color::rgb(0x99, 0x00, 0x00);

/// Collapsing dark.
pub const PORTAL_DARK: Color = Color::rgb(0x33, 0x00, 0x00);

/// The black before the welcome.
pub const PORTAL_BLACK: Color = Color::rgb(0x0a, 0x0a, 0x0a);

// ============================================================================
// Conversions
// ============================================================================

/// Map a core color to a ratatui color.
#[must_use]
pub fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

/// Map a core style hint to a ratatui style.
#[must_use]
pub fn term_style(hint: StyleHint) -> Style {
    let mut style = Style::default().fg(term_color(hint.color));
    if hint.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if hint.dim {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}
