//! The Shipped Skin
//!
//! Title art, portal art frames, and the default sequence configuration.
//! All of this is plain data handed to the core at construction; swapping
//! this module out reskins the whole intro.

use gatefall_core::{SplashConfig, StyleHint, VortexEntry};

use crate::theme;

/// Block-letter title.
pub const TITLE: &str = r"
 ██████╗  █████╗ ████████╗███████╗███████╗ █████╗ ██╗     ██╗
██╔════╝ ██╔══██╗╚══██╔══╝██╔════╝██╔════╝██╔══██╗██║     ██║
██║  ███╗███████║   ██║   █████╗  █████╗  ███████║██║     ██║
██║   ██║██╔══██║   ██║   ██╔══╝  ██╔══╝  ██╔══██║██║     ██║
╚██████╔╝██║  ██║   ██║   ███████╗██║     ██║  ██║███████╗███████╗
 ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚══════╝╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝
";

/// The breach opens: a faint ring in a field of drifting specks.
const PORTAL_BREACH: &str = r"
   ·   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·
 *   ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░   ˚
   · ░░  *   ˚   ·   *   ˚   ·   *   ˚   ·   *   ˚   ·  ░░ *
 ˚   ░░ ·                                             · ░░   ·
 *   ░░ ˚                                             ˚ ░░   *
   · ░░  ·   *   ˚   ·   *   ˚   ·   *   ˚   ·   *   ·  ░░ ˚
 ˚   ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░   *
   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·
";

/// A second ring condenses around the first.
const PORTAL_RINGS: &str = r"
 ˚   ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒   ·
   * ▒▒  ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *  ▒▒ ˚
 · ▒▒  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░  * ▒▒   *
 ˚ ▒▒  ░░ ·                                     · ░░ ˚ ▒▒   ·
 * ▒▒  ░░ ˚                                     ˚ ░░ · ▒▒   ˚
 · ▒▒  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░  ˚ ▒▒   *
   ˚ ▒▒  *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   *  ▒▒ ·
 *   ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒   ˚
";

/// The tunnel walls thicken.
const PORTAL_TUNNEL: &str = r"
 ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
 ▓▓  ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·  ▓▓
 ▓▓ ˚  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒  *  ▓▓
 ▓▓ ·  ▒▒  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░  ·  ▒▒ ˚  ▓▓
 ▓▓ *  ▒▒  ░░      ˚   ·   *   ·   ˚      ░░  ˚  ▒▒ ·  ▓▓
 ▓▓ ˚  ▒▒  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░  *  ▒▒ ˚  ▓▓
 ▓▓ ·  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒  ·  ▓▓
 ▓▓  ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚  ▓▓
 ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
";

/// The swirl closes in on a shrinking core.
const PORTAL_SWIRL: &str = r"
 ██████████████████████████████████████████████████████████
 ██  ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·  ██
 ██ ˚  ████████████████████████████████████████████  *  ██
 ██ ·  ██  ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓  ·  ██ ˚  ██
 ██ *  ██  ▓▓      ·   ████████   ·      ▓▓  ˚  ██ ·  ██
 ██ ˚  ██  ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓  *  ██ ˚  ██
 ██ ·  ████████████████████████████████████████████  ·  ██
 ██  ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚   *   ·   ˚  ██
 ██████████████████████████████████████████████████████████
";

/// Almost gone: a speck of light in the dark.
const PORTAL_DARK: &str = r"
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
 ████████████████████████  ˚  *  ███████████████████████████
 ████████████████████████  *  ˚  ███████████████████████████
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
";

/// Black. The gate has closed behind you.
const PORTAL_BLACK: &str = r"
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
 ██████████████████████████████████████████████████████████
";

/// The held terminal frame.
const WELCOME: &str = r"

        ·  ˚  *  ·  ˚  *  ·  ˚  *  ·  ˚  *  ·  ˚  *  ·

             W E L C O M E   T O   T H E

                  O T H E R   S I D E

        *  ·  ˚  *  ·  ˚  *  ·  ˚  *  ·  ˚  *  ·  ˚  *

";

/// Ticks the welcome frame is held.
const WELCOME_HOLD: u32 = 23;

/// Ticks of title flicker before the portal art starts.
const PORTAL_FLICKER: u32 = 6;

/// The full shipped sequence configuration.
#[must_use]
pub fn default_config() -> SplashConfig {
    SplashConfig::new(TITLE).with_vortex(vec![
        VortexEntry::Flicker {
            count: PORTAL_FLICKER,
        },
        art(PORTAL_BREACH, theme::PORTAL_OUTER),
        art(PORTAL_RINGS, theme::PORTAL_OUTER),
        art(PORTAL_TUNNEL, theme::PORTAL_TUNNEL),
        art(PORTAL_SWIRL, theme::PORTAL_SWIRL),
        art(PORTAL_DARK, theme::PORTAL_DARK),
        art(PORTAL_BLACK, theme::PORTAL_BLACK),
        VortexEntry::Welcome {
            text: WELCOME.to_string(),
            hold: WELCOME_HOLD,
            style: StyleHint::color(theme::PROMPT_BRIGHT).bold(),
        },
    ])
}

fn art(text: &str, color: gatefall_core::Color) -> VortexEntry {
    VortexEntry::Art {
        text: text.to_string(),
        style: StyleHint::color(color),
    }
}
