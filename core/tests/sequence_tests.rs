//! Integration Tests for the Splash Sequencer
//!
//! These tests drive the sequencer the way a surface would - advancing the
//! logical clock in steps and delivering input events - and assert the
//! timing, ordering, and cancellation contract end to end.
//!
//! # Test Coverage
//!
//! 1. **Natural flow**: the phase sequence is total, ordered, and bounded
//! 2. **Forced-complete**: cancel from every phase terminates immediately
//!    with zero armed timers and exactly one completion signal
//! 3. **Idempotence**: nothing happens after `Complete`
//! 4. **Vortex consumption**: configured order preserved exactly, tick
//!    budgets respected
//! 5. **Timer hygiene**: no timer of an exited phase ever fires into the
//!    next one

use std::time::Duration;

use pretty_assertions::assert_eq;

use gatefall_core::{
    FlickerStep, InputEvent, Phase, Region, SplashConfig, SplashFrame, SplashSequencer,
    SplashSink, StyleHint, VortexEntry,
};
use gatefall_core::frame::Color;

// ============================================================================
// Recording sink
// ============================================================================

/// Records every render and completion signal in arrival order.
#[derive(Default)]
struct RecordingSink {
    frames: Vec<SplashFrame>,
    completions: usize,
}

impl RecordingSink {
    fn title_frames(&self) -> Vec<&SplashFrame> {
        self.frames
            .iter()
            .filter(|frame| frame.region == Region::Title)
            .collect()
    }

    fn prompt_frames(&self) -> Vec<&SplashFrame> {
        self.frames
            .iter()
            .filter(|frame| frame.region == Region::Prompt)
            .collect()
    }
}

impl SplashSink for RecordingSink {
    fn render(&mut self, frame: SplashFrame) {
        self.frames.push(frame);
    }

    fn sequence_complete(&mut self) {
        self.completions += 1;
    }
}

// ============================================================================
// Drivers
// ============================================================================

const STEP: Duration = Duration::from_millis(50);

/// Step the clock until the sequencer reaches `target`, panicking if it
/// takes unreasonably long (the sequence must be bounded).
fn drive_to(seq: &mut SplashSequencer, sink: &mut RecordingSink, target: Phase) -> usize {
    for step in 0..4000 {
        if seq.phase() == target {
            return step;
        }
        seq.advance(STEP, sink);
    }
    panic!("never reached {target:?}, stuck in {:?}", seq.phase());
}

fn art_style() -> StyleHint {
    StyleHint::color(Color::rgb(0xff, 0x33, 0x33))
}

/// A short configuration: three vortex entries, canonical timings.
fn short_config() -> SplashConfig {
    SplashConfig::new("GATE").with_vortex(vec![
        VortexEntry::Flicker { count: 2 },
        VortexEntry::Art {
            text: "A".to_string(),
            style: art_style(),
        },
        VortexEntry::Welcome {
            text: "WELCOME".to_string(),
            hold: 5,
            style: art_style(),
        },
    ])
}

fn seeded(config: SplashConfig) -> SplashSequencer {
    SplashSequencer::with_seed(config, 0xdead_beef).expect("config must validate")
}

// ============================================================================
// Natural flow
// ============================================================================

#[test]
fn test_phase_sequence_is_total_and_ordered() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();
    let mut observed = vec![seq.phase()];

    seq.start(&mut sink);
    let mut confirmed = false;
    for _ in 0..4000 {
        if seq.phase() == Phase::Complete {
            break;
        }
        // The prompt phase has no self-initiated exit; confirm once there.
        if seq.phase() == Phase::PromptVisible && !confirmed {
            confirmed = true;
            seq.handle_input(InputEvent::Confirm, &mut sink);
        }
        seq.advance(STEP, &mut sink);
        if seq.phase() != *observed.last().expect("seeded") {
            observed.push(seq.phase());
        }
    }

    assert_eq!(
        observed,
        vec![
            Phase::Waiting,
            Phase::Glitching,
            Phase::Flickering,
            Phase::PromptVisible,
            Phase::PortalTransition,
            Phase::Complete,
        ],
        "each phase visited exactly once, in order"
    );
    assert_eq!(sink.completions, 1);
    assert_eq!(seq.armed_timers(), 0);
}

#[test]
fn test_prompt_phase_pulses_indefinitely_without_input() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::PromptVisible);

    let before = sink.prompt_frames().len();
    for _ in 0..200 {
        seq.advance(Duration::from_millis(600), &mut sink);
    }
    assert_eq!(seq.phase(), Phase::PromptVisible);
    assert_eq!(sink.prompt_frames().len(), before + 200);

    // Pulse frames alternate between the bright and dim styles.
    let pulses = sink.prompt_frames();
    for pair in pulses[before..].windows(2) {
        assert_ne!(pair[0].style, pair[1].style);
    }
}

#[test]
fn test_glitch_frames_use_ramp_colors_in_order() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::Flickering);

    // Colors of successive glitch frames follow the 4-step ramp without
    // ever stepping backwards.
    let config = SplashConfig::new("GATE");
    let ramp = config.glitch_ramp;
    let position = |c: Color| ramp.iter().position(|&r| r == c).expect("ramp color");

    let glitch_frames: Vec<_> = sink
        .title_frames()
        .into_iter()
        .filter(|frame| ramp.contains(&frame.style.color))
        .collect();
    assert!(glitch_frames.len() > 10, "glitch phase renders many frames");
    for pair in glitch_frames.windows(2) {
        assert!(position(pair[0].style.color) <= position(pair[1].style.color));
    }
}

// ============================================================================
// Flicker scenario from the contract
// ============================================================================

#[test]
fn test_flicker_table_renders_in_configured_order() {
    // A title style outside the glitch ramp so flicker frames are
    // unmistakable among the recorded renders.
    let flicker_style = StyleHint::color(Color::rgb(0xff, 0xff, 0xff)).bold();
    let mut config = SplashConfig::new("GATE")
        .with_flicker_steps(vec![
            FlickerStep::new(Duration::ZERO, true),
            FlickerStep::new(Duration::from_millis(150), false),
            FlickerStep::new(Duration::from_millis(250), true),
        ])
        .with_vortex(vec![VortexEntry::Flicker { count: 2 }]);
    config.title_style = flicker_style;
    let mut seq = seeded(config);
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::PromptVisible);

    // After the glitch frames: visible, hidden, visible, then the prompt.
    let tail: Vec<&str> = sink
        .frames
        .iter()
        .filter_map(|frame| match frame.region {
            Region::Title if frame.is_blank() => Some("hidden"),
            Region::Title if frame.style == flicker_style => Some("visible"),
            Region::Title => None,
            Region::Prompt => Some("prompt"),
        })
        .collect();

    assert_eq!(tail, vec!["visible", "hidden", "visible", "prompt"]);
}

// ============================================================================
// Vortex scenario from the contract
// ============================================================================

#[test]
fn test_vortex_scenario_consumes_exactly_its_tick_budget() {
    let mut config = short_config();
    config.welcome_fade_ticks = 2;
    let interval = config.portal_interval;
    assert_eq!(config.vortex_tick_cost(), 8);

    let mut seq = seeded(config);
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::PromptVisible);
    seq.handle_input(InputEvent::Confirm, &mut sink);
    assert_eq!(seq.phase(), Phase::PortalTransition);

    let portal_start = sink.frames.len();

    // 2 flicker ticks + 1 art tick + 5 welcome ticks = 8 total.
    for tick in 1..=8 {
        assert_eq!(seq.phase(), Phase::PortalTransition, "before tick {tick}");
        seq.advance(interval, &mut sink);
    }
    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(sink.completions, 1);
    assert_eq!(seq.armed_timers(), 0);

    let portal_frames: Vec<&SplashFrame> = sink.frames[portal_start..]
        .iter()
        .filter(|frame| frame.region == Region::Title)
        .collect();
    assert_eq!(portal_frames.len(), 8, "one title render per tick");

    // Flicker entry: exactly two toggle renders, hidden then visible.
    assert!(portal_frames[0].is_blank());
    assert_eq!(portal_frames[1].text, "GATE");

    // Art entry: a single-tick static render with its own style.
    assert_eq!(portal_frames[2].text, "A");
    assert_eq!(portal_frames[2].style, art_style());

    // Welcome entry: five holds; corruption fades out after two ticks.
    for frame in &portal_frames[3..8] {
        assert_eq!(frame.style, art_style());
        assert_eq!(frame.text.chars().count(), "WELCOME".chars().count());
    }
    for frame in &portal_frames[5..8] {
        assert_eq!(frame.text, "WELCOME", "clean after the fade ticks");
    }
}

#[test]
fn test_empty_vortex_completes_on_first_tick() {
    let config = SplashConfig::new("GATE");
    let interval = config.portal_interval;
    let mut seq = seeded(config);
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::PromptVisible);
    seq.handle_input(InputEvent::Confirm, &mut sink);

    seq.advance(interval, &mut sink);
    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(sink.completions, 1);
}

// ============================================================================
// Forced-complete path
// ============================================================================

#[test]
fn test_cancel_terminates_from_every_phase() {
    for target in [
        Phase::Glitching,
        Phase::Flickering,
        Phase::PromptVisible,
        Phase::PortalTransition,
    ] {
        let mut seq = seeded(short_config());
        let mut sink = RecordingSink::default();

        seq.start(&mut sink);
        if target == Phase::PortalTransition {
            drive_to(&mut seq, &mut sink, Phase::PromptVisible);
            seq.handle_input(InputEvent::Confirm, &mut sink);
        } else {
            drive_to(&mut seq, &mut sink, target);
        }
        assert_eq!(seq.phase(), target);

        seq.handle_input(InputEvent::Cancel, &mut sink);
        assert_eq!(seq.phase(), Phase::Complete, "cancel from {target:?}");
        assert_eq!(seq.armed_timers(), 0, "no armed timers after {target:?}");
        assert_eq!(sink.completions, 1, "one completion from {target:?}");
    }
}

#[test]
fn test_cancelled_phase_timers_never_fire() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::Glitching);
    seq.handle_input(InputEvent::Cancel, &mut sink);

    // Keep pumping well past every interval in the configuration; a stale
    // glitch timer would render more frames.
    let frames_at_cancel = sink.frames.len();
    for _ in 0..100 {
        seq.advance(Duration::from_millis(100), &mut sink);
    }
    assert_eq!(sink.frames.len(), frames_at_cancel);
    assert_eq!(sink.completions, 1);
}

#[test]
fn test_confirm_cancels_pulse_timer() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    drive_to(&mut seq, &mut sink, Phase::PromptVisible);
    seq.handle_input(InputEvent::Confirm, &mut sink);

    // The confirm clears the prompt region once; after that no pulse frame
    // may ever appear again.
    let prompt_frames = sink.prompt_frames().len();
    assert!(sink.prompt_frames().last().expect("clear frame").is_blank());

    for _ in 0..50 {
        seq.advance(Duration::from_millis(600), &mut sink);
    }
    assert_eq!(sink.prompt_frames().len(), prompt_frames);
}

// ============================================================================
// Idempotence after completion
// ============================================================================

#[test]
fn test_everything_is_inert_after_completion() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();

    seq.start(&mut sink);
    seq.handle_input(InputEvent::Cancel, &mut sink);
    assert_eq!(seq.phase(), Phase::Complete);

    let frames = sink.frames.len();
    for _ in 0..20 {
        seq.advance(Duration::from_secs(1), &mut sink);
        seq.handle_input(InputEvent::Confirm, &mut sink);
        seq.handle_input(InputEvent::Cancel, &mut sink);
        seq.handle_input(InputEvent::Other, &mut sink);
    }

    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(sink.frames.len(), frames, "no renders after completion");
    assert_eq!(sink.completions, 1, "completion signalled exactly once");
}

// ============================================================================
// Timer hygiene
// ============================================================================

#[test]
fn test_armed_timers_stay_bounded_throughout() {
    let mut seq = seeded(short_config());
    let mut sink = RecordingSink::default();
    // At most the flicker one-shots plus the settle one-shot are armed at
    // once; every other phase holds a single repeating timer.
    let bound = SplashConfig::new("GATE").flicker_steps.len() + 1;

    seq.start(&mut sink);
    let mut confirmed = false;
    for _ in 0..4000 {
        if seq.phase() == Phase::Complete {
            break;
        }
        if seq.phase() == Phase::PromptVisible && !confirmed {
            confirmed = true;
            seq.handle_input(InputEvent::Confirm, &mut sink);
        }
        seq.advance(STEP, &mut sink);
        assert!(
            seq.armed_timers() <= bound,
            "{} timers armed during {:?}",
            seq.armed_timers(),
            seq.phase()
        );
    }
    assert_eq!(seq.phase(), Phase::Complete);
}

#[test]
fn test_seeded_runs_render_identical_frames() {
    let run = |seed: u64| {
        let mut seq = SplashSequencer::with_seed(short_config(), seed).expect("valid");
        let mut sink = RecordingSink::default();
        seq.start(&mut sink);
        drive_to(&mut seq, &mut sink, Phase::PromptVisible);
        seq.handle_input(InputEvent::Confirm, &mut sink);
        for _ in 0..8 {
            seq.advance(Duration::from_millis(150), &mut sink);
        }
        sink.frames
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43), "different seeds corrupt differently");
}
