//! Main Application
//!
//! The App drives the intro sequence against a real terminal:
//! - Converts terminal key events to the core's abstract input events
//! - Feeds real elapsed time into the sequencer
//! - Retains the latest frame per screen region and paints with ratatui
//! - Ticks the particle field on its own cadence
//!
//! The sequencer never sees the terminal; everything it knows arrives
//! through [`gatefall_core::SplashSink`].

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

use gatefall_core::lights::LightString;
use gatefall_core::particles::ParticleField;
use gatefall_core::{InputEvent, Region, SplashFrame, SplashSequencer, SplashSink};

use crate::art;
use crate::theme;

/// Particle animation cadence.
const PARTICLE_INTERVAL: Duration = Duration::from_millis(200);

/// Fallback poll interval when no timer is armed.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Background particle count.
const PARTICLE_COUNT: usize = 24;

/// Bulbs in the bottom light strip.
const LIGHT_COUNT: usize = 20;

/// Latest frame per region plus the completion flag.
///
/// This is the surface half of the render boundary: the sequencer pushes
/// frames in order, the app repaints from whatever is current.
#[derive(Default)]
struct ScreenState {
    title: Option<SplashFrame>,
    prompt: Option<SplashFrame>,
    completed: bool,
    dirty: bool,
}

impl ScreenState {
    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl SplashSink for ScreenState {
    fn render(&mut self, frame: SplashFrame) {
        match frame.region {
            Region::Title => self.title = Some(frame),
            Region::Prompt => self.prompt = Some(frame),
        }
        self.dirty = true;
    }

    fn sequence_complete(&mut self) {
        self.completed = true;
    }
}

/// Map a terminal key event to the core's input categories.
fn map_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Enter => InputEvent::Confirm,
        KeyCode::Esc | KeyCode::Char('q') => InputEvent::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Cancel,
        _ => InputEvent::Other,
    }
}

/// Main application state.
pub struct App {
    /// The intro sequencer.
    sequencer: SplashSequencer,
    /// Latest frames from the sequencer.
    screen: ScreenState,
    /// Background atmosphere.
    particles: ParticleField,
    /// Bottom light strip.
    lights: LightString,
    /// Is the app still running?
    running: bool,
    /// Whether the sequence was skipped rather than played through.
    skipped: bool,
}

impl App {
    /// Create a new App sized to the current terminal.
    pub fn new() -> anyhow::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        let sequencer = SplashSequencer::new(art::default_config())?;

        Ok(Self {
            sequencer,
            screen: ScreenState::default(),
            particles: ParticleField::new(width, height, PARTICLE_COUNT),
            lights: LightString::new(LIGHT_COUNT),
            running: true,
            skipped: false,
        })
    }

    /// Whether the user skipped out of the sequence.
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.skipped
    }

    /// Run the intro until it completes or is cancelled.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut particle_ticker = tokio::time::interval(PARTICLE_INTERVAL);
        let mut last_advance = Instant::now();

        self.sequencer.start(&mut self.screen);
        self.draw(terminal)?;

        while self.running {
            let wait = self.sequencer.until_next_deadline().unwrap_or(IDLE_WAIT);

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        // Terminal gone; bail out cleanly.
                        Some(Err(_)) | None => {
                            self.sequencer.handle_input(InputEvent::Cancel, &mut self.screen);
                        }
                    }
                }
                _ = tokio::time::sleep(wait) => {}
                _ = particle_ticker.tick() => {
                    self.particles.tick();
                    self.lights.tick();
                    self.screen.dirty = true;
                }
            }

            let now = Instant::now();
            self.sequencer
                .advance(now - last_advance, &mut self.screen);
            last_advance = now;

            if self.screen.completed {
                tracing::debug!(skipped = self.skipped, "intro sequence finished");
                self.running = false;
            }
            if self.screen.take_dirty() {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let input = map_key(key);
                if input == InputEvent::Cancel {
                    self.skipped = true;
                }
                self.sequencer.handle_input(input, &mut self.screen);
            }
            Event::Resize(width, height) => {
                self.particles.resize(width, height);
                self.screen.dirty = true;
            }
            _ => {}
        }
    }

    fn draw(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            fill_background(buf, area);
            paint_particles(buf, area, &self.particles);
            paint_lights(buf, area, &self.lights);

            let title_bottom = self
                .screen
                .title
                .as_ref()
                .filter(|splash| !splash.is_blank())
                .map(|splash| paint_block(buf, area, splash));

            if let Some(splash) = self
                .screen
                .prompt
                .as_ref()
                .filter(|splash| !splash.is_blank())
            {
                paint_prompt(buf, area, splash, title_bottom);
            }
        })?;
        Ok(())
    }
}

fn fill_background(buf: &mut Buffer, area: Rect) {
    let style = Style::default().bg(theme::term_color(theme::VOID_BLACK));
    buf.set_style(area, style);
}

fn paint_particles(buf: &mut Buffer, area: Rect, field: &ParticleField) {
    for particle in field.particles() {
        let x = area.x.saturating_add(particle.x);
        let y = area.y.saturating_add(particle.y);
        if x < area.right() && y < area.bottom() {
            let style = Style::default().fg(theme::term_color(particle.color));
            buf.set_string(x, y, particle.glyph.to_string(), style);
        }
    }
}

/// Paint a multi-line frame centered in the area. Returns the row below it.
fn paint_block(buf: &mut Buffer, area: Rect, splash: &SplashFrame) -> u16 {
    let style = theme::term_style(splash.style);
    let lines: Vec<&str> = splash.text.lines().collect();
    let height = lines.len() as u16;
    let width = lines
        .iter()
        .map(|line| line.width() as u16)
        .max()
        .unwrap_or(0);

    let x_offset = area.x + area.width.saturating_sub(width) / 2;
    let y_offset = area.y + area.height.saturating_sub(height + 4) / 2;

    for (row, line) in lines.iter().enumerate() {
        let y = y_offset + row as u16;
        if y >= area.bottom() {
            break;
        }
        buf.set_string(x_offset, y, line, style);
    }

    y_offset + height
}

/// Paint the bottom light strip, one bulb every other column.
fn paint_lights(buf: &mut Buffer, area: Rect, lights: &LightString) {
    if area.height == 0 {
        return;
    }
    let strip_width = (lights.bulbs().len() * 2) as u16;
    let x_offset = area.x + area.width.saturating_sub(strip_width) / 2;
    let y = area.bottom() - 1;

    for (idx, bulb) in lights.bulbs().iter().enumerate() {
        let x = x_offset + (idx * 2) as u16;
        if x >= area.right() {
            break;
        }
        let mut style = Style::default().fg(theme::term_color(bulb.color));
        let glyph = if bulb.dim {
            style = style.add_modifier(ratatui::style::Modifier::DIM);
            "○"
        } else {
            "●"
        };
        buf.set_string(x, y, glyph, style);
    }
}

fn paint_prompt(buf: &mut Buffer, area: Rect, splash: &SplashFrame, title_bottom: Option<u16>) {
    let style = theme::term_style(splash.style);
    let width = splash.text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = title_bottom
        .map_or(area.y + area.height / 2, |bottom| bottom + 1)
        .min(area.bottom().saturating_sub(1));
    buf.set_string(x, y, &splash.text, style);
}
