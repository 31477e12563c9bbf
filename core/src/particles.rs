//! Drifting Particle Field
//!
//! Atmospheric background effect: a fixed-count field of single-glyph
//! particles drifting slowly across the area, wrapping at the edges and
//! respawning when their lifetime runs out. Pure state plus an
//! externally-driven `tick`; rendering is left to the surface.
//!
//! Randomness is seedable so tests can assert exact trajectories.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::frame::Color;

/// Particle glyphs, dim floating debris.
pub const PARTICLE_GLYPHS: [char; 6] = ['·', '˚', '*', '∙', '°', '•'];

/// Dim particle colors, subtle against a dark background.
pub const PARTICLE_COLORS: [Color; 5] = [
    Color::rgb(0x3a, 0x20, 0x20),
    Color::rgb(0x4a, 0x2a, 0x2a),
    Color::rgb(0x2a, 0x2a, 0x3a),
    Color::rgb(0x3a, 0x3a, 0x2a),
    Color::rgb(0x2a, 0x3a, 0x2a),
];

/// Horizontal drift choices. Zero-weighted so most particles sit still.
const DRIFT_X: [i32; 5] = [-1, 0, 0, 0, 1];
/// Vertical drift choices.
const DRIFT_Y: [i32; 4] = [-1, 0, 0, 1];

/// Lifetime range in ticks before a particle respawns.
const LIFETIME_RANGE: std::ops::Range<u32> = 10..31;

/// Probability per tick that a particle re-rolls its drift direction.
const DIRECTION_CHANGE_CHANCE: f32 = 0.1;

/// A single floating particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Column position.
    pub x: u16,
    /// Row position.
    pub y: u16,
    /// Display glyph.
    pub glyph: char,
    /// Display color.
    pub color: Color,
    dx: i32,
    dy: i32,
    lifetime: u32,
}

impl Particle {
    fn spawn(width: u16, height: u16, rng: &mut StdRng) -> Self {
        Self {
            x: rng.gen_range(0..width.max(1)),
            y: rng.gen_range(0..height.max(1)),
            glyph: PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())],
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            dx: DRIFT_X[rng.gen_range(0..DRIFT_X.len())],
            dy: DRIFT_Y[rng.gen_range(0..DRIFT_Y.len())],
            lifetime: rng.gen_range(LIFETIME_RANGE),
        }
    }

    /// Advance one tick. Returns `false` when the particle expired.
    fn update(&mut self, width: u16, height: u16, rng: &mut StdRng) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);
        if self.lifetime == 0 {
            return false;
        }

        self.x = wrap(i32::from(self.x) + self.dx, width);
        self.y = wrap(i32::from(self.y) + self.dy, height);

        if rng.gen::<f32>() < DIRECTION_CHANGE_CHANCE {
            self.dx = DRIFT_X[rng.gen_range(0..DRIFT_X.len())];
            self.dy = DRIFT_Y[rng.gen_range(0..DRIFT_Y.len())];
        }

        true
    }
}

fn wrap(value: i32, bound: u16) -> u16 {
    if bound == 0 {
        return 0;
    }
    value.rem_euclid(i32::from(bound)) as u16
}

/// A field of drifting particles over a width x height area.
#[derive(Debug)]
pub struct ParticleField {
    width: u16,
    height: u16,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field with an entropy-seeded random source.
    #[must_use]
    pub fn new(width: u16, height: u16, count: usize) -> Self {
        Self::with_rng(width, height, count, StdRng::from_entropy())
    }

    /// Create a field with a fixed seed for reproducible trajectories.
    #[must_use]
    pub fn with_seed(width: u16, height: u16, count: usize, seed: u64) -> Self {
        Self::with_rng(width, height, count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: u16, height: u16, count: usize, mut rng: StdRng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, &mut rng))
            .collect();
        Self {
            width,
            height,
            particles,
            rng,
        }
    }

    /// Re-seed every particle into new bounds (e.g. on terminal resize).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        for particle in &mut self.particles {
            *particle = Particle::spawn(width, height, &mut self.rng);
        }
    }

    /// Advance every particle one tick, respawning the expired ones.
    pub fn tick(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for particle in &mut self.particles {
            if !particle.update(self.width, self.height, &mut self.rng) {
                *particle = Particle::spawn(self.width, self.height, &mut self.rng);
            }
        }
    }

    /// The current particles, for the surface to paint.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
