//! Feedback particles spawned on every matched word.
//!
//! Particles are purely decorative. Each match appends one burst; each expiry
//! removes the oldest burst-sized slice from the front of the set. Expiry is
//! keyed to insertion order, not to individual particle age, so with
//! overlapping bursts a later burst can lose particles before it is a full
//! lifetime old.

use crate::core::constants::PARTICLES_PER_BURST;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Hue in degrees, drawn fully saturated at 50% lightness.
    pub hue: f64,
    /// Direction in radians.
    pub angle: f64,
}

impl Particle {
    /// RGB for `hsl(hue, 100%, 50%)`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = 1.0 - ((h % 2.0) - 1.0).abs();
        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let to_byte = |c: f64| (c * 255.0).round() as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }
}

/// Live particles in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one burst at `(x, y)` with random hues and angles.
    pub fn burst<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64) {
        self.particles
            .extend((0..PARTICLES_PER_BURST).map(|_| Particle {
                x,
                y,
                hue: rng.gen_range(0.0..360.0),
                angle: rng.gen_range(0.0..TAU),
            }));
    }

    /// Drop the oldest burst-sized slice. Returns how many were removed.
    pub fn expire_oldest(&mut self) -> usize {
        let count = PARTICLES_PER_BURST.min(self.particles.len());
        self.particles.drain(..count);
        count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
