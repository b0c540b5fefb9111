//! RNG module - random sources for tile spawning
//!
//! Spawning needs two decisions: which empty cell receives the tile, and
//! whether the tile is a 2 or a 4. Both go through the [`TileRng`] trait so
//! the session can be driven by any `rand::Rng` in production and by scripted
//! sequences in tests.
//!
//! Also provides a simple LCG for deterministic, seed-reproducible games.

use rand::{Rng, RngCore};

/// Random decisions needed by tile spawning
pub trait TileRng {
    /// Pick an index uniformly from `[0, len)`. `len` is never 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Return true with probability `percent / 100`.
    fn roll_percent(&mut self, percent: u32) -> bool;
}

impl<R: Rng + ?Sized> TileRng for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn roll_percent(&mut self, percent: u32) -> bool {
        self.gen_range(0..100u32) < percent
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current generator state (feeding it back into `new` replays the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step() as u64;
        let lo = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
