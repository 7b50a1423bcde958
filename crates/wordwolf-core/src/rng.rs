//! Random source abstraction for reproducible draws.
//!
//! The partition search, wolf selection, and topic draws all go through
//! this trait, so a seeded or scripted source makes a whole round
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over uniform random choice.
pub trait GameRng: Send + Sync {
    /// Returns a uniform random index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `len` is zero; callers draw only from
    /// non-empty collections.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Production random source backed by rand's `StdRng`.
#[derive(Debug)]
pub struct SeededRng(StdRng);

impl SeededRng {
    /// Creates a source with a fixed seed for reproducible runs.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl GameRng for SeededRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}
