//! Test RNG — deterministic `GameRng` implementations for tests.

use wordwolf_core::rng::GameRng;

/// A no-op RNG that always returns index `0`. Suitable for tests that do not
/// depend on specific shuffle outcomes.
#[derive(Debug)]
pub struct MockRng;

impl GameRng for MockRng {
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// An RNG that returns indices from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need a specific, repeatable
/// shuffle (e.g., forcing a particular team split).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<usize>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values. Each value must be
    /// in range for the call it will feed.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }
}

impl GameRng for SequenceRng {
    fn next_index(&mut self, _len: usize) -> usize {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
