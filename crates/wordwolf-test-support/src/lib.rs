//! Shared test mocks and utilities for the Word Wolf coordinator.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
