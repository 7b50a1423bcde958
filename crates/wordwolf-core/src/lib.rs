//! Word Wolf Core — shared abstractions.
//!
//! This crate defines the error type and the clock/randomness seams that
//! the session context depends on. It contains no game rules.

pub mod clock;
pub mod error;
pub mod rng;
