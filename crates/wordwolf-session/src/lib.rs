//! Word Wolf — session bounded context.
//!
//! Owns the single live game session: the player roster, the phase cycle,
//! team partitioning, the round timer, and vote tallying. State lives in an
//! in-memory store with last-write-wins semantics; every mutation goes
//! through a read-modify-write of the whole session record.

pub mod application;
pub mod domain;
pub mod store;
