//! Word Wolf — HTTP API for the session coordinator.
//!
//! Facilitator actions arrive as REST commands; every view follows the
//! session through a Server-Sent Events stream of whole snapshots. The
//! binary entry point wires in the production clock, an entropy-seeded
//! random source, and the single authoritative timer ticker.

pub mod error;
pub mod routes;
pub mod state;
pub mod ticker;
