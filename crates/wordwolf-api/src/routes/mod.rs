//! Route modules for the session coordinator.

pub mod game;
pub mod health;
pub mod players;
pub mod session;
pub mod topics;
pub mod votes;
