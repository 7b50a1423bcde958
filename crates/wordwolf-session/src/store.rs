//! In-memory session store with change notification.
//!
//! The store holds at most one session inside a watch channel. Reads clone
//! the current record, writes replace it wholesale, and subscribers wake on
//! every write with the latest value.
//!
//! There is deliberately no lock spanning a read-modify-write: two
//! concurrent writers both read, both mutate their own copy, and the second
//! save wins the whole record. Every view eventually observes the latest
//! write through its subscription.

use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;
use wordwolf_core::clock::Clock;

use crate::domain::GameSession;

/// Shared store for the single live session.
pub struct SessionStore {
    clock: Arc<dyn Clock>,
    tx: watch::Sender<Option<GameSession>>,
}

impl SessionStore {
    /// Creates an empty store. Timestamps on create and save come from the
    /// given clock.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { clock, tx }
    }

    /// Returns the live session, creating one if none exists. Calling this
    /// with a session already live returns the existing session unchanged.
    pub fn create(&self) -> (GameSession, bool) {
        if let Some(existing) = self.get() {
            return (existing, false);
        }
        let session = GameSession::new(Uuid::new_v4(), self.clock.as_ref());
        self.tx.send_replace(Some(session.clone()));
        (session, true)
    }

    /// Returns a copy of the current session, if any.
    #[must_use]
    pub fn get(&self) -> Option<GameSession> {
        self.tx.borrow().clone()
    }

    /// Replaces the stored session with `session`, stamping `updated_at`,
    /// and returns the record as stored. The previous record is discarded
    /// whatever it contained.
    #[must_use = "the returned record carries the store-stamped updated_at"]
    pub fn save(&self, mut session: GameSession) -> GameSession {
        session.updated_at = self.clock.now();
        self.tx.send_replace(Some(session.clone()));
        session
    }

    /// Drops the live session, returning the store to its empty state.
    /// Subscribers observe the removal as a `None` value.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Subscribes to session changes. The receiver immediately holds the
    /// current value and wakes on every subsequent write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<GameSession>> {
        self.tx.subscribe()
    }
}
