//! Word Wolf Topics — the built-in topic catalog.
//!
//! Every round hands each team a [`Topic`]: the citizens on the team see the
//! citizen prompt, the wolf sees the wolf prompt. The two prompts are close
//! enough that the table talk stays plausible for everyone.
//!
//! The catalog is static data compiled into the binary. Sessions reference
//! topics by id so that a session snapshot never has to carry prompt text.

pub mod catalog;

pub use catalog::{catalog, topic_by_id, topic_ids, Topic};
