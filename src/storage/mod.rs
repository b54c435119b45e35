//! Persistence layer for navigation history.
//!
//! This module provides the saved-state container and the raw record types
//! used to serialize the back stack. Record types are kept separate from
//! domain models so that corrupted persisted state is representable and
//! recoverable instead of being a deserialization dead end.
//!
//! # Modules
//!
//! - `models`: Raw screen records and the versioned persisted-stack envelope
//! - `store`: The key/value [`InstanceState`] container with atomic file I/O

pub mod models;
pub mod store;

pub use models::{PersistedStack, ScreenRecord, PERSISTED_STACK_VERSION};
pub use store::InstanceState;
