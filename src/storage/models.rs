//! Persistence record types for navigation history.
//!
//! These are separate from the domain [`Screen`] type to keep a clear
//! boundary between storage representation and navigation logic: a record
//! stores its payload as an opaque [`serde_json::Value`], so corrupted or
//! foreign persisted state is representable and only surfaces when a record
//! is decoded back into a typed screen.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, SheetStackError};
use crate::domain::model::{Category, SearchPlace};
use crate::domain::screen::{Screen, ScreenKind};

/// Current version of the persisted-stack format.
pub const PERSISTED_STACK_VERSION: u32 = 1;

/// Raw persisted form of a single history entry.
///
/// The payload is kept opaque; [`ScreenRecord::decode`] is the only place a
/// kind/payload mismatch can be observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRecord {
    pub kind: ScreenKind,
    pub payload: serde_json::Value,
}

impl ScreenRecord {
    /// Encodes a typed screen into its persisted form.
    ///
    /// Encoding crate-defined payload types through `serde_json` cannot fail,
    /// so this is infallible.
    #[must_use]
    pub fn encode(screen: &Screen) -> Self {
        let (kind, payload) = match screen {
            Screen::Categories(category) => (
                ScreenKind::Categories,
                serde_json::to_value(category).unwrap_or(serde_json::Value::Null),
            ),
            Screen::Place(place) => (
                ScreenKind::Place,
                serde_json::to_value(place).unwrap_or(serde_json::Value::Null),
            ),
        };
        Self { kind, payload }
    }

    /// Decodes the record back into a typed screen.
    ///
    /// # Errors
    ///
    /// Returns [`SheetStackError::CorruptedState`] when the payload does not
    /// deserialize as the type the `kind` discriminant demands.
    pub fn decode(&self) -> Result<Screen> {
        match self.kind {
            ScreenKind::Categories => serde_json::from_value::<Category>(self.payload.clone())
                .map(Screen::Categories)
                .map_err(|e| {
                    SheetStackError::CorruptedState(format!(
                        "entry kind is Categories but payload is not a category: {e}"
                    ))
                }),
            ScreenKind::Place => serde_json::from_value::<SearchPlace>(self.payload.clone())
                .map(Screen::Place)
                .map_err(|e| {
                    SheetStackError::CorruptedState(format!(
                        "entry kind is Place but payload is not a place: {e}"
                    ))
                }),
        }
    }
}

/// Envelope persisted under the back-stack key.
///
/// Entries are ordered most-recent-first, matching the in-memory stack: the
/// first element is the current top. `saved_at` is informational only and is
/// not consulted during restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedStack {
    pub version: u32,

    /// Unix timestamp of when the stack was saved.
    pub saved_at: i64,

    #[serde(default)]
    pub entries: Vec<ScreenRecord>,
}

impl PersistedStack {
    /// Snapshots an ordered sequence of screens, top first.
    pub fn capture<'a>(screens: impl Iterator<Item = &'a Screen>) -> Self {
        Self {
            version: PERSISTED_STACK_VERSION,
            saved_at: Utc::now().timestamp(),
            entries: screens.map(ScreenRecord::encode).collect(),
        }
    }

    /// Decodes every record back into typed screens, top first.
    ///
    /// # Errors
    ///
    /// Fails on the first undecodable record. Decoding is eager so a corrupt
    /// entry deep in the history cannot lurk until a later back-press.
    pub fn decode_entries(&self) -> Result<Vec<Screen>> {
        self.entries.iter().map(ScreenRecord::decode).collect()
    }
}
