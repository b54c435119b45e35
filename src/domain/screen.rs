//! Screen descriptors: the entries of the navigation history.
//!
//! A [`Screen`] identifies which surface a history entry reconstructs and
//! carries that surface's payload. The payload type is fixed by the variant,
//! so an in-memory entry can never carry a mismatched payload; mismatches are
//! only representable in the raw persisted form (see
//! [`crate::storage::models::ScreenRecord`]) and are caught when decoding.

use serde::{Deserialize, Serialize};

use crate::domain::model::{Category, SearchPlace};

/// Discriminant identifying which surface a history entry belongs to.
///
/// Persisted alongside the raw payload so restored records can be decoded
/// into the matching [`Screen`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    Categories,
    Place,
}

/// A navigation history entry: the category-results surface showing a
/// category, or the place-details surface showing a place.
///
/// Entries are immutable value snapshots. They are created when the user
/// opens a category or place (not via back navigation) and destroyed when
/// popped, cleared, or superseded by a full stack replace.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Categories(Category),
    Place(SearchPlace),
}

impl Screen {
    /// The discriminant for this entry, as stored in the persisted form.
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Categories(_) => ScreenKind::Categories,
            Self::Place(_) => ScreenKind::Place,
        }
    }
}
