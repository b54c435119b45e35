//! Domain layer for the sheetstack crate.
//!
//! This module contains the core domain types for navigation history,
//! independent of any surface toolkit or persistence concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`model`]: Payload value types (categories, places, results)
//! - [`screen`]: Screen descriptors forming the navigation history

pub mod error;
pub mod model;
pub mod screen;

pub use error::{Result, SheetStackError};
pub use model::{Category, Coordinate, FavoriteRecord, PlaceOrigin, SearchPlace, SearchResult};
pub use screen::{Screen, ScreenKind};
