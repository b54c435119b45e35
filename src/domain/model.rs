//! Payload value types carried by navigation history entries.
//!
//! These are immutable value snapshots, not live references to surfaces: a
//! [`SearchPlace`] or [`Category`] captures everything a surface needs to
//! reconstruct its previous content. All types round-trip exactly through
//! serde, which is what makes history entries safely persistable.

use serde::{Deserialize, Serialize};

/// A search category the user can browse (e.g. "Coffee", "Parking").
///
/// `id` is the canonical category identifier understood by the search
/// backend; `display_name` is what the surface shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub display_name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A geographic coordinate in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single result row as emitted by a search surface.
///
/// The coordinate is optional: some backends return address-only suggestions
/// that cannot be shown on a place card. Click events carrying such results
/// are ignored by the mediator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Option<Coordinate>,
    /// Canonical category ids this result belongs to, if known.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A user-saved favorite. Favorites always carry a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Coordinate,
}

/// How a place card came to be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOrigin {
    /// Created from a search/category result row.
    SearchResult,
    /// Created from a user favorite.
    Favorite,
}

/// Everything the place-details surface needs to render a place card.
///
/// Created when the user opens a place; immutable afterwards. The place
/// surface receives this value both on a fresh open and when the card is
/// restored from the back stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPlace {
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub categories: Vec<String>,
    pub origin: PlaceOrigin,
}

impl SearchPlace {
    /// Builds a place card from a search result and its resolved coordinate.
    ///
    /// The coordinate is passed separately because [`SearchResult::coordinate`]
    /// is optional; callers check for its presence first and results without
    /// one never become place cards.
    #[must_use]
    pub fn from_search_result(result: &SearchResult, coordinate: Coordinate) -> Self {
        Self {
            name: result.name.clone(),
            address: result.address.clone(),
            coordinate,
            categories: result.categories.clone(),
            origin: PlaceOrigin::SearchResult,
        }
    }

    /// Builds a place card from a user favorite.
    #[must_use]
    pub fn from_favorite(favorite: &FavoriteRecord) -> Self {
        Self {
            name: favorite.name.clone(),
            address: favorite.address.clone(),
            coordinate: favorite.coordinate,
            categories: Vec::new(),
            origin: PlaceOrigin::Favorite,
        }
    }
}
