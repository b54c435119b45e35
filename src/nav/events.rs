//! Events the host feeds into the mediator.
//!
//! Surfaces never mutate mediator state directly: they emit discrete events
//! (a tap, a bottom-sheet state change) which the host forwards to
//! [`crate::nav::SearchSheetsMediator::handle_event`]. All handling is
//! synchronous on the calling thread.

use crate::domain::model::{Category, FavoriteRecord, SearchResult};

/// Identifies one of the two non-root surfaces in state-change and close
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubSheet {
    Categories,
    Place,
}

/// Visual state reported by a bottom-sheet surface.
///
/// The mediator only reacts to [`SheetState::Hidden`]; the remaining states
/// are forwarded unchanged so hosts can reuse this enum for their own wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Hidden,
    Collapsed,
    HalfExpanded,
    Expanded,
    Dragging,
    Settling,
}

/// A discrete occurrence emitted by one of the three surfaces.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The user tapped a category on the root search surface.
    CategoryClicked(Category),

    /// The user tapped a result row, on the root surface or within a
    /// category's results.
    ///
    /// Results without a coordinate cannot be shown on a place card and are
    /// ignored.
    SearchResultClicked(SearchResult),

    /// The user tapped a favorite on the root search surface.
    FavoriteClicked(FavoriteRecord),

    /// The user tapped a sub-sheet's close control.
    CloseClicked(SubSheet),

    /// A sub-sheet reported a visual state change.
    ///
    /// `from_user` distinguishes a direct dismissal gesture (swipe-to-hide)
    /// from a programmatic hide issued as a byproduct of another transition.
    StateChanged {
        sheet: SubSheet,
        state: SheetState,
        from_user: bool,
    },
}
