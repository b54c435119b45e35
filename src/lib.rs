//! Sheetstack: a back-stack navigation mediator for overlapping search
//! bottom sheets.
//!
//! Three presentation surfaces (a root search surface, a category-results
//! surface, and a place-details surface) share a single visible region.
//! This crate coordinates them:
//! - exactly one surface is visible at any time,
//! - a navigable history of visited surfaces is maintained,
//! - the history survives process/activity recreation,
//! - external surfaces drive transitions (user taps) while the mediator
//!   also reacts to surfaces closing themselves (swipe-to-dismiss).
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application                                   │  ← owns the real surfaces,
//! │  (wires surface callbacks into SurfaceEvents)       │    forwards events
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Navigation layer (nav/)                            │  ← back-stack state machine
//! │  - SearchSheetsMediator                             │  ← transition logic
//! │  - HistoryStack, ListenerSet                        │
//! └─────────────────────────────────────────────────────┘
//!         │                     │
//! ┌───────────────────┐  ┌───────────────────┐
//! │ Surface seam      │  │ Persistence       │
//! │ (surface/)        │  │ (storage/)        │
//! │ - SearchSheet     │  │ - InstanceState   │
//! │ - CategoriesSheet │  │ - ScreenRecord    │
//! │ - PlaceSheet      │  │ - PersistedStack  │
//! └───────────────────┘  └───────────────────┘
//!         │                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain layer (domain/)                             │
//! │  - Screen descriptors, payload models, errors       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`nav`]: The mediator state machine, history stack, events, listeners
//! - [`surface`]: Adapter traits implemented by the host's surfaces
//! - [`domain`]: Screen descriptors, payload value types, error types
//! - [`storage`]: Instance-state store and persisted record formats
//! - [`observability`]: Optional tracing subscriber setup for hosts/tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use sheetstack::{MediatorConfig, SearchSheetsMediator, SurfaceEvent};
//!
//! let mut mediator = SearchSheetsMediator::new(
//!     my_search_sheet,
//!     my_categories_sheet,
//!     my_place_sheet,
//!     MediatorConfig::default(),
//! );
//!
//! // Forward surface callbacks as events:
//! mediator.handle_event(SurfaceEvent::CategoryClicked(category));
//!
//! // Hardware back:
//! let consumed = mediator.handle_on_back_pressed();
//!
//! // Lifecycle:
//! let mut state = sheetstack::InstanceState::new();
//! mediator.on_save_instance_state(&mut state);
//! // ... process recreated ...
//! mediator.on_restore_instance_state(&state);
//! ```
//!
//! # Key design decisions
//!
//! ## Derived visibility, not stored state
//!
//! The mediator stores no "current surface" field: the visible surface is
//! always derived from the history stack's top (or its absence). This makes
//! the stack the single source of truth and keeps save/restore a pure
//! stack serialization.
//!
//! ## Invisible recovery
//!
//! Navigation failures are recoveries, not user-facing errors. Corrupted
//! restored state and impossible derived states either panic loudly under
//! [`FallbackPolicy::Assert`] (to catch regressions during development) or
//! silently reset navigation to the root surface under
//! [`FallbackPolicy::ResetToRoot`]. The policy is injected so both
//! behaviors are independently testable.

pub mod domain;
pub mod nav;
pub mod observability;
pub mod storage;
pub mod surface;

pub use domain::{
    Category, Coordinate, FavoriteRecord, PlaceOrigin, Result, Screen, ScreenKind, SearchPlace,
    SearchResult, SheetStackError,
};
pub use nav::{
    HistoryStack, ListenerId, ListenerSet, NavigationEventsListener, SearchSheetsMediator,
    SheetState, SubSheet, SurfaceEvent, BACK_STACK_KEY,
};
pub use storage::InstanceState;
pub use surface::{CategoriesSheet, PlaceSheet, SearchSheet};

/// How the mediator reacts to invalid or corrupt navigation state.
///
/// See the crate-level "Invisible recovery" notes. The default follows the
/// build profile: `Assert` in debug builds, `ResetToRoot` in release
/// builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Panic with a descriptive message. Development builds use this to
    /// surface logic bugs early.
    Assert,

    /// Log a warning and reset navigation to the root surface. Production
    /// builds use this so navigation failures stay invisible.
    ResetToRoot,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Assert
        } else {
            Self::ResetToRoot
        }
    }
}

/// Mediator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediatorConfig {
    /// Recovery behavior for invalid navigation state.
    pub fallback_policy: FallbackPolicy,
}

impl MediatorConfig {
    /// Configuration with an explicit fallback policy.
    #[must_use]
    pub const fn with_fallback(fallback_policy: FallbackPolicy) -> Self {
        Self { fallback_policy }
    }
}
