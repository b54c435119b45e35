//! The navigation mediator: a back-stack state machine coordinating the
//! three presentation surfaces.
//!
//! [`SearchSheetsMediator`] owns the history stack and the three surface
//! adapters. It consumes [`SurfaceEvent`]s, decides which surface becomes
//! visible, issues open/hide commands, and notifies registered
//! [`NavigationEventsListener`]s after each completed transition.
//!
//! # State machine
//!
//! Three logical states (root, categories, place) derived from the stack:
//! the top entry (if any) is the visible non-root surface; an empty stack
//! means the root search surface is visible. Never are two non-root
//! surfaces visible at once.
//!
//! # Failure semantics
//!
//! Nothing in this component is retried and nothing is fatal to the process
//! under [`FallbackPolicy::ResetToRoot`]: corrupted restored state and
//! impossible derived states are either promoted to a loud panic
//! ([`FallbackPolicy::Assert`], for development) or silently recovered by
//! resetting navigation to the root surface.

use std::rc::Rc;

use crate::domain::model::{Category, SearchPlace};
use crate::domain::screen::Screen;
use crate::nav::events::{SheetState, SubSheet, SurfaceEvent};
use crate::nav::listeners::{ListenerId, ListenerSet, NavigationEventsListener};
use crate::nav::stack::HistoryStack;
use crate::storage::models::PersistedStack;
use crate::storage::store::InstanceState;
use crate::surface::{CategoriesSheet, PlaceSheet, SearchSheet};
use crate::{FallbackPolicy, MediatorConfig};

/// Well-known instance-state key under which the back stack is persisted.
pub const BACK_STACK_KEY: &str = "sheetstack.state.back_stack";

/// Coordinates navigation between the root search surface, the
/// category-results surface, and the place-details surface.
///
/// Generic over the three surface adapter traits so hosts plug in their own
/// views and tests plug in recording fakes. All methods execute
/// synchronously on the calling thread; the mediator owns no background
/// work.
#[derive(Debug)]
pub struct SearchSheetsMediator<S, C, P>
where
    S: SearchSheet,
    C: CategoriesSheet,
    P: PlaceSheet,
{
    search: S,
    categories: C,
    place: P,

    // Top points to the currently open screen; empty means the root search
    // surface is open.
    stack: HistoryStack,

    listeners: ListenerSet,
    config: MediatorConfig,
}

impl<S, C, P> SearchSheetsMediator<S, C, P>
where
    S: SearchSheet,
    C: CategoriesSheet,
    P: PlaceSheet,
{
    #[must_use]
    pub fn new(search: S, categories: C, place: P, config: MediatorConfig) -> Self {
        Self {
            search,
            categories,
            place,
            stack: HistoryStack::new(),
            listeners: ListenerSet::new(),
            config,
        }
    }

    /// Registers a navigation listener and returns its removal handle.
    pub fn add_listener(&self, listener: Rc<dyn NavigationEventsListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Removes a previously registered listener.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns a shared handle to the listener set.
    ///
    /// Any holder of the handle may add or remove listeners, including from
    /// within a notification.
    #[must_use]
    pub fn listeners(&self) -> ListenerSet {
        self.listeners.clone()
    }

    /// Processes a single surface event.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        let _span = tracing::debug_span!("handle_event", event = ?event).entered();

        match event {
            SurfaceEvent::CategoryClicked(category) => {
                self.open_category(&category, false);
            }
            SurfaceEvent::SearchResultClicked(result) => match result.coordinate {
                Some(coordinate) => {
                    let place = SearchPlace::from_search_result(&result, coordinate);
                    self.open_place(&place, false);
                }
                None => {
                    tracing::debug!(result_id = %result.id, "result has no coordinate, ignoring");
                }
            },
            SurfaceEvent::FavoriteClicked(favorite) => {
                let place = SearchPlace::from_favorite(&favorite);
                self.open_place(&place, false);
            }
            SurfaceEvent::CloseClicked(sheet) => {
                tracing::debug!(sheet = ?sheet, "close clicked");
                self.reset_to_root();
            }
            SurfaceEvent::StateChanged {
                sheet,
                state,
                from_user,
            } => {
                if state == SheetState::Hidden {
                    self.on_sub_sheet_hidden(sheet, from_user);
                }
            }
        }
    }

    /// Handles a hardware/gesture back press.
    ///
    /// The search and categories surfaces are offered the back action first
    /// (they may have an internal back target, such as collapsing a search
    /// field); popping the mediator's own stack is the fallback of last
    /// resort. Returns whether any layer consumed the back action, so the
    /// host can decide whether to exit the containing screen.
    pub fn handle_on_back_pressed(&mut self) -> bool {
        self.search.handle_back_pressed()
            || self.categories.handle_back_pressed()
            || self.pop_back_stack()
    }

    /// Serializes the history stack, most-recent-first, under
    /// [`BACK_STACK_KEY`].
    pub fn on_save_instance_state(&self, store: &mut InstanceState) {
        let persisted = PersistedStack::capture(self.stack.iter());
        tracing::debug!(entries = persisted.entries.len(), "saving back stack");

        // Encoding crate-defined payloads cannot fail; absorb rather than
        // propagate per the no-user-visible-errors contract.
        if let Err(e) = store.set(BACK_STACK_KEY, &persisted) {
            tracing::warn!(error = %e, "failed to save back stack");
        }
    }

    /// Restores the history stack from [`BACK_STACK_KEY`] and re-derives the
    /// visible surface from the new top.
    ///
    /// An absent key leaves the current (fresh) state untouched. The top
    /// entry is re-opened through the from-back-stack variant: no re-push,
    /// no loading retrigger. Malformed or mismatched persisted state goes
    /// through the fallback policy instead of crashing the navigation flow.
    pub fn on_restore_instance_state(&mut self, store: &InstanceState) {
        if !store.contains(BACK_STACK_KEY) {
            tracing::debug!("no saved back stack, keeping fresh state");
            return;
        }

        let persisted: PersistedStack = match store.get(BACK_STACK_KEY) {
            Ok(Some(persisted)) => persisted,
            Ok(None) => return,
            Err(e) => {
                self.fallback(&format!("persisted back stack is malformed: {e}"));
                return;
            }
        };

        let screens = match persisted.decode_entries() {
            Ok(screens) => screens,
            Err(e) => {
                self.fallback(&e.to_string());
                return;
            }
        };

        tracing::debug!(entries = screens.len(), "restoring back stack");
        self.stack.replace_all(screens);
        self.apply_top_state();
    }

    /// Whether navigation is currently at the root search surface.
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of entries in the navigation history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.stack.len()
    }

    /// The screen the visible non-root surface reconstructs, if any.
    #[must_use]
    pub fn current_screen(&self) -> Option<&Screen> {
        self.stack.peek()
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn categories(&self) -> &C {
        &self.categories
    }

    pub fn place(&self) -> &P {
        &self.place
    }

    fn open_category(&mut self, category: &Category, from_back_stack: bool) {
        tracing::debug!(
            category = %category.id,
            from_back_stack,
            "opening categories surface"
        );

        if from_back_stack {
            self.categories.restore_previous_non_hidden_state(category);
        } else {
            self.stack.push(Screen::Categories(category.clone()));
            self.categories.open(category);
        }
        self.search.hide();
        self.place.hide();

        self.listeners
            .emit(|l| l.on_open_categories_bottom_sheet(category));
    }

    fn open_place(&mut self, place: &SearchPlace, from_back_stack: bool) {
        tracing::debug!(place = %place.name, from_back_stack, "opening place surface");

        if from_back_stack {
            self.place.restore_previous_non_hidden_state(place);
        } else {
            self.stack.push(Screen::Place(place.clone()));
            self.place.open(place);
        }
        self.search.hide();
        self.categories.hide();

        self.listeners.emit(|l| l.on_open_place_bottom_sheet(place));
    }

    fn reset_to_root(&mut self) {
        tracing::debug!(discarded = self.stack.len(), "resetting to root");

        self.search.open();
        self.place.hide();
        self.categories.hide();
        self.categories.cancel_category_loading();
        self.stack.clear();

        self.listeners.emit(|l| l.on_back_to_main_bottom_sheet());
    }

    /// Pops one history entry and applies the new top. Returns `false` when
    /// there was nothing to pop.
    fn pop_back_stack(&mut self) -> bool {
        if self.stack.is_empty() {
            return false;
        }

        self.stack.pop();
        self.apply_top_state();
        true
    }

    /// Re-derives surface visibility from the current stack top without
    /// mutating history: from-back-stack opens restore the surface's
    /// previous visual state instead of starting a fresh open flow.
    fn apply_top_state(&mut self) {
        if self.stack.is_empty() {
            self.place.hide();
            self.categories.hide();
            self.categories.cancel_category_loading();
            return;
        }

        match self.stack.peek().cloned() {
            Some(Screen::Categories(category)) => self.open_category(&category, true),
            Some(Screen::Place(place)) => self.open_place(&place, true),
            None => self.fallback("history is non-empty but has no top entry"),
        }
    }

    /// Reacts to a non-root surface reporting itself hidden.
    ///
    /// A direct user dismissal gesture counts as an explicit close. A
    /// programmatic hide (byproduct of opening a different surface) only
    /// matters if it leaves all three surfaces hidden at once; the check is
    /// level-triggered, re-querying every flag after each command settles,
    /// so no intermediate blank state survives.
    fn on_sub_sheet_hidden(&mut self, sheet: SubSheet, hidden_by_user: bool) {
        tracing::debug!(sheet = ?sheet, hidden_by_user, "sub-sheet hidden");

        if hidden_by_user {
            self.reset_to_root();
        } else if self.categories.is_hidden()
            && self.place.is_hidden()
            && self.search.is_hidden()
        {
            self.search.restore_previous_non_hidden_state();
            self.listeners.emit(|l| l.on_back_to_main_bottom_sheet());
        }
    }

    /// Environment-conditioned recovery from an invalid state: loud in
    /// development, invisible in production.
    fn fallback(&mut self, message: &str) {
        match self.config.fallback_policy {
            FallbackPolicy::Assert => {
                tracing::error!(message, "invalid navigation state");
                panic!("invalid navigation state: {message}");
            }
            FallbackPolicy::ResetToRoot => {
                tracing::warn!(message, "invalid navigation state, recovering to root");
                self.reset_to_root();
            }
        }
    }
}
