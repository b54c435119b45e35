//! Navigation event observers.
//!
//! External observers subscribe to the mediator through a [`ListenerSet`],
//! a single-threaded copy-on-read listener list: every emission iterates a
//! snapshot of the current listeners, so any listener may add or remove
//! listeners (including itself) during delivery without invalidating the
//! iteration. Delivery to all listeners present at emission time is
//! guaranteed; ordering between listeners is not.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::model::{Category, SearchPlace};

/// Notifications emitted by the mediator after each completed transition.
///
/// All methods have empty default bodies so observers implement only what
/// they care about.
pub trait NavigationEventsListener {
    /// The place-details surface became the visible surface.
    fn on_open_place_bottom_sheet(&self, place: &SearchPlace) {
        let _ = place;
    }

    /// The category-results surface became the visible surface.
    fn on_open_categories_bottom_sheet(&self, category: &Category) {
        let _ = category;
    }

    /// Navigation returned to the root search surface.
    fn on_back_to_main_bottom_sheet(&self) {}
}

/// Handle identifying a registered listener, returned by
/// [`ListenerSet::add`] and consumed by [`ListenerSet::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct ListenerSetInner {
    next_id: u64,
    listeners: Vec<(ListenerId, Rc<dyn NavigationEventsListener>)>,
}

/// Cloneable, mutation-safe set of navigation listeners.
///
/// Clones share the same underlying set, so the mediator and any number of
/// host components can hold handles to it. Not thread-safe; all access must
/// happen on the event-dispatch thread, matching the mediator's
/// single-threaded model.
#[derive(Clone, Default)]
pub struct ListenerSet {
    inner: Rc<RefCell<ListenerSetInner>>,
}

impl ListenerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its removal handle.
    pub fn add(&self, listener: Rc<dyn NavigationEventsListener>) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner.listeners.push((id, listener));
        id
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `true` if the listener was present. Removing during an
    /// in-progress emission is allowed; the current emission still delivers
    /// to the snapshot it took.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().listeners.is_empty()
    }

    /// Invokes `notify` once per listener registered at the time of the call.
    ///
    /// The borrow on the underlying set is released before any listener runs,
    /// so listeners are free to call [`add`](Self::add) or
    /// [`remove`](Self::remove) re-entrantly.
    pub fn emit<F>(&self, notify: F)
    where
        F: Fn(&dyn NavigationEventsListener),
    {
        let snapshot: Vec<Rc<dyn NavigationEventsListener>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            notify(listener.as_ref());
        }
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}
