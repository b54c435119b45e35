//! Surface adapter traits: the boundary between the mediator and the three
//! presentation surfaces.
//!
//! The mediator never renders anything itself. It owns one implementation of
//! each trait below and drives visibility through them, while the host feeds
//! the surfaces' click and state-change notifications back into the mediator
//! as [`crate::nav::SurfaceEvent`] values.
//!
//! Each trait distinguishes between `open`, which starts the surface's normal
//! open flow (for the category surface this triggers result loading), and
//! `restore_previous_non_hidden_state`, which brings back previously shown
//! content without re-triggering work. The mediator uses the restore variant
//! for every from-back-stack re-open.

use crate::domain::model::{Category, SearchPlace};

/// The root search surface.
///
/// Visible exactly when the navigation history is empty. It is never part of
/// the back stack itself; returning to it is always a reset or a final pop.
pub trait SearchSheet {
    /// Opens the surface in its default (non-hidden) state.
    fn open(&mut self);

    /// Hides the surface.
    fn hide(&mut self);

    /// Whether the surface currently reports itself hidden.
    fn is_hidden(&self) -> bool;

    /// Brings back the surface's last non-hidden visual state.
    ///
    /// Used when all three surfaces momentarily report hidden during a
    /// transition, to guarantee something is visible again.
    fn restore_previous_non_hidden_state(&mut self);

    /// Gives the surface a chance to consume a back press internally
    /// (e.g. collapsing an expanded search field).
    ///
    /// Returns `true` if the back press was consumed.
    fn handle_back_pressed(&mut self) -> bool;
}

/// The category-results surface.
pub trait CategoriesSheet {
    /// Opens the surface for `category`, triggering result loading.
    fn open(&mut self, category: &Category);

    fn hide(&mut self);

    fn is_hidden(&self) -> bool;

    /// Re-shows `category` with its previously fetched results.
    ///
    /// Must not re-trigger loading; the surface is expected to still hold
    /// the result set it displayed before being hidden.
    fn restore_previous_non_hidden_state(&mut self, category: &Category);

    /// Cancels any in-flight category result loading.
    ///
    /// Called by the mediator on reset-to-root; this is the only cancelable
    /// work the mediator knows about.
    fn cancel_category_loading(&mut self);

    /// Gives the surface a chance to consume a back press internally.
    fn handle_back_pressed(&mut self) -> bool;
}

/// The place-details surface.
pub trait PlaceSheet {
    /// Opens the surface showing `place`.
    fn open(&mut self, place: &SearchPlace);

    fn hide(&mut self);

    fn is_hidden(&self) -> bool;

    /// Re-shows `place` in the surface's previous non-hidden state.
    fn restore_previous_non_hidden_state(&mut self, place: &SearchPlace);
}
