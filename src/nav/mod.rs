//! Navigation layer: the mediator state machine and its plumbing.
//!
//! This is the core of the crate. Control flow is unidirectional:
//!
//! ```text
//! Surface events → Mediator decision logic → open/hide commands to surfaces
//!                                          → notifications to listeners
//! ```
//!
//! # Modules
//!
//! - [`events`]: Input events the host forwards from the surfaces
//! - [`listeners`]: Observer trait and the mutation-safe listener set
//! - [`stack`]: The navigation history back stack
//! - [`mediator`]: The coordinator owning stack, surfaces, and listeners

pub mod events;
pub mod listeners;
pub mod mediator;
pub mod stack;

pub use events::{SheetState, SubSheet, SurfaceEvent};
pub use listeners::{ListenerId, ListenerSet, NavigationEventsListener};
pub use mediator::{SearchSheetsMediator, BACK_STACK_KEY};
pub use stack::HistoryStack;
