//! Notification plumbing between game entities
//!
//! Entities never hold references to each other. Instead each one keeps an
//! [`Observers`] list of lightweight handles; a state change produces
//! [`Envelope`]s that the owning container (the neighborhood) routes
//! synchronously before the triggering call returns.

pub mod game_event;
pub mod observer;

pub use game_event::GameEvent;
pub use observer::{Envelope, Notification, Observer, Observers};
