//! Core types for the recal ecosystem.
//!
//! This crate provides the shared pieces the recal CLI builds on:
//! - `Event` and `Repeat` records matching the event store's JSON shape
//! - `recurrence` for expanding a repeat rule into dated instances
//! - `series` for grouping instances back into their series by id

pub mod error;
pub mod event;
pub mod recurrence;
pub mod series;

// Re-export the main types at crate root for convenience
pub use error::{RecalError, RecalResult};
pub use event::{Event, EventList};
pub use recurrence::{DEFAULT_HORIZON, Repeat, RepeatKind, expand_repeating_event};
