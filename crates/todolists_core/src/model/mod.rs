//! Domain model for to-do lists.
//!
//! # Responsibility
//! - Define the canonical `TodoList`/`Todo` records shared by all backends.
//! - Own name/text validation rules applied before any mutation.
//!
//! # Invariants
//! - Entity ids are immutable after creation and never reused.
//! - `todos` insertion order is the canonical order; display sorting is a
//!   read-time view, never a mutation.

pub mod list;
pub mod validate;
