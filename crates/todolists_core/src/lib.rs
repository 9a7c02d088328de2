//! Core domain logic for the to-do list manager.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod display;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use display::{sort_for_display, sorted_lists, sorted_todos};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListId, Todo, TodoId, TodoList};
pub use model::validate::{validate_list_name, validate_todo_text, ValidationError};
pub use service::list_service::ListService;
pub use store::session_store::SessionStore;
pub use store::sqlite_store::SqliteStore;
pub use store::{StoreError, StoreResult, TodoListStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
