//! Storage layer contracts and backend implementations.
//!
//! # Responsibility
//! - Define the backend-independent `TodoListStore` contract.
//! - Isolate per-backend persistence details from service orchestration.
//!
//! # Invariants
//! - Stores assume create/rename inputs were validated by the caller; the
//!   use-case service is the layer that runs the validator.
//! - Mutations addressing an absent list or todo are silent no-ops on every
//!   backend (`create_todo` reports the absent parent via `Ok(None)`).
//! - Entity ids are never reused within one store lifetime.

use crate::db::DbError;
use crate::model::list::{ListId, TodoId, TodoList};
use crate::model::validate::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod alloc;
pub mod session_store;
pub mod sqlite_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surface shared by the use-case service and both store backends.
///
/// `Validation` is recoverable and user-facing; the remaining variants are
/// storage-layer failures the handler turns into a generic error response.
/// The ephemeral backend never produces `Db`.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Backend-independent contract for list/todo persistence.
///
/// Both variants expose identical semantics; they differ only in where state
/// lives and how long it survives.
pub trait TodoListStore {
    /// Looks up one list with its todos. Absence is `Ok(None)`.
    fn find_list(&self, id: ListId) -> StoreResult<Option<TodoList>>;
    /// Returns every list in creation order.
    fn all_lists(&self) -> StoreResult<Vec<TodoList>>;
    /// Appends an empty list under a freshly allocated id.
    fn create_list(&mut self, name: &str) -> StoreResult<ListId>;
    /// Removes the list and all of its todos atomically. No-op when absent.
    fn delete_list(&mut self, id: ListId) -> StoreResult<()>;
    /// Renames the list in place. No-op when absent.
    fn rename_list(&mut self, id: ListId, new_name: &str) -> StoreResult<()>;
    /// Appends an open todo to the list, returning its id, or `Ok(None)`
    /// when the parent list is absent.
    fn create_todo(&mut self, list_id: ListId, text: &str) -> StoreResult<Option<TodoId>>;
    /// Removes the matching todo. No-op when absent.
    fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()>;
    /// Overwrites the completion flag. No-op when absent.
    fn set_todo_completed(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()>;
    /// Marks every todo in the list complete. Idempotent; no-op when absent.
    fn complete_all_todos(&mut self, list_id: ListId) -> StoreResult<()>;
}
