//! List use-case service.
//!
//! # Responsibility
//! - Run the validator before every create/rename mutation.
//! - Delegate persistence to whichever store backend was configured.
//! - Expose display-ordered reads for the rendering layer.
//!
//! # Invariants
//! - A failed validation performs no mutation.
//! - The service never bypasses the store contract; it holds no entity state
//!   of its own.

use crate::display::{sorted_lists, sorted_todos};
use crate::model::list::{ListId, Todo, TodoId, TodoList};
use crate::model::validate::{validate_list_name, validate_todo_text};
use crate::store::{StoreResult, TodoListStore};
use log::info;

/// Handler-facing wrapper around a store backend.
///
/// Generic over the backend so the variant is picked once at startup and the
/// handler code stays identical for both.
pub struct ListService<S: TodoListStore> {
    store: S,
}

impl<S: TodoListStore> ListService<S> {
    /// Creates a service over the provided backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the service, returning the backend.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates and creates a new list, returning its id.
    pub fn create_list(&mut self, name: &str) -> StoreResult<ListId> {
        validate_list_name(name, &self.store.all_lists()?)?;
        let id = self.store.create_list(name)?;
        info!("event=list_created module=service list_id={id}");
        Ok(id)
    }

    /// Validates and renames an existing list.
    ///
    /// Renaming a list to its current name is accepted: the duplicate check
    /// ignores the list being renamed.
    pub fn rename_list(&mut self, id: ListId, new_name: &str) -> StoreResult<()> {
        let lists = self.store.all_lists()?;
        let others: Vec<TodoList> = lists.into_iter().filter(|list| list.id != id).collect();
        validate_list_name(new_name, &others)?;
        self.store.rename_list(id, new_name)
    }

    /// Deletes a list and all of its todos. No-op when absent.
    pub fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        self.store.delete_list(id)
    }

    /// Validates and appends a todo; `Ok(None)` when the list is absent.
    pub fn create_todo(&mut self, list_id: ListId, text: &str) -> StoreResult<Option<TodoId>> {
        validate_todo_text(text)?;
        self.store.create_todo(list_id, text)
    }

    /// Deletes one todo. No-op when absent.
    pub fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()> {
        self.store.delete_todo(list_id, todo_id)
    }

    /// Overwrites a todo's completion flag. No-op when absent.
    pub fn set_todo_completed(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()> {
        self.store.set_todo_completed(list_id, todo_id, completed)
    }

    /// Marks every todo in the list complete. Idempotent.
    pub fn complete_all_todos(&mut self, list_id: ListId) -> StoreResult<()> {
        self.store.complete_all_todos(list_id)
    }

    /// Looks up one list. Absence is `Ok(None)`.
    pub fn find_list(&self, id: ListId) -> StoreResult<Option<TodoList>> {
        self.store.find_list(id)
    }

    /// Returns every list in canonical (creation) order.
    pub fn all_lists(&self) -> StoreResult<Vec<TodoList>> {
        self.store.all_lists()
    }

    /// Returns all lists ordered for display: incomplete lists first.
    pub fn lists_for_display(&self) -> StoreResult<Vec<TodoList>> {
        Ok(sorted_lists(&self.store.all_lists()?))
    }

    /// Returns one list's todos ordered for display: open todos first.
    ///
    /// Absent lists yield an empty sequence.
    pub fn todos_for_display(&self, list_id: ListId) -> StoreResult<Vec<Todo>> {
        let todos = self
            .store
            .find_list(list_id)?
            .map(|list| list.todos)
            .unwrap_or_default();
        Ok(sorted_todos(&todos))
    }
}
