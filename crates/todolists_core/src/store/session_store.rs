//! Ephemeral in-memory store scoped to one client session.
//!
//! # Responsibility
//! - Hold all lists/todos for a single session in process memory.
//! - Keep id allocation monotonic across deletions.
//!
//! # Invariants
//! - State is created empty and discarded when the session value drops; no
//!   cross-session visibility.
//! - High-water marks guarantee ids are never reused within the store's
//!   lifetime, even after the row with the highest id is deleted.

use crate::model::list::{ListId, Todo, TodoId, TodoList};
use crate::store::alloc::next_id;
use crate::store::{StoreResult, TodoListStore};
use std::collections::HashMap;

/// In-memory backend. One instance per client session.
///
/// Construct with [`SessionStore::new`] at session start and pass the
/// instance into per-request handling; dropping it ends the session's state.
#[derive(Debug, Default)]
pub struct SessionStore {
    lists: Vec<TodoList>,
    // Minimum id for the next list allocation; stays ahead of deleted ids.
    next_list_id: ListId,
    // Same watermark, per surviving list, for its todos.
    next_todo_ids: HashMap<ListId, TodoId>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    fn list_mut(&mut self, id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    fn allocate_list_id(&mut self) -> ListId {
        let id = next_id(self.lists.iter().map(|list| list.id)).max(self.next_list_id);
        self.next_list_id = id + 1;
        id
    }

    fn allocate_todo_id(&mut self, list_id: ListId) -> TodoId {
        let existing = self
            .lists
            .iter()
            .find(|list| list.id == list_id)
            .map(|list| next_id(list.todos.iter().map(|todo| todo.id)))
            .unwrap_or(1);
        let watermark = self.next_todo_ids.entry(list_id).or_insert(1);
        let id = existing.max(*watermark);
        *watermark = id + 1;
        id
    }
}

impl TodoListStore for SessionStore {
    fn find_list(&self, id: ListId) -> StoreResult<Option<TodoList>> {
        Ok(self.lists.iter().find(|list| list.id == id).cloned())
    }

    fn all_lists(&self) -> StoreResult<Vec<TodoList>> {
        Ok(self.lists.clone())
    }

    fn create_list(&mut self, name: &str) -> StoreResult<ListId> {
        let id = self.allocate_list_id();
        self.lists.push(TodoList::new(id, name));
        Ok(id)
    }

    fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        // Removing the list drops its todos with it; the todo watermark can
        // go too because list ids are never reallocated.
        self.lists.retain(|list| list.id != id);
        self.next_todo_ids.remove(&id);
        Ok(())
    }

    fn rename_list(&mut self, id: ListId, new_name: &str) -> StoreResult<()> {
        if let Some(list) = self.list_mut(id) {
            list.name = new_name.to_string();
        }
        Ok(())
    }

    fn create_todo(&mut self, list_id: ListId, text: &str) -> StoreResult<Option<TodoId>> {
        if self.lists.iter().all(|list| list.id != list_id) {
            return Ok(None);
        }

        let id = self.allocate_todo_id(list_id);
        if let Some(list) = self.list_mut(list_id) {
            list.todos.push(Todo::new(id, text));
        }
        Ok(Some(id))
    }

    fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()> {
        if let Some(list) = self.list_mut(list_id) {
            list.todos.retain(|todo| todo.id != todo_id);
        }
        Ok(())
    }

    fn set_todo_completed(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()> {
        if let Some(list) = self.list_mut(list_id) {
            if let Some(todo) = list.todos.iter_mut().find(|todo| todo.id == todo_id) {
                todo.completed = completed;
            }
        }
        Ok(())
    }

    fn complete_all_todos(&mut self, list_id: ListId) -> StoreResult<()> {
        if let Some(list) = self.list_mut(list_id) {
            for todo in &mut list.todos {
                todo.completed = true;
            }
        }
        Ok(())
    }
}
