//! List and todo domain records.
//!
//! # Responsibility
//! - Define the canonical shapes stored by both backends.
//! - Provide completion-state helpers used by display and handlers.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the store and never reused.
//! - A list is complete iff it has at least one todo and none remain open.

use serde::{Deserialize, Serialize};

/// Stable integer identifier for a list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ListId = i64;

/// Stable integer identifier for a todo within its parent list.
pub type TodoId = i64;

/// A single actionable item within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the parent list, immutable after creation.
    pub id: TodoId,
    /// Display text, 1-100 characters (enforced by the validator).
    pub name: String,
    /// Completion flag, starts as `false`.
    pub completed: bool,
}

impl Todo {
    /// Creates an open todo with the given id and text.
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// A named, ordered collection of todos.
///
/// The `todos` vector keeps insertion order; presentation ordering lives in
/// the `display` module and never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique within the store, immutable after creation.
    pub id: ListId,
    /// Display name, 1-100 characters and store-wide unique (case-sensitive).
    pub name: String,
    /// Child todos in insertion order.
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list with the given id and name.
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Looks up a child todo by id.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Number of todos not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// A list is complete iff it has at least one todo and zero open ones.
    ///
    /// An empty list is never complete.
    pub fn is_complete(&self) -> bool {
        !self.todos.is_empty() && self.remaining_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoList};

    #[test]
    fn empty_list_is_not_complete() {
        let list = TodoList::new(1, "Groceries");
        assert!(!list.is_complete());
        assert_eq!(list.remaining_count(), 0);
    }

    #[test]
    fn list_with_open_todo_is_not_complete() {
        let mut list = TodoList::new(1, "Groceries");
        list.todos.push(Todo::new(1, "milk"));
        assert!(!list.is_complete());
        assert_eq!(list.remaining_count(), 1);
    }

    #[test]
    fn list_is_complete_when_all_todos_are_done() {
        let mut list = TodoList::new(1, "Groceries");
        let mut todo = Todo::new(1, "milk");
        todo.completed = true;
        list.todos.push(todo);
        assert!(list.is_complete());
    }

    #[test]
    fn todo_lookup_by_id() {
        let mut list = TodoList::new(1, "Groceries");
        list.todos.push(Todo::new(1, "milk"));
        list.todos.push(Todo::new(2, "eggs"));

        assert_eq!(list.todo(2).map(|todo| todo.name.as_str()), Some("eggs"));
        assert!(list.todo(99).is_none());
    }

    #[test]
    fn serde_roundtrip_keeps_completed_flag() {
        let mut list = TodoList::new(3, "Errands");
        let mut todo = Todo::new(1, "post office");
        todo.completed = true;
        list.todos.push(todo);

        let json = serde_json::to_string(&list).unwrap();
        let back: TodoList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
