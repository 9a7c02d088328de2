//! Presentation ordering for lists and todos.
//!
//! # Responsibility
//! - Order collections for display: incomplete entries first, complete last.
//!
//! # Invariants
//! - Ordering is a read-time projection; nothing here mutates or persists.
//! - The partition is stable: relative order within each group matches the
//!   input.

use crate::model::list::{Todo, TodoList};

/// Stably partitions `items` into incomplete (first) and complete (last).
pub fn sort_for_display<T, F>(items: &[T], is_complete: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let (complete, incomplete): (Vec<T>, Vec<T>) =
        items.iter().cloned().partition(|item| is_complete(item));

    let mut ordered = incomplete;
    ordered.extend(complete);
    ordered
}

/// Orders lists for display by list completeness.
pub fn sorted_lists(lists: &[TodoList]) -> Vec<TodoList> {
    sort_for_display(lists, TodoList::is_complete)
}

/// Orders todos for display by their completed flag.
pub fn sorted_todos(todos: &[Todo]) -> Vec<Todo> {
    sort_for_display(todos, |todo| todo.completed)
}
