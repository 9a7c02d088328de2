use todolists_core::db::open_db_in_memory;
use todolists_core::{
    ListService, SessionStore, SqliteStore, StoreError, TodoListStore, ValidationError,
};

#[test]
fn duplicate_list_name_is_rejected_and_store_unchanged() {
    let mut service = ListService::new(SessionStore::new());
    service.create_list("Groceries").unwrap();

    let err = service.create_list("Groceries").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::DuplicateName { .. })
    ));

    let lists = service.all_lists().unwrap();
    assert_eq!(lists.len(), 1);
}

#[test]
fn invalid_todo_text_is_rejected_before_any_mutation() {
    let mut service = ListService::new(SessionStore::new());
    let list_id = service.create_list("Groceries").unwrap();

    let err = service.create_todo(list_id, "").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::TooShortOrLong { .. })
    ));

    let list = service.find_list(list_id).unwrap().unwrap();
    assert!(list.todos.is_empty());
}

#[test]
fn rename_to_current_name_is_accepted() {
    let mut service = ListService::new(SessionStore::new());
    let id = service.create_list("Groceries").unwrap();

    service.rename_list(id, "Groceries").unwrap();
    assert_eq!(service.find_list(id).unwrap().unwrap().name, "Groceries");
}

#[test]
fn rename_to_another_lists_name_is_rejected() {
    let mut service = ListService::new(SessionStore::new());
    let _groceries = service.create_list("Groceries").unwrap();
    let chores = service.create_list("Chores").unwrap();

    let err = service.rename_list(chores, "Groceries").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::DuplicateName { .. })
    ));
    assert_eq!(service.find_list(chores).unwrap().unwrap().name, "Chores");
}

#[test]
fn lists_and_todos_are_display_ordered_incomplete_first() {
    let mut service = ListService::new(SessionStore::new());

    let done = service.create_list("done").unwrap();
    let open = service.create_list("open").unwrap();
    let milk = service.create_todo(done, "milk").unwrap().unwrap();
    service.set_todo_completed(done, milk, true).unwrap();
    service.create_todo(open, "eggs").unwrap();

    let lists = service.lists_for_display().unwrap();
    let names: Vec<&str> = lists.iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, ["open", "done"]);

    // Canonical order is untouched by display sorting.
    let canonical = service.all_lists().unwrap();
    let names: Vec<&str> = canonical.iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, ["done", "open"]);
}

#[test]
fn todos_for_display_puts_open_items_first() {
    let mut service = ListService::new(SessionStore::new());
    let id = service.create_list("Groceries").unwrap();

    let a = service.create_todo(id, "a").unwrap().unwrap();
    service.create_todo(id, "b").unwrap();
    service.create_todo(id, "c").unwrap();
    service.set_todo_completed(id, a, true).unwrap();

    let ordered = service.todos_for_display(id).unwrap();
    let names: Vec<&str> = ordered.iter().map(|todo| todo.name.as_str()).collect();
    assert_eq!(names, ["b", "c", "a"]);

    // Absent lists read as empty rather than failing the display path.
    assert!(service.todos_for_display(999).unwrap().is_empty());
}

#[test]
fn groceries_scenario_on_session_backend() {
    let mut service = ListService::new(SessionStore::new());
    groceries_scenario(&mut service);
}

#[test]
fn groceries_scenario_on_sqlite_backend() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&mut conn).unwrap();
    let mut service = ListService::new(store);
    groceries_scenario(&mut service);
}

// End-to-end: create list, add two todos, complete them one by one, and
// watch list completeness flip only after the last one.
fn groceries_scenario<S: TodoListStore>(service: &mut ListService<S>) {
    let list_id = service.create_list("Groceries").unwrap();
    let milk = service.create_todo(list_id, "milk").unwrap().unwrap();
    let eggs = service.create_todo(list_id, "eggs").unwrap().unwrap();

    service.set_todo_completed(list_id, milk, true).unwrap();
    let list = service.find_list(list_id).unwrap().unwrap();
    assert!(!list.is_complete());
    assert_eq!(list.remaining_count(), 1);

    service.set_todo_completed(list_id, eggs, true).unwrap();
    let list = service.find_list(list_id).unwrap().unwrap();
    assert!(list.is_complete());
    assert_eq!(list.remaining_count(), 0);
}

#[test]
fn complete_all_then_delete_list_leaves_store_consistent() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&mut conn).unwrap();
    let mut service = ListService::new(store);

    let list_id = service.create_list("Errands").unwrap();
    service.create_todo(list_id, "bank").unwrap();
    service.create_todo(list_id, "post office").unwrap();

    service.complete_all_todos(list_id).unwrap();
    let list = service.find_list(list_id).unwrap().unwrap();
    assert!(list.is_complete());

    service.delete_list(list_id).unwrap();
    assert!(service.find_list(list_id).unwrap().is_none());
    assert!(service.all_lists().unwrap().is_empty());
}
