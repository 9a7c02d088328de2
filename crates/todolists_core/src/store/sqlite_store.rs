//! Durable SQLite-backed store.
//!
//! # Responsibility
//! - Map every `TodoListStore` operation onto parameterized SQL.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `delete_list` removes the list's todos and the list row in one
//!   transaction, so no orphan todos can be observed.
//! - `completed` is persisted as INTEGER 0/1 and must round-trip exactly;
//!   any other stored value is rejected as invalid data, never coerced.
//! - The connection is borrowed per request and released when the store and
//!   connection drop at request end.

use crate::db::migrations::latest_version;
use crate::model::list::{ListId, Todo, TodoId, TodoList};
use crate::store::{StoreError, StoreResult, TodoListStore};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const REQUIRED_TABLES: &[&str] = &["lists", "todos"];

/// SQLite backend over a borrowed, already-migrated connection.
///
/// Construct one per request with [`SqliteStore::try_new`]; the borrow ties
/// the store's lifetime to the request-scoped connection.
pub struct SqliteStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Constructs a store after verifying the connection is migrated and the
    /// expected tables exist.
    pub fn try_new(conn: &'conn mut Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn todos_for_list(&self, list_id: ListId) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, completed
             FROM todos
             WHERE list_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query(params![list_id])?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }
        Ok(todos)
    }

    fn list_exists(&self, id: ListId) -> StoreResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM lists WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl TodoListStore for SqliteStore<'_> {
    fn find_list(&self, id: ListId) -> StoreResult<Option<TodoList>> {
        let head = self
            .conn
            .query_row(
                "SELECT id, name FROM lists WHERE id = ?1;",
                params![id],
                |row| Ok((row.get::<_, ListId>("id")?, row.get::<_, String>("name")?)),
            )
            .optional()?;

        let Some((list_id, name)) = head else {
            return Ok(None);
        };

        Ok(Some(TodoList {
            id: list_id,
            name,
            todos: self.todos_for_list(list_id)?,
        }))
    }

    fn all_lists(&self) -> StoreResult<Vec<TodoList>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM lists ORDER BY id ASC;")?;
        let heads = stmt
            .query_map([], |row| {
                Ok((row.get::<_, ListId>("id")?, row.get::<_, String>("name")?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut lists = Vec::with_capacity(heads.len());
        for (id, name) in heads {
            lists.push(TodoList {
                id,
                name,
                todos: self.todos_for_list(id)?,
            });
        }
        Ok(lists)
    }

    fn create_list(&mut self, name: &str) -> StoreResult<ListId> {
        self.conn
            .execute("INSERT INTO lists (name) VALUES (?1);", params![name])?;
        let id = self.conn.last_insert_rowid();
        debug!("event=store_exec module=store op=create_list list_id={id}");
        Ok(id)
    }

    fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        // Application-issued cascade: both deletes in one transaction keeps
        // the no-orphan-todos contract independent of schema-level cascades.
        let tx = self.conn.transaction()?;
        let todos_removed = tx.execute("DELETE FROM todos WHERE list_id = ?1;", params![id])?;
        let lists_removed = tx.execute("DELETE FROM lists WHERE id = ?1;", params![id])?;
        tx.commit()?;
        debug!(
            "event=store_exec module=store op=delete_list list_id={id} \
             lists_removed={lists_removed} todos_removed={todos_removed}"
        );
        Ok(())
    }

    fn rename_list(&mut self, id: ListId, new_name: &str) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE lists SET name = ?1 WHERE id = ?2;",
            params![new_name, id],
        )?;
        Ok(())
    }

    fn create_todo(&mut self, list_id: ListId, text: &str) -> StoreResult<Option<TodoId>> {
        if !self.list_exists(list_id)? {
            return Ok(None);
        }

        self.conn.execute(
            "INSERT INTO todos (list_id, name, completed) VALUES (?1, ?2, 0);",
            params![list_id, text],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("event=store_exec module=store op=create_todo list_id={list_id} todo_id={id}");
        Ok(Some(id))
    }

    fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM todos WHERE list_id = ?1 AND id = ?2;",
            params![list_id, todo_id],
        )?;
        Ok(())
    }

    fn set_todo_completed(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE todos SET completed = ?1 WHERE list_id = ?2 AND id = ?3;",
            params![i64::from(completed), list_id, todo_id],
        )?;
        Ok(())
    }

    fn complete_all_todos(&mut self, list_id: ListId) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE todos SET completed = 1 WHERE list_id = ?1;",
            params![list_id],
        )?;
        debug!(
            "event=store_exec module=store op=complete_all_todos list_id={list_id} rows={changed}"
        );
        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<Todo> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    Ok(Todo {
        id: row.get("id")?,
        name: row.get("name")?,
        completed,
    })
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in REQUIRED_TABLES {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(StoreError::MissingRequiredTable(table));
        }
    }

    Ok(())
}
