//! Repository for the `todo_lists` table.

use chrono::Utc;
use ticklist_core::types::DbId;

use crate::models::todo_list::{CreateTodoList, TodoList};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, owner_id, created_at";

/// Provides CRUD operations for to-do lists.
pub struct TodoListRepo;

impl TodoListRepo {
    /// Insert a new to-do list, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateTodoList) -> Result<TodoList, sqlx::Error> {
        let query = format!(
            "INSERT INTO todo_lists (name, owner_id, created_at)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoList>(&query)
            .bind(&input.name)
            .bind(input.owner_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a to-do list by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<TodoList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_lists WHERE id = ?");
        sqlx::query_as::<_, TodoList>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all to-do lists owned by a user, oldest first.
    pub async fn find_by_owner(pool: &DbPool, owner_id: DbId) -> Result<Vec<TodoList>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todo_lists WHERE owner_id = ? ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TodoList>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a to-do list together with all of its items, in one transaction.
    ///
    /// Returns `true` if the list row existed. Items are deleted explicitly;
    /// the `ON DELETE CASCADE` on `list_items` is a schema-level backstop.
    pub async fn delete_with_items(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM list_items WHERE parent_list_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM todo_lists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
