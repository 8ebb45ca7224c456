//! Repository for the `list_items` table.

use chrono::Utc;
use ticklist_core::types::DbId;

use crate::models::list_item::{CreateListItem, ListItem};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, parent_list_id, creator_id, created_at";

/// Provides CRUD operations for list items.
pub struct ListItemRepo;

impl ListItemRepo {
    /// Insert a new list item, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateListItem) -> Result<ListItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO list_items (content, parent_list_id, creator_id, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ListItem>(&query)
            .bind(&input.content)
            .bind(input.parent_list_id)
            .bind(input.creator_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a list item by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<ListItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM list_items WHERE id = ?");
        sqlx::query_as::<_, ListItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items belonging to a to-do list, oldest first.
    pub async fn find_by_list(pool: &DbPool, list_id: DbId) -> Result<Vec<ListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM list_items WHERE parent_list_id = ? ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ListItem>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an item, but only if it belongs to the given list.
    ///
    /// Returns `true` if a row was deleted. The extra `parent_list_id`
    /// predicate keeps an item id from one list from deleting anything
    /// through another list's URL.
    pub async fn delete_in_list(
        pool: &DbPool,
        item_id: DbId,
        list_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM list_items WHERE id = ? AND parent_list_id = ?")
            .bind(item_id)
            .bind(list_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
