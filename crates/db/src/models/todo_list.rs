//! To-do list entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ticklist_core::types::{DbId, Timestamp};

/// A to-do list row from the `todo_lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TodoList {
    pub id: DbId,
    pub name: String,
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new to-do list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoList {
    pub name: String,
    pub owner_id: DbId,
}
