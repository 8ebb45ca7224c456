//! List item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ticklist_core::types::{DbId, Timestamp};

/// A list item row from the `list_items` table.
///
/// `creator_id` records who wrote the item, which may differ from the owner
/// of the parent list. Deletion rights hinge on that distinction.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListItem {
    pub id: DbId,
    pub content: String,
    pub parent_list_id: DbId,
    pub creator_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new list item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListItem {
    pub content: String,
    pub parent_list_id: DbId,
    pub creator_id: DbId,
}
