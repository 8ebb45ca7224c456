//! Server-side session model and DTOs.

use chrono::Utc;
use sqlx::FromRow;
use ticklist_core::types::{DbId, Timestamp};

/// A session row from the `sessions` table.
///
/// Only the SHA-256 hash of the session token is stored; the plaintext token
/// lives in the client's cookie and never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

impl Session {
    /// Whether the session has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
