//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ticklist_core::error::CoreError;
use ticklist_core::types::DbId;
use ticklist_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, session_token_from_headers};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Resolution walks cookie token -> session row -> user row. A missing
/// cookie, unknown or revoked session, expired session, or vanished user all
/// reject with 401; there is no partially-authenticated state.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's display name.
    pub login: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let session = SessionRepo::find_by_token_hash(&state.pool, &hash_session_token(&token))
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid session".into())))?;

        if session.is_expired() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session expired".into(),
            )));
        }

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

        Ok(AuthUser {
            user_id: user.id,
            login: user.login,
        })
    }
}
