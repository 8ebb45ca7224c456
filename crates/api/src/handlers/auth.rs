//! Handlers for account registration, login, and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use ticklist_core::error::CoreError;
use ticklist_core::types::DbId;
use ticklist_core::validation::{require_email, require_field};
use ticklist_db::models::session::CreateSession;
use ticklist_db::models::user::{CreateUser, UserResponse};
use ticklist_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{
    clear_session_cookie, generate_session_token, hash_session_token, session_cookie,
    session_token_from_headers,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// One input field of a form descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
}

/// Plain description of a form, consumed by the view-rendering client.
#[derive(Debug, Clone, Serialize)]
pub struct FormDescriptor {
    pub fields: &'static [FormField],
    pub submit: &'static str,
}

const REGISTER_FORM: FormDescriptor = FormDescriptor {
    fields: &[
        FormField {
            name: "login",
            label: "Login:",
        },
        FormField {
            name: "email",
            label: "E-mail:",
        },
        FormField {
            name: "password",
            label: "Password:",
        },
    ],
    submit: "Register",
};

const LOGIN_FORM: FormDescriptor = FormDescriptor {
    fields: &[
        FormField {
            name: "email",
            label: "E-mail:",
        },
        FormField {
            name: "password",
            label: "Password:",
        },
    ],
    submit: "Login",
};

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /register
///
/// Describe the registration form.
pub async fn register_form() -> Json<FormDescriptor> {
    Json(REGISTER_FORM)
}

/// POST /register
///
/// Create an account. Validates required fields and email format, rejects
/// duplicate emails with 409, then stores the user with an Argon2id password
/// hash and establishes a session for the new account.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Response> {
    require_field("Login", &input.login).map_err(CoreError::Validation)?;
    require_email(&input.email).map_err(CoreError::Validation)?;
    require_field("Password", &input.password).map_err(CoreError::Validation)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::DuplicateEmail(input.email)));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            login: input.login,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    let cookie = establish_session(&state, user.id).await?;

    let mut response =
        (StatusCode::CREATED, Json(UserResponse::from(user))).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);
    Ok(response)
}

/// GET /login
///
/// Describe the login form.
pub async fn login_form() -> Json<FormDescriptor> {
    Json(LOGIN_FORM)
}

/// POST /login
///
/// Authenticate with email + password and establish a session. Unknown email
/// and wrong password are indistinguishable in the response.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or(AppError::Core(CoreError::BadCredentials))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::BadCredentials));
    }

    let cookie = establish_session(&state, user.id).await?;

    let mut response = (StatusCode::OK, Json(UserResponse::from(user))).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);
    Ok(response)
}

/// GET /logout
///
/// Revoke the current session (if any) and clear the cookie. Safe to call
/// repeatedly; a request without a live session still gets 204.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = session_token_from_headers(&headers) {
        SessionRepo::revoke_by_token_hash(&state.pool, &hash_session_token(&token)).await?;
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    response
        .headers_mut()
        .insert(SET_COOKIE, clear_session_cookie(&state.config.session));
    Ok(response)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a session row for `user_id` and return the `Set-Cookie` value
/// carrying the plaintext token.
async fn establish_session(state: &AppState, user_id: DbId) -> AppResult<axum::http::HeaderValue> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session.ttl_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(session_cookie(&token, &state.config.session))
}
