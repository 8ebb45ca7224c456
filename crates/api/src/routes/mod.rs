pub mod auth;
pub mod health;
pub mod pages;
pub mod todo_list;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /                                    landing payload (public)
///
/// /register                            GET form descriptor / POST create account (public)
/// /login                               GET form descriptor / POST authenticate (public)
/// /logout                              GET revoke session, clear cookie
///
/// /todo-list                           GET owned lists / POST create list
/// /todo-list-display/{list_id}         GET list + items / POST add item or list
/// /delete?content_id=..&list_id=..     GET/POST delete one item
/// /delete_list?list_id=..              GET/POST delete list + items
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public cover page.
        .merge(pages::router())
        // Account lifecycle (register, login, logout).
        .merge(auth::router())
        // Lists and items (session required).
        .merge(todo_list::router())
}
