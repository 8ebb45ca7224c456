//! Route definitions for to-do lists and items.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo_list;
use crate::state::AppState;

/// Routes mounted at the root. All require a live session.
///
/// ```text
/// GET      /todo-list                     -> list_lists
/// POST     /todo-list                     -> create_list
/// GET      /todo-list-display/{list_id}   -> view_list
/// POST     /todo-list-display/{list_id}   -> display_post
/// GET/POST /delete                        -> delete_item
/// GET/POST /delete_list                   -> delete_list
/// ```
///
/// `/delete` and `/delete_list` accept GET as well as POST: the rendered
/// pages link them as plain anchors.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/todo-list",
            get(todo_list::list_lists).post(todo_list::create_list),
        )
        .route(
            "/todo-list-display/{list_id}",
            get(todo_list::view_list).post(todo_list::display_post),
        )
        .route(
            "/delete",
            get(todo_list::delete_item).post(todo_list::delete_item),
        )
        .route(
            "/delete_list",
            get(todo_list::delete_list).post(todo_list::delete_list),
        )
}
