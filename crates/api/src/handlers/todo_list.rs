//! Handlers for to-do lists and their items.
//!
//! Every operation here authorizes before it touches data. A lookup miss is
//! reported exactly like a denied access, so callers cannot probe which ids
//! exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use ticklist_core::authz::{can_access_list, can_modify_item};
use ticklist_core::error::CoreError;
use ticklist_core::types::DbId;
use ticklist_core::validation::require_field;
use ticklist_db::models::list_item::{CreateListItem, ListItem};
use ticklist_db::models::todo_list::{CreateTodoList, TodoList};
use ticklist_db::repositories::{ListItemRepo, TodoListRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /todo-list`.
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

/// Request body for `POST /todo-list-display/{list_id}`.
///
/// The display page carries two forms: one adds an item to the shown list
/// (`content`), the other starts a fresh list (`name`). When both fields
/// arrive, the item form wins.
#[derive(Debug, Deserialize)]
pub struct DisplayPostRequest {
    pub content: Option<String>,
    pub name: Option<String>,
}

/// Response body for `GET /todo-list-display/{list_id}`.
#[derive(Debug, Serialize)]
pub struct ListWithItems {
    pub list: TodoList,
    pub items: Vec<ListItem>,
}

/// Query parameters for `/delete`.
#[derive(Debug, Deserialize)]
pub struct DeleteItemParams {
    pub content_id: DbId,
    pub list_id: DbId,
}

/// Query parameters for `/delete_list`.
#[derive(Debug, Deserialize)]
pub struct DeleteListParams {
    pub list_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /todo-list
///
/// Return all lists owned by the caller, in insertion order.
pub async fn list_lists(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<TodoList>>> {
    let lists = TodoListRepo::find_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(lists))
}

/// POST /todo-list
///
/// Create a list owned by the caller. Rejects empty or whitespace names.
pub async fn create_list(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateListRequest>,
) -> AppResult<(StatusCode, Json<TodoList>)> {
    let created = create_list_for(&state, &user, input.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /todo-list-display/{list_id}
///
/// Return the list and its items. Owner only.
pub async fn view_list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(list_id): Path<DbId>,
) -> AppResult<Json<ListWithItems>> {
    let list = authorize_list_access(&state, &user, list_id).await?;
    let items = ListItemRepo::find_by_list(&state.pool, list.id).await?;
    Ok(Json(ListWithItems { list, items }))
}

/// POST /todo-list-display/{list_id}
///
/// Dispatch the display page's two forms: `content` adds an item to the shown
/// list, `name` alone creates another list. A body with neither is a 400.
pub async fn display_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(list_id): Path<DbId>,
    Json(input): Json<DisplayPostRequest>,
) -> AppResult<Response> {
    match (input.content, input.name) {
        (Some(content), _) => {
            let item = add_item(&state, &user, list_id, content).await?;
            Ok((StatusCode::CREATED, Json(item)).into_response())
        }
        (None, Some(name)) => {
            let created = create_list_for(&state, &user, name).await?;
            Ok((StatusCode::CREATED, Json(created)).into_response())
        }
        (None, None) => Err(AppError::BadRequest(
            "Provide 'content' to add an item or 'name' to create a list".into(),
        )),
    }
}

/// GET/POST /delete?content_id=..&list_id=..
///
/// Delete one item. Authorized for the owner of the list or the author of
/// the item; the delete itself only touches the named item/list pair.
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<DeleteItemParams>,
) -> AppResult<StatusCode> {
    let item = ListItemRepo::find_by_id(&state.pool, params.content_id).await?;
    let list = TodoListRepo::find_by_id(&state.pool, params.list_id).await?;

    let authorized = can_modify_item(
        user.user_id,
        list.as_ref().map(|l| l.owner_id),
        item.as_ref().map(|i| i.creator_id),
    );
    if !authorized {
        return Err(forbidden());
    }

    // No row matches when the item sits in a different list than the URL
    // names; the delete is then a no-op and still reports success.
    ListItemRepo::delete_in_list(&state.pool, params.content_id, params.list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET/POST /delete_list?list_id=..
///
/// Delete a list and every item in it. Owner only; items and list disappear
/// together or not at all.
pub async fn delete_list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<DeleteListParams>,
) -> AppResult<StatusCode> {
    let list = authorize_list_access(&state, &user, params.list_id).await?;
    TodoListRepo::delete_with_items(&state.pool, list.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The one `Forbidden` every denial in this module produces. Unresolved ids
/// and denied access must stay indistinguishable.
fn forbidden() -> AppError {
    AppError::Core(CoreError::Forbidden(
        "You do not have access to this resource".into(),
    ))
}

/// Resolve a list and require that `user` owns it.
async fn authorize_list_access(
    state: &AppState,
    user: &AuthUser,
    list_id: DbId,
) -> AppResult<TodoList> {
    match TodoListRepo::find_by_id(&state.pool, list_id).await? {
        Some(list) if can_access_list(user.user_id, Some(list.owner_id)) => Ok(list),
        _ => Err(forbidden()),
    }
}

/// Validate and persist a new list owned by `user`.
async fn create_list_for(state: &AppState, user: &AuthUser, name: String) -> AppResult<TodoList> {
    require_field("name", &name).map_err(CoreError::Validation)?;

    let created = TodoListRepo::create(
        &state.pool,
        &CreateTodoList {
            name,
            owner_id: user.user_id,
        },
    )
    .await?;
    Ok(created)
}

/// Validate content, authorize against the target list, and persist an item
/// authored by `user`.
async fn add_item(
    state: &AppState,
    user: &AuthUser,
    list_id: DbId,
    content: String,
) -> AppResult<ListItem> {
    require_field("content", &content).map_err(CoreError::Validation)?;

    let list = authorize_list_access(state, user, list_id).await?;

    let created = ListItemRepo::create(
        &state.pool,
        &CreateListItem {
            content,
            parent_list_id: list.id,
            creator_id: user.user_id,
        },
    )
    .await?;
    Ok(created)
}
