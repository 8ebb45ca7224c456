//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers authorize first, delegate to the repositories in `ticklist_db`,
//! and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod todo_list;
