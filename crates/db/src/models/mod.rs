//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod list_item;
pub mod session;
pub mod todo_list;
pub mod user;
