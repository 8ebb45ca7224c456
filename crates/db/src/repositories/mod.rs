//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Queries name their rows
//! explicitly; nothing is fetched through entity relationships.

pub mod list_item_repo;
pub mod session_repo;
pub mod todo_list_repo;
pub mod user_repo;

pub use list_item_repo::ListItemRepo;
pub use session_repo::SessionRepo;
pub use todo_list_repo::TodoListRepo;
pub use user_repo::UserRepo;
