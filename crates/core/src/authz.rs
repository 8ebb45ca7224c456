//! Ownership-based authorization decisions.
//!
//! Pure functions, no side effects: callers look the target records up and
//! pass what they found. A failed lookup is passed as `None` and always
//! denies -- a missing list or item must never authorize by accident, and
//! must produce the same answer as a foreign one.

use crate::types::DbId;

/// May `user_id` read (and therefore act on) the list?
///
/// Lists are private to their owner; only `list.owner_id == user_id`
/// grants access.
///
/// # Examples
///
/// ```
/// use ticklist_core::authz::can_access_list;
///
/// assert!(can_access_list(7, Some(7)));
/// assert!(!can_access_list(7, Some(9)));
/// assert!(!can_access_list(7, None)); // lookup miss denies
/// ```
pub fn can_access_list(user_id: DbId, list_owner_id: Option<DbId>) -> bool {
    list_owner_id == Some(user_id)
}

/// May `user_id` delete the item?
///
/// Two independent grounds, either suffices:
/// - ownership of the parent list (`list_owner_id`), or
/// - authorship of the item itself (`item_creator_id`).
///
/// The second ground is intentional: a collaborator who added an item to
/// someone else's list may remove their own item without owning the list.
/// This asymmetry with [`can_access_list`] is load-bearing.
///
/// # Examples
///
/// ```
/// use ticklist_core::authz::can_modify_item;
///
/// // List owner deletes anything in the list.
/// assert!(can_modify_item(7, Some(7), Some(9)));
/// // Author deletes their own item in a foreign list.
/// assert!(can_modify_item(9, Some(7), Some(9)));
/// // A stranger deletes nothing.
/// assert!(!can_modify_item(3, Some(7), Some(9)));
/// ```
pub fn can_modify_item(
    user_id: DbId,
    list_owner_id: Option<DbId>,
    item_creator_id: Option<DbId>,
) -> bool {
    list_owner_id == Some(user_id) || item_creator_id == Some(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_accesses_own_list() {
        assert!(can_access_list(1, Some(1)));
    }

    #[test]
    fn non_owner_denied_list_access() {
        assert!(!can_access_list(2, Some(1)));
    }

    #[test]
    fn missing_list_denied() {
        assert!(!can_access_list(1, None));
    }

    #[test]
    fn list_owner_modifies_any_item() {
        assert!(can_modify_item(1, Some(1), Some(2)));
    }

    #[test]
    fn item_author_modifies_own_item_in_foreign_list() {
        assert!(can_modify_item(2, Some(1), Some(2)));
    }

    #[test]
    fn stranger_denied_item_modification() {
        assert!(!can_modify_item(3, Some(1), Some(2)));
    }

    #[test]
    fn missing_item_still_allows_list_owner() {
        // The list resolved and authorizes; the item lookup missed.
        assert!(can_modify_item(1, Some(1), None));
    }

    #[test]
    fn missing_list_still_allows_item_author() {
        assert!(can_modify_item(2, None, Some(2)));
    }

    #[test]
    fn both_lookups_missing_denies() {
        assert!(!can_modify_item(1, None, None));
    }
}
