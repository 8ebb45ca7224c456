//! Integration tests for the repository layer.
//!
//! Exercises the repositories against a real database:
//! - Create full hierarchy (user -> list -> item)
//! - Unique constraint violations
//! - Foreign key violations
//! - Ownership-scoped finders
//! - List deletion taking its items with it
//! - Session lifecycle (create, find, revoke, cleanup)

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use ticklist_db::models::list_item::CreateListItem;
use ticklist_db::models::session::CreateSession;
use ticklist_db::models::todo_list::CreateTodoList;
use ticklist_db::models::user::CreateUser;
use ticklist_db::repositories::{ListItemRepo, SessionRepo, TodoListRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        login: "someone".to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
    }
}

fn new_list(owner_id: i64, name: &str) -> CreateTodoList {
    CreateTodoList {
        name: name.to_string(),
        owner_id,
    }
}

fn new_item(parent_list_id: i64, creator_id: i64, content: &str) -> CreateListItem {
    CreateListItem {
        content: content.to_string(),
        parent_list_id,
        creator_id,
    }
}

fn new_session(user_id: i64, token_hash: &str, ttl_hours: i64) -> CreateSession {
    CreateSession {
        user_id,
        token_hash: token_hash.to_string(),
        expires_at: Utc::now() + Duration::hours(ttl_hours),
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_full_hierarchy(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("alice@example.com"))
        .await
        .unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.login, "someone");

    let list = TodoListRepo::create(&pool, &new_list(user.id, "Groceries"))
        .await
        .unwrap();
    assert_eq!(list.owner_id, user.id);
    assert_eq!(list.name, "Groceries");

    let item = ListItemRepo::create(&pool, &new_item(list.id, user.id, "Buy milk"))
        .await
        .unwrap();
    assert_eq!(item.parent_list_id, list.id);
    assert_eq!(item.creator_id, user.id);
    assert_eq!(item.content, "Buy milk");
}

// ---------------------------------------------------------------------------
// Test: Unique constraint violation on duplicate email
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: SqlitePool) {
    UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert!(
            matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation),
            "expected unique violation, got {db_err:?}"
        ),
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: FK violation when referencing non-existent entities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_fk_violation_list_bad_owner(pool: SqlitePool) {
    let result = TodoListRepo::create(&pool, &new_list(999_999, "Ghost")).await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent owner_id"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_fk_violation_item_bad_list(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("fk@example.com"))
        .await
        .unwrap();
    let result = ListItemRepo::create(&pool, &new_item(999_999, user.id, "Orphan")).await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent parent_list_id"
    );
}

// ---------------------------------------------------------------------------
// Test: Lists scoped to owner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_lists_scoped_to_owner(pool: SqlitePool) {
    let alice = UserRepo::create(&pool, &new_user("alice@example.com"))
        .await
        .unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob@example.com"))
        .await
        .unwrap();

    TodoListRepo::create(&pool, &new_list(alice.id, "Work"))
        .await
        .unwrap();
    TodoListRepo::create(&pool, &new_list(alice.id, "Home"))
        .await
        .unwrap();
    TodoListRepo::create(&pool, &new_list(bob.id, "Travel"))
        .await
        .unwrap();

    let alice_lists = TodoListRepo::find_by_owner(&pool, alice.id).await.unwrap();
    assert_eq!(alice_lists.len(), 2);

    let bob_lists = TodoListRepo::find_by_owner(&pool, bob.id).await.unwrap();
    assert_eq!(bob_lists.len(), 1);
    assert_eq!(bob_lists[0].name, "Travel");
}

// ---------------------------------------------------------------------------
// Test: Items scoped to list, insertion order preserved
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_items_scoped_to_list_in_order(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("order@example.com"))
        .await
        .unwrap();
    let list = TodoListRepo::create(&pool, &new_list(user.id, "Ordered"))
        .await
        .unwrap();
    let other = TodoListRepo::create(&pool, &new_list(user.id, "Other"))
        .await
        .unwrap();

    ListItemRepo::create(&pool, &new_item(list.id, user.id, "first"))
        .await
        .unwrap();
    ListItemRepo::create(&pool, &new_item(list.id, user.id, "second"))
        .await
        .unwrap();
    ListItemRepo::create(&pool, &new_item(other.id, user.id, "elsewhere"))
        .await
        .unwrap();
    ListItemRepo::create(&pool, &new_item(list.id, user.id, "third"))
        .await
        .unwrap();

    let items = ListItemRepo::find_by_list(&pool, list.id).await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].content, "first");
    assert_eq!(items[1].content, "second");
    assert_eq!(items[2].content, "third");
}

// ---------------------------------------------------------------------------
// Test: Deleting a list removes its items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_list_removes_items(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("del@example.com"))
        .await
        .unwrap();
    let list = TodoListRepo::create(&pool, &new_list(user.id, "Doomed"))
        .await
        .unwrap();
    let item = ListItemRepo::create(&pool, &new_item(list.id, user.id, "Going away"))
        .await
        .unwrap();

    let deleted = TodoListRepo::delete_with_items(&pool, list.id).await.unwrap();
    assert!(deleted);

    assert!(TodoListRepo::find_by_id(&pool, list.id)
        .await
        .unwrap()
        .is_none());
    assert!(ListItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .is_none());

    // Second delete of the same id reports nothing to do.
    let deleted = TodoListRepo::delete_with_items(&pool, list.id).await.unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Test: Item delete is constrained to its parent list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_item_requires_matching_list(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("pair@example.com"))
        .await
        .unwrap();
    let list_a = TodoListRepo::create(&pool, &new_list(user.id, "A"))
        .await
        .unwrap();
    let list_b = TodoListRepo::create(&pool, &new_list(user.id, "B"))
        .await
        .unwrap();
    let item = ListItemRepo::create(&pool, &new_item(list_a.id, user.id, "In A"))
        .await
        .unwrap();

    // Wrong list id: nothing deleted.
    let deleted = ListItemRepo::delete_in_list(&pool, item.id, list_b.id)
        .await
        .unwrap();
    assert!(!deleted);
    assert!(ListItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .is_some());

    // Matching list id: deleted.
    let deleted = ListItemRepo::delete_in_list(&pool, item.id, list_a.id)
        .await
        .unwrap();
    assert!(deleted);
    assert!(ListItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .is_none());

    // Already gone: reports false.
    let deleted = ListItemRepo::delete_in_list(&pool, item.id, list_a.id)
        .await
        .unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Test: Session lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_session_lifecycle(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("sess@example.com"))
        .await
        .unwrap();

    let session = SessionRepo::create(&pool, &new_session(user.id, "hash-1", 1))
        .await
        .unwrap();
    assert_eq!(session.user_id, user.id);
    assert!(!session.is_revoked);
    assert!(!session.is_expired());

    let found = SessionRepo::find_by_token_hash(&pool, "hash-1")
        .await
        .unwrap()
        .expect("session should be findable by hash");
    assert_eq!(found.id, session.id);

    let revoked = SessionRepo::revoke_by_token_hash(&pool, "hash-1")
        .await
        .unwrap();
    assert!(revoked);

    // Revoked sessions are invisible to the finder.
    assert!(SessionRepo::find_by_token_hash(&pool, "hash-1")
        .await
        .unwrap()
        .is_none());

    // Revoking again reports nothing to do.
    let revoked = SessionRepo::revoke_by_token_hash(&pool, "hash-1")
        .await
        .unwrap();
    assert!(!revoked);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_session_detected(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("expired@example.com"))
        .await
        .unwrap();

    SessionRepo::create(&pool, &new_session(user.id, "hash-old", -1))
        .await
        .unwrap();

    // The finder still returns the row; expiry is the caller's check.
    let found = SessionRepo::find_by_token_hash(&pool, "hash-old")
        .await
        .unwrap()
        .expect("expired session row should still exist");
    assert!(found.is_expired());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cleanup_expired_sessions(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("cleanup@example.com"))
        .await
        .unwrap();

    SessionRepo::create(&pool, &new_session(user.id, "hash-live", 24))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(user.id, "hash-expired", -24))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(user.id, "hash-revoked", 24))
        .await
        .unwrap();
    SessionRepo::revoke_by_token_hash(&pool, "hash-revoked")
        .await
        .unwrap();

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(removed, 2);

    // The live session survives the sweep.
    assert!(SessionRepo::find_by_token_hash(&pool, "hash-live")
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Test: Email lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_email(pool: SqlitePool) {
    let created = UserRepo::create(&pool, &new_user("lookup@example.com"))
        .await
        .unwrap();

    let found = UserRepo::find_by_email(&pool, "lookup@example.com")
        .await
        .unwrap()
        .expect("user should be findable by email");
    assert_eq!(found.id, created.id);

    assert!(UserRepo::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
}
