//! Domain error taxonomy.
//!
//! Every failure a request can recover from (or must be refused with) is one
//! of these variants; the HTTP layer maps them onto statuses. Lookup misses
//! on lists and items are reported as `Forbidden`, never as a distinct
//! not-found, so an unauthorized caller cannot probe which ids exist.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field was empty or malformed. Recovered by re-rendering
    /// the form with the message.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Registration attempted with an email that already has an account.
    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    /// Login failed. Deliberately carries no detail: unknown email and
    /// wrong password must be indistinguishable on the wire.
    #[error("Invalid email or password")]
    BadCredentials,

    /// No authenticated session for a route that requires one.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to touch the target
    /// (or the target does not exist -- same answer either way).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
