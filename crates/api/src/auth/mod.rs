//! Password hashing and session token handling.

pub mod password;
pub mod session;
