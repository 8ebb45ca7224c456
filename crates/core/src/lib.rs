//! Domain logic for the ticklist service.
//!
//! Pure types and decision functions only: no I/O, no framework types.
//! The `ticklist-db` and `ticklist-api` crates build on top of this.

pub mod authz;
pub mod error;
pub mod types;
pub mod validation;
