//! Form field validation.
//!
//! Mirrors the account and list forms: every field is required (whitespace
//! does not count as content) and the email must look like an email. The
//! returned `Err` is the human-readable message the re-rendered form shows.

use validator::ValidateEmail;

/// Validate that a required text field is non-empty after trimming.
pub fn require_field(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

/// Validate an email address: required, and syntactically an email.
pub fn require_email(value: &str) -> Result<(), String> {
    require_field("E-mail", value)?;
    if !value.validate_email() {
        return Err(format!("{value} is not a valid e-mail address"));
    }
    Ok(())
}
