//! Account input validation
//!
//! Registration requires only that its fields are present; there is no
//! format validation of usernames, emails or passwords.

use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Require a field to be non-empty. A field that was absent from the
/// request collapses to the empty string before it reaches this check,
/// so missing and empty are rejected identically.
pub fn require_field(name: &'static str, value: &str) -> Result<(), AccountValidationError> {
    if value.is_empty() {
        return Err(AccountValidationError::MissingField(name));
    }

    Ok(())
}
