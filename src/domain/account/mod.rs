//! Account domain
//!
//! Domain types and traits for the account registry: the account entity,
//! presence validation, and the repository trait that owns uniqueness.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountId};
pub use repository::AccountRepository;
pub use validation::{require_field, AccountValidationError};
