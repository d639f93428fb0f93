//! Shared API types: the error shape and the JSON extractor

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
