//! Account infrastructure module
//!
//! Implementations behind the account domain: the in-memory repository
//! that holds the registry for the process lifetime, and the account
//! service exposing registration, authentication and lookup.

mod repository;
mod service;

pub use repository::InMemoryAccountRepository;
pub use service::{AccountService, RegisterAccountRequest};
