//! User Account Service
//!
//! A minimal account service over a process-local registry:
//! - Register an account (unique username and email)
//! - Authenticate by username and password
//! - Fetch a sanitized profile by id
//!
//! There is no persistence layer; accounts live for the lifetime of the
//! process. Passwords are stored verbatim, which makes this service
//! unsuitable for guarding real credentials.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::account::{AccountService, InMemoryAccountRepository};

/// Create the application state with the account service wired up
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryAccountRepository::new());
    let account_service = Arc::new(AccountService::new(repository));

    AppState::new(account_service)
}
