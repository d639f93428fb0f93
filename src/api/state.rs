//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{Account, AccountRepository};
use crate::domain::DomainError;
use crate::infrastructure::account::{AccountService, RegisterAccountRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

impl AppState {
    pub fn new(account_service: Arc<dyn AccountServiceTrait>) -> Self {
        Self { account_service }
    }
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError>;
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<Account, DomainError>;
    async fn get(&self, id: &str) -> Result<Account, DomainError>;
}

#[async_trait::async_trait]
impl<R: AccountRepository> AccountServiceTrait for AccountService<R> {
    async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError> {
        AccountService::register(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        AccountService::authenticate(self, username, password).await
    }

    async fn get(&self, id: &str) -> Result<Account, DomainError> {
        AccountService::get(self, id).await
    }
}
