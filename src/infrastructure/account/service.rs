//! Account service for registration, authentication and lookup

use std::sync::Arc;

use crate::domain::account::{require_field, Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account service - the business-rule surface over the repository
#[derive(Debug)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new account service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new account.
    ///
    /// All three fields must be non-empty; beyond that, uniqueness of
    /// username and email is enforced by the repository as part of the
    /// insert, so nothing is stored on any failure path.
    pub async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError> {
        require_field("username", &request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        require_field("email", &request.email)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        require_field("password", &request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let account = Account::new(request.username, request.email, request.password);

        self.repository.create(account).await
    }

    /// Authenticate with username and password.
    ///
    /// The same error comes back whether the username is unknown or the
    /// password is wrong; callers cannot tell the two apart.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        self.repository
            .find_by_username(username)
            .await?
            .filter(|account| account.password() == password)
            .ok_or_else(|| DomainError::authentication("Invalid credentials"))
    }

    /// Get an account by its id string.
    ///
    /// An id that does not parse is indistinguishable from one that was
    /// never issued: both are a lookup miss.
    pub async fn get(&self, id: &str) -> Result<Account, DomainError> {
        let account_id =
            AccountId::parse(id).map_err(|_| DomainError::not_found("User not found"))?;

        self.repository
            .get(&account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }
}
