//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository.
///
/// Lookups and uniqueness checks are linear scans over the stored
/// accounts. `create` holds the write lock across the duplicate scan and
/// the insert, so a colliding concurrent registration observes either the
/// empty slot or the committed account, never an in-between state.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.username() == username)
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.username() == account.username())
        {
            return Err(DomainError::conflict(format!(
                "Username '{}' is already taken",
                account.username()
            )));
        }

        if accounts.values().any(|a| a.email() == account.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already taken",
                account.email()
            )));
        }

        accounts.insert(account.id(), account.clone());

        Ok(account)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.len())
    }
}
