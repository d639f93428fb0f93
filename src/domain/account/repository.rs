//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId};
use crate::domain::DomainError;

/// Repository trait for account storage.
///
/// The repository is the sole owner of the stored accounts and the
/// arbiter of uniqueness: `create` must perform its duplicate check and
/// the insert as one atomic step, so that two concurrent registrations
/// with a colliding username or email cannot both succeed.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its id
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Get an account by its username (for login)
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Store a new account, failing with a conflict if any existing
    /// account has the same username or the same email
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Number of stored accounts
    async fn count(&self) -> Result<usize, DomainError>;
}
