//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Account identifier - a v4 UUID assigned by the registry at creation
/// time. Callers never supply ids; they can only parse the string form of
/// an id they were handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(Uuid);

impl AccountId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its string form
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account.
///
/// Accounts are immutable once created: there is no update or delete path,
/// and the record lives until the process exits.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique identifier, assigned exactly once at creation
    id: AccountId,
    /// Login name, unique across all accounts (exact, case-sensitive)
    username: String,
    /// Contact address, unique across all accounts (exact, case-sensitive)
    email: String,
    /// Stored verbatim - this service does no hashing, so it must never
    /// guard real credentials. Never serialized.
    #[serde(skip_serializing)]
    password: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh id and the current time
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: AccountId::generate(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
