// In-memory policy store backed by Vec records behind a tokio RwLock.
//
// Thread-safe via `tokio::sync::RwLock`. Lookups are case-insensitive on
// the email column, matching how a real store would collate addresses.
// Data is lost when the store is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gatelink_core::db::models::{EmailAddress, SocialLogin};
use gatelink_core::{PolicyStore, Result};

/// A social-account binding recorded by [`MemoryStore::bind_social_account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub provider_id: String,
    pub user_id: String,
}

/// In-memory policy store.
///
/// Email records live in a `Vec` wrapped in an `Arc<RwLock<...>>` for
/// thread-safe concurrent access. Bindings are appended to a separate log
/// so tests can assert on exactly what was bound.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    emails: Arc<RwLock<Vec<EmailAddress>>>,
    bindings: Arc<RwLock<Vec<Binding>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            emails: Arc::new(RwLock::new(Vec::new())),
            bindings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with email records.
    pub fn with_records(records: Vec<EmailAddress>) -> Self {
        Self {
            emails: Arc::new(RwLock::new(records)),
            bindings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Insert a single email record.
    pub async fn insert(&self, record: EmailAddress) {
        self.emails.write().await.push(record);
    }

    /// Get a snapshot of all recorded bindings (for debugging/testing).
    pub async fn bound(&self) -> Vec<Binding> {
        self.bindings.read().await.clone()
    }

    /// Clear all records and bindings.
    pub async fn clear(&self) {
        self.emails.write().await.clear();
        self.bindings.write().await.clear();
    }

    /// Number of stored email records.
    pub async fn email_count(&self) -> usize {
        self.emails.read().await.len()
    }
}

#[async_trait]
impl PolicyStore for MemoryStore {
    async fn find_verified_email(&self, email: &str) -> Result<Option<EmailAddress>> {
        let emails = self.emails.read().await;
        Ok(emails
            .iter()
            .find(|record| record.verified && record.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn bind_social_account(&self, login: &SocialLogin, user_id: &str) -> Result<()> {
        self.bindings.write().await.push(Binding {
            provider_id: login.provider_id.clone(),
            user_id: user_id.to_string(),
        });
        Ok(())
    }
}
