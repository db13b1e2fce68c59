// Data models the policy layer reads. The host framework owns persistence;
// nothing here is created, mutated, or destroyed by policy code except
// through the store's bind operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local platform account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into().to_lowercase(),
            email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A persisted email record pairing an address with its verification state
/// and owning account. Uniqueness of (email, verified=true) is assumed
/// upstream, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub id: String,
    pub email: String,
    pub verified: bool,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmailAddress {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        verified: bool,
        user_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email: email.into().to_lowercase(),
            verified,
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// An email address claim attached to an in-progress social login, in the
/// order the identity provider returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEmail {
    pub email: String,
    pub verified: bool,
}

impl CandidateEmail {
    pub fn new(email: impl Into<String>, verified: bool) -> Self {
        Self {
            email: email.into(),
            verified,
        }
    }
}

/// A transient, per-request social-login attempt as handed over by the host
/// after the provider handshake. Exposes exactly what the linker consumes:
/// the provider id, the already-linked flag, and the ordered candidate list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLogin {
    /// Provider identifier (e.g. "google", "github").
    pub provider_id: String,
    /// Whether this external identity is already bound to a local account.
    pub is_existing: bool,
    /// Candidate addresses in provider order.
    #[serde(default)]
    pub email_addresses: Vec<CandidateEmail>,
}

impl SocialLogin {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            is_existing: false,
            email_addresses: Vec::new(),
        }
    }

    pub fn existing(mut self) -> Self {
        self.is_existing = true;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>, verified: bool) -> Self {
        self.email_addresses.push(CandidateEmail::new(email, verified));
        self
    }

    /// The first candidate the provider marked verified, in provider order.
    /// Later verified candidates are never consulted.
    pub fn first_verified_email(&self) -> Option<&CandidateEmail> {
        self.email_addresses.iter().find(|e| e.verified)
    }

    /// Provider id with its first letter uppercased, for user-facing text.
    pub fn provider_display_name(&self) -> String {
        let mut chars = self.provider_id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// The possibly-anonymous party making the current request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    pub authenticated: bool,
    pub email: Option<String>,
}

impl Requester {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            email: None,
        }
    }

    pub fn authenticated(email: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            email: Some(email.into()),
        }
    }
}
