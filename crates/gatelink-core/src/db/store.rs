// The storage capability trait the policy consumes. Backends implement the
// two operations the linker needs and nothing more; query planning, schema,
// and transactions stay with the host's data layer.

use std::fmt;

use async_trait::async_trait;

use crate::db::models::{EmailAddress, SocialLogin};
use crate::error::Result;

/// Store operations consumed by the policy layer.
///
/// Implementations run inside whatever transaction boundary the host wraps
/// around the login callback; this layer adds no locking or ordering of
/// its own.
#[async_trait]
pub trait PolicyStore: Send + Sync + fmt::Debug {
    /// Find a persisted email record matching `email` case-insensitively
    /// with `verified == true`. Returns at most the first match, or `None`.
    async fn find_verified_email(&self, email: &str) -> Result<Option<EmailAddress>>;

    /// Bind the external identity of `login` to the local account `user_id`,
    /// so future logins via that identity resolve to the same account.
    async fn bind_social_account(&self, login: &SocialLogin, user_id: &str) -> Result<()>;
}
