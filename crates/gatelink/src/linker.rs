// Social-login linker: decides the disposition of an incoming external
// identity relative to local accounts, before the host finalizes any
// session state.

use std::sync::Arc;

use gatelink_core::db::models::{Requester, SocialLogin};
use gatelink_core::Result;

use crate::context::PolicyContext;

/// Outcome of a pre-login evaluation.
///
/// The host translates a `Reject` into the actual response interruption:
/// enqueue `message` as an error-level notice for the current request and
/// redirect to the named route instead of completing the login. `Continue`
/// defers to default framework behavior, either plain login or ordinary
/// new-account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDecision {
    /// Proceed with the default flow.
    Continue,
    /// Hard stop: surface `message` to the user and redirect to the route
    /// named by `redirect`. Nothing past this point runs in the same
    /// request.
    Reject { message: String, redirect: String },
}

impl LinkDecision {
    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject { .. })
    }
}

/// Linking policy invoked on every social-login callback.
#[derive(Debug, Clone)]
pub struct SocialLoginLinker {
    ctx: Arc<PolicyContext>,
}

impl SocialLoginLinker {
    pub fn new(ctx: Arc<PolicyContext>) -> Self {
        Self { ctx }
    }

    /// Evaluate an in-progress social login.
    ///
    /// Priority order:
    /// 1. identity already bound to a local account: plain login
    /// 2. no candidate emails: nothing to match on
    /// 3. first verified candidate wins; none verified: no-op
    /// 4. authenticated requester with a different email: reject
    /// 5. no persisted verified match: fall through to account creation
    /// 6. persisted verified match: bind to its owner
    ///
    /// Store faults from the lookup or the bind propagate unmodified.
    pub async fn pre_social_login(
        &self,
        requester: &Requester,
        login: &SocialLogin,
    ) -> Result<LinkDecision> {
        if login.is_existing {
            return Ok(LinkDecision::Continue);
        }

        // Some providers return no email claims at all.
        if login.email_addresses.is_empty() {
            return Ok(LinkDecision::Continue);
        }

        let verified = match login.first_verified_email() {
            Some(candidate) => candidate,
            None => return Ok(LinkDecision::Continue),
        };

        if requester.authenticated && requester.email.as_deref() != Some(verified.email.as_str()) {
            let provider = login.provider_display_name();
            self.ctx.logger.info(&format!(
                "rejected {} login: verified email does not match the signed-in account",
                login.provider_id
            ));
            return Ok(LinkDecision::Reject {
                message: format!(
                    "Your {provider} account cannot be linked because it does not match \
                     the email on this platform account."
                ),
                redirect: self.ctx.options.connections_route.clone(),
            });
        }

        let existing = match self.ctx.store.find_verified_email(&verified.email).await? {
            Some(record) => record,
            None => return Ok(LinkDecision::Continue),
        };

        self.ctx
            .store
            .bind_social_account(login, &existing.user_id)
            .await?;
        self.ctx.logger.debug(&format!(
            "linked {} login to existing account {}",
            login.provider_id, existing.user_id
        ));

        Ok(LinkDecision::Continue)
    }
}
