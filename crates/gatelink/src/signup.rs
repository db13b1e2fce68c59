// Registration gate: answers whether self-service signup is currently open,
// for both the direct and the social registration path.

use std::sync::Arc;

use gatelink_core::db::models::SocialLogin;

use crate::context::PolicyContext;

/// Gate consulted by the host before any new-account creation.
///
/// Pure function of process-wide configuration. A missing configuration
/// value defaults to open.
#[derive(Debug, Clone)]
pub struct RegistrationGate {
    ctx: Arc<PolicyContext>,
}

impl RegistrationGate {
    pub fn new(ctx: Arc<PolicyContext>) -> Self {
        Self { ctx }
    }

    /// Whether direct signup is open.
    pub fn is_open_for_signup(&self) -> bool {
        let open = self.ctx.options.allow_registration;
        if !open {
            self.ctx.logger.info("signup refused: registration is closed");
        }
        open
    }

    /// Whether social signup is open. Same contract as the direct path;
    /// the login attempt carries no weight in the decision.
    pub fn is_open_for_social_signup(&self, _login: &SocialLogin) -> bool {
        self.is_open_for_signup()
    }
}
