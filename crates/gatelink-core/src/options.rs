// GatelinkOptions: the main configuration struct.
//
// Read once at startup and treated as read-only at request time. The host
// owns where the values come from (settings file, env, hardcoded); the env
// helpers in `env.rs` cover the common override path.

use serde::{Deserialize, Serialize};

use crate::env;

/// Top-level configuration for the policy layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatelinkOptions {
    /// Whether self-service signup is open, for both the direct and the
    /// social registration path. Missing values deserialize to open.
    #[serde(default = "default_true")]
    pub allow_registration: bool,

    /// Name of the route the host redirects to when a social login is
    /// rejected by the cross-account mismatch guard. Resolved to a URL by
    /// the host's router.
    #[serde(default = "default_connections_route")]
    pub connections_route: String,

    /// Logger configuration.
    #[serde(default)]
    pub logger: LoggerOptions,
}

fn default_true() -> bool {
    true
}

fn default_connections_route() -> String {
    "account_connections".to_string()
}

impl Default for GatelinkOptions {
    fn default() -> Self {
        Self {
            allow_registration: true,
            connections_route: default_connections_route(),
            logger: LoggerOptions::default(),
        }
    }
}

impl GatelinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the registration flag overridden from
    /// `GATELINK_ALLOW_REGISTRATION` when that variable is set.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(allow) = env::allow_registration_from_env() {
            options.allow_registration = allow;
        }
        options
    }

    pub fn allow_registration(mut self, allow: bool) -> Self {
        self.allow_registration = allow;
        self
    }

    pub fn connections_route(mut self, route: impl Into<String>) -> Self {
        self.connections_route = route.into();
        self
    }

    pub fn logger(mut self, logger: LoggerOptions) -> Self {
        self.logger = logger;
        self
    }
}

/// Logger configuration as carried in options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerOptions {
    /// Disable logging entirely.
    #[serde(default)]
    pub disabled: bool,

    /// Log level: "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            level: default_log_level(),
        }
    }
}
