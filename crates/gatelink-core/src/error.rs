// Error taxonomy for the policy layer.
//
// The taxonomy is deliberately narrow: a cross-account mismatch is not an
// error (it is a policy rejection surfaced through `LinkDecision`), and a
// lookup miss is a normal branch outcome. Errors here are store or
// configuration faults, which callers propagate untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable codes for the host to branch on when a policy call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    StorageFailure,
    InvalidConfiguration,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::StorageFailure => "Storage failure",
            Self::InvalidConfiguration => "Invalid configuration",
            Self::InternalError => "Internal error",
        };
        write!(f, "{msg}")
    }
}

/// Faults raised by the policy layer or its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum GatelinkError {
    /// The store failed while looking up or binding records. Wraps the
    /// backend's own error text without interpretation.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl GatelinkError {
    /// The code the host should report for this fault.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Storage(_) => ErrorCode::StorageFailure,
            Self::Config(_) => ErrorCode::InvalidConfiguration,
            Self::Other(_) | Self::Anyhow(_) => ErrorCode::InternalError,
        }
    }
}

/// Unified result type for gatelink operations.
pub type Result<T> = std::result::Result<T, GatelinkError>;
