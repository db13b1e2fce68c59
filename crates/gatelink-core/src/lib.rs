//! Core types for gatelink: configuration, error taxonomy, logging,
//! environment detection, data models, and the storage capability trait
//! the policy objects consume.

pub mod db;
pub mod env;
pub mod error;
pub mod logger;
pub mod options;

// Re-exports for convenience
pub use db::models::{CandidateEmail, EmailAddress, Requester, SocialLogin, User};
pub use db::store::PolicyStore;
pub use error::{ErrorCode, GatelinkError, Result};
pub use logger::{GateLogger, LogHandler, LogLevel, LoggerConfig};
pub use options::{GatelinkOptions, LoggerOptions};
