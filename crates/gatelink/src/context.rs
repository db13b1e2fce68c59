// PolicyContext: everything the policy objects need at request time,
// built once at startup and shared behind an Arc.

use std::sync::Arc;

use gatelink_core::logger::{GateLogger, LogLevel, LoggerConfig};
use gatelink_core::options::GatelinkOptions;
use gatelink_core::PolicyStore;

/// Shared context for policy evaluation.
///
/// Holds the read-only configuration, the store capability, and the logger.
/// There is no per-request mutable state; each evaluation is scoped to one
/// incoming request.
#[derive(Debug)]
pub struct PolicyContext {
    pub options: GatelinkOptions,
    pub store: Arc<dyn PolicyStore>,
    pub logger: GateLogger,
}

impl PolicyContext {
    pub fn new(options: GatelinkOptions, store: Arc<dyn PolicyStore>) -> Arc<Self> {
        let logger = GateLogger::new(LoggerConfig {
            disabled: options.logger.disabled,
            level: LogLevel::from(options.logger.level.as_str()),
            ..Default::default()
        });
        Arc::new(Self {
            options,
            store,
            logger,
        })
    }
}
