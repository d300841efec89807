//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for hosts that do not install their own
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins; the configured level is only the fallback
//! - Decoration itself logs at trace level only, it runs once per handshake

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install a global `fmt` subscriber filtered by `RUST_LOG` or `config.log_level`.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
