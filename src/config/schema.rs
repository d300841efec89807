//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decorator::identity::{PRODUCT_NAME, VERSION};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HandshakeConfig {
    /// Header decoration applied to handshake messages.
    pub decorator: DecoratorConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Decorator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Identification written to `User-Agent` / `Server`.
    pub identity: IdentityConfig,

    /// Write the identity into `User-Agent` on upgrade requests.
    pub set_user_agent: bool,

    /// Write the identity into `Server` on upgrade responses.
    pub set_server: bool,

    /// Extra headers for upgrade requests.
    pub request_headers: BTreeMap<String, String>,

    /// Extra headers for upgrade responses.
    pub response_headers: BTreeMap<String, String>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            set_user_agent: true,
            set_server: true,
            request_headers: BTreeMap::new(),
            response_headers: BTreeMap::new(),
        }
    }
}

/// `<product>/<version>` identification.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub product: String,
    pub version: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            product: PRODUCT_NAME.to_string(),
            version: VERSION.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback filter when `RUST_LOG` is unset (e.g. "info", "handshake_decorator=trace").
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "handshake_decorator=info".to_string(),
        }
    }
}
