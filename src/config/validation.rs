//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check identity tokens and header names/values
//! - Reject header names that repeat once case is folded
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Header compilation and validation share one pass, so a config that
//!   validates always compiles

use std::collections::BTreeMap;

use http::header::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::{DecoratorConfig, HandshakeConfig};
use crate::decorator::identity::Identity;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identity product must not be empty")]
    EmptyProduct,

    #[error("identity version must not be empty")]
    EmptyVersion,

    #[error("identity {field} must not contain whitespace: {value:?}")]
    Whitespace { field: &'static str, value: String },

    #[error("identity is not a valid header value: {0:?}")]
    InvalidIdentity(String),

    #[error("{section}: invalid header name {name:?}")]
    InvalidHeaderName { section: &'static str, name: String },

    #[error("{section}: invalid value for header {name:?}")]
    InvalidHeaderValue { section: &'static str, name: String },

    #[error("{section}: header {name:?} is listed more than once")]
    DuplicateHeader { section: &'static str, name: String },
}

/// Headers ready to be written, in configuration order.
pub type CompiledHeaders = Vec<(HeaderName, HeaderValue)>;

/// Validate the whole configuration.
pub fn validate_config(config: &HandshakeConfig) -> Result<(), Vec<ValidationError>> {
    compile_decorator(&config.decorator).map(|_| ())
}

/// Validate a decorator section and convert it into typed values.
pub fn compile_decorator(
    config: &DecoratorConfig,
) -> Result<(Identity, CompiledHeaders, CompiledHeaders), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let identity = compile_identity(config, &mut errors);
    let request = compile_headers("request_headers", &config.request_headers, &mut errors);
    let response = compile_headers("response_headers", &config.response_headers, &mut errors);

    match identity {
        Some(identity) if errors.is_empty() => Ok((identity, request, response)),
        _ => Err(errors),
    }
}

fn compile_identity(config: &DecoratorConfig, errors: &mut Vec<ValidationError>) -> Option<Identity> {
    let product = &config.identity.product;
    let version = &config.identity.version;
    let before = errors.len();

    if product.is_empty() {
        errors.push(ValidationError::EmptyProduct);
    } else if product.chars().any(char::is_whitespace) {
        errors.push(ValidationError::Whitespace { field: "product", value: product.clone() });
    }
    if version.is_empty() {
        errors.push(ValidationError::EmptyVersion);
    } else if version.chars().any(char::is_whitespace) {
        errors.push(ValidationError::Whitespace { field: "version", value: version.clone() });
    }
    if errors.len() > before {
        return None;
    }

    match Identity::new(product, version) {
        Ok(identity) => Some(identity),
        Err(_) => {
            errors.push(ValidationError::InvalidIdentity(format!("{}/{}", product, version)));
            None
        }
    }
}

fn compile_headers(
    section: &'static str,
    headers: &BTreeMap<String, String>,
    errors: &mut Vec<ValidationError>,
) -> CompiledHeaders {
    let mut compiled = Vec::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(n) => n,
            Err(_) => {
                errors.push(ValidationError::InvalidHeaderName { section, name: name.clone() });
                continue;
            }
        };
        // Names are case-insensitive; "X-A" and "x-a" collide after parsing.
        if compiled.iter().any(|(n, _)| *n == header_name) {
            errors.push(ValidationError::DuplicateHeader { section, name: name.clone() });
            continue;
        }
        match HeaderValue::from_str(value) {
            Ok(v) => compiled.push((header_name, v)),
            Err(_) => errors.push(ValidationError::InvalidHeaderValue { section, name: name.clone() }),
        }
    }
    compiled
}
