//! Identification strings and the built-in decorators that write them.

use std::fmt;

use http::header::{HeaderValue, InvalidHeaderValue, SERVER, USER_AGENT};

use crate::decorator::adapter::Decorator;
use crate::http::message::{HasFields, RequestType, ResponseType};

// Literal tokens, so `concat!` can build `IDENTIFICATION` from them.
macro_rules! product_name {
    () => {
        "Beast"
    };
}

macro_rules! version {
    () => {
        env!("CARGO_PKG_VERSION")
    };
}

/// Product token of the default identification.
pub const PRODUCT_NAME: &str = product_name!();

/// Version token of the default identification.
pub const VERSION: &str = version!();

/// `<PRODUCT_NAME>/<VERSION>`, written by the default mutation.
pub const IDENTIFICATION: &str = concat!(product_name!(), "/", version!());

/// Decorator that customizes nothing; both messages get the default
/// identification header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultDecorator;

impl Decorator for DefaultDecorator {}

/// A `<product>/<version>` identification, validated as a header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    text: String,
    value: HeaderValue,
}

impl Identity {
    pub fn new(product: &str, version: &str) -> Result<Self, InvalidHeaderValue> {
        let text = format!("{}/{}", product, version);
        let value = HeaderValue::from_str(&text)?;
        Ok(Self { text, value })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.value
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            text: IDENTIFICATION.to_string(),
            value: HeaderValue::from_static(IDENTIFICATION),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Writes a caller-chosen identity into `User-Agent` and `Server`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityDecorator {
    identity: Identity,
}

impl IdentityDecorator {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Decorator for IdentityDecorator {
    fn decorate_request(&mut self, req: &mut RequestType) {
        req.replace_field(USER_AGENT, self.identity.header_value().clone());
    }

    fn decorate_response(&mut self, res: &mut ResponseType) {
        res.replace_field(SERVER, self.identity.header_value().clone());
    }
}
