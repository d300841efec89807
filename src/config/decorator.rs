//! Decorator built from configuration.

use http::header::{SERVER, USER_AGENT};

use crate::config::loader::ConfigError;
use crate::config::schema::DecoratorConfig;
use crate::config::validation::{compile_decorator, CompiledHeaders};
use crate::decorator::{Decorator, Identity};
use crate::http::message::{HasFields, RequestType, ResponseType};

/// Writes configured extra headers and, when enabled, the configured
/// identity. Customizes both message kinds, so the library default
/// identification is never applied on top of it.
#[derive(Debug, Clone)]
pub struct ConfiguredDecorator {
    identity: Identity,
    set_user_agent: bool,
    set_server: bool,
    request_headers: CompiledHeaders,
    response_headers: CompiledHeaders,
}

impl ConfiguredDecorator {
    pub fn from_config(config: &DecoratorConfig) -> Result<Self, ConfigError> {
        let (identity, request_headers, response_headers) =
            compile_decorator(config).map_err(ConfigError::Validation)?;

        tracing::debug!(
            identity = %identity,
            request_headers = request_headers.len(),
            response_headers = response_headers.len(),
            "Configured decorator built"
        );

        Ok(Self {
            identity,
            set_user_agent: config.set_user_agent,
            set_server: config.set_server,
            request_headers,
            response_headers,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Decorator for ConfiguredDecorator {
    fn decorate_request(&mut self, req: &mut RequestType) {
        for (name, value) in &self.request_headers {
            req.replace_field(name.clone(), value.clone());
        }
        if self.set_user_agent {
            req.replace_field(USER_AGENT, self.identity.header_value().clone());
        }
    }

    fn decorate_response(&mut self, res: &mut ResponseType) {
        for (name, value) in &self.response_headers {
            res.replace_field(name.clone(), value.clone());
        }
        if self.set_server {
            res.replace_field(SERVER, self.identity.header_value().clone());
        }
    }
}
