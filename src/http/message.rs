//! Handshake message contract.
//!
//! # Responsibilities
//! - Name the request and response types decorators operate on
//! - Provide "replace value for name" over any message's header map
//!
//! # Design Decisions
//! - Bodies are `()`: decorators never see or veto a message body
//! - Types match tungstenite's upgrade request/response so decorated
//!   messages can be handed to it directly

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response};

/// Outgoing WebSocket upgrade request.
pub type RequestType = Request<()>;

/// Outgoing WebSocket upgrade response.
pub type ResponseType = Response<()>;

/// A message exposing a mutable header field map.
pub trait HasFields {
    fn fields(&self) -> &HeaderMap;

    fn fields_mut(&mut self) -> &mut HeaderMap;

    /// Set `name` to `value`, dropping every prior value for that name.
    fn replace_field(&mut self, name: HeaderName, value: HeaderValue) {
        self.fields_mut().insert(name, value);
    }
}

impl<B> HasFields for Request<B> {
    fn fields(&self) -> &HeaderMap {
        self.headers()
    }

    fn fields_mut(&mut self) -> &mut HeaderMap {
        self.headers_mut()
    }
}

impl<B> HasFields for Response<B> {
    fn fields(&self) -> &HeaderMap {
        self.headers()
    }

    fn fields_mut(&mut self) -> &mut HeaderMap {
        self.headers_mut()
    }
}
