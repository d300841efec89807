//! HTTP handshake message subsystem.
//!
//! # Data Flow
//! ```text
//! Client side:
//!     request.rs (build upgrade request) → DecoratorHandle::apply_request → send
//!
//! Server side:
//!     received upgrade request
//!     → response.rs (validate, build 101 or rejection) → DecoratorHandle::apply_response
//!     → websocket.rs (same decoration inside tungstenite's accept callback)
//! ```

pub mod message;
pub mod request;
pub mod response;
pub mod websocket;

use thiserror::Error;

pub use message::{HasFields, RequestType, ResponseType};
pub use request::{build_upgrade_request, decorate_client_request, generate_key};
pub use response::{build_rejection, build_upgrade_response};
pub use websocket::DecoratedCallback;

/// Errors raised while building or validating handshake messages.
#[derive(Debug, Error)]
pub enum HandshakeError {
    /// Upgrade requests must use GET.
    #[error("Upgrade request method must be GET, got {0}")]
    Method(http::Method),

    /// `Upgrade: websocket` missing.
    #[error("Missing or invalid Upgrade header")]
    MissingUpgrade,

    /// `Connection: upgrade` missing.
    #[error("Missing or invalid Connection header")]
    MissingConnectionUpgrade,

    /// `Sec-WebSocket-Key` missing.
    #[error("Missing Sec-WebSocket-Key")]
    MissingKey,

    /// Only protocol version 13 is spoken.
    #[error("Unsupported Sec-WebSocket-Version: {0}")]
    UnsupportedVersion(String),

    /// Message could not be assembled (bad host, target or header value).
    #[error("Invalid handshake message: {0}")]
    Http(#[from] http::Error),

    /// Client request could not be derived from the given URL.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}
