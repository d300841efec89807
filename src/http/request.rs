//! Upgrade request construction.
//!
//! # Responsibilities
//! - Build the HTTP/1.1 GET upgrade request
//! - Run the decorator over it as the last step

use http::header::{CONNECTION, HOST, SEC_WEBSOCKET_KEY, SEC_WEBSOCKET_VERSION, UPGRADE};
use http::{Method, Request, Version};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;

use crate::decorator::DecoratorHandle;
use crate::http::message::RequestType;
use crate::http::HandshakeError;

pub use tokio_tungstenite::tungstenite::handshake::client::generate_key;

/// Build an upgrade request for `target` on `host`, then decorate it.
pub fn build_upgrade_request(
    host: &str,
    target: &str,
    key: &str,
    decorator: &mut DecoratorHandle,
) -> Result<RequestType, HandshakeError> {
    let mut req = Request::builder()
        .method(Method::GET)
        .uri(target)
        .version(Version::HTTP_11)
        .header(HOST, host)
        .header(UPGRADE, "websocket")
        .header(CONNECTION, "upgrade")
        .header(SEC_WEBSOCKET_KEY, key)
        .header(SEC_WEBSOCKET_VERSION, "13")
        .body(())?;

    decorator.apply_request(&mut req);
    Ok(req)
}

/// Let tungstenite derive a client request from `url`, then decorate it.
///
/// The result can be passed straight to `connect_async`.
pub fn decorate_client_request<R>(
    url: R,
    decorator: &mut DecoratorHandle,
) -> Result<RequestType, HandshakeError>
where
    R: IntoClientRequest,
{
    let mut req = url.into_client_request()?;
    decorator.apply_request(&mut req);
    Ok(req)
}
