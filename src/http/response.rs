//! Upgrade response construction.
//!
//! # Responsibilities
//! - Validate the client's upgrade request
//! - Build the 101 Switching Protocols response with the accept key
//! - Build decorated rejection responses
//!
//! # Design Decisions
//! - The decorator runs on rejections too, so a server identifies itself
//!   consistently whether or not the upgrade succeeds

use http::header::{
    HeaderMap, HeaderName, CONNECTION, SEC_WEBSOCKET_ACCEPT, SEC_WEBSOCKET_KEY,
    SEC_WEBSOCKET_VERSION, UPGRADE,
};
use http::{Method, Response, StatusCode, Version};
use tokio_tungstenite::tungstenite::handshake::derive_accept_key;

use crate::decorator::DecoratorHandle;
use crate::http::message::{RequestType, ResponseType};
use crate::http::HandshakeError;

/// Validate `req` and build the decorated 101 response for it.
pub fn build_upgrade_response(
    req: &RequestType,
    decorator: &mut DecoratorHandle,
) -> Result<ResponseType, HandshakeError> {
    let key = validate_upgrade(req)?;

    let mut res = Response::builder()
        .status(StatusCode::SWITCHING_PROTOCOLS)
        .version(Version::HTTP_11)
        .header(UPGRADE, "websocket")
        .header(CONNECTION, "upgrade")
        .header(SEC_WEBSOCKET_ACCEPT, derive_accept_key(key))
        .body(())?;

    decorator.apply_response(&mut res);
    Ok(res)
}

/// Decorated response refusing an upgrade.
pub fn build_rejection(status: StatusCode, decorator: &mut DecoratorHandle) -> ResponseType {
    let mut res = Response::new(());
    *res.status_mut() = status;
    *res.version_mut() = Version::HTTP_11;
    if status == StatusCode::UPGRADE_REQUIRED {
        res.headers_mut()
            .insert(SEC_WEBSOCKET_VERSION, http::HeaderValue::from_static("13"));
    }

    decorator.apply_response(&mut res);
    res
}

/// Check the upgrade headers and return the raw `Sec-WebSocket-Key`.
fn validate_upgrade(req: &RequestType) -> Result<&[u8], HandshakeError> {
    if req.method() != Method::GET {
        return Err(HandshakeError::Method(req.method().clone()));
    }
    let headers = req.headers();
    if !has_token(headers, &UPGRADE, "websocket") {
        return Err(HandshakeError::MissingUpgrade);
    }
    if !has_token(headers, &CONNECTION, "upgrade") {
        return Err(HandshakeError::MissingConnectionUpgrade);
    }
    let key = headers
        .get(SEC_WEBSOCKET_KEY)
        .ok_or(HandshakeError::MissingKey)?;
    match headers.get(SEC_WEBSOCKET_VERSION) {
        Some(v) if v == "13" => {}
        Some(v) => {
            return Err(HandshakeError::UnsupportedVersion(
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            ))
        }
        None => return Err(HandshakeError::UnsupportedVersion(String::new())),
    }
    Ok(key.as_bytes())
}

/// Whether any value of `name` lists `token` (comma separated, case-insensitive).
fn has_token(headers: &HeaderMap, name: &HeaderName, token: &str) -> bool {
    headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|t| t.trim().eq_ignore_ascii_case(token))
}
