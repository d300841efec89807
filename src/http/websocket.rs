//! tokio-tungstenite accept integration.
//!
//! # Responsibilities
//! - Decorate the upgrade response tungstenite writes during
//!   `accept_hdr_async`
//!
//! # Data Flow
//! ```text
//! Client upgrade request
//!     → tungstenite validates and builds the 101 response
//!     → DecoratedCallback::on_request (apply_response)
//!     → 101 written to the socket
//! ```

use tokio_tungstenite::tungstenite::handshake::server::{
    Callback, ErrorResponse, Request, Response,
};

use crate::decorator::DecoratorHandle;

/// Server accept callback that runs a decorator over the upgrade response.
#[derive(Debug, Clone, Default)]
pub struct DecoratedCallback {
    decorator: DecoratorHandle,
}

impl DecoratedCallback {
    pub fn new(decorator: DecoratorHandle) -> Self {
        Self { decorator }
    }
}

impl Callback for DecoratedCallback {
    fn on_request(mut self, request: &Request, mut response: Response) -> Result<Response, ErrorResponse> {
        tracing::debug!(uri = %request.uri(), decorator = self.decorator.decorator_type(), "Decorating upgrade response");
        self.decorator.apply_response(&mut response);
        Ok(response)
    }
}

impl DecoratorHandle {
    /// Consume the handle into a tungstenite accept callback.
    pub fn into_callback(self) -> DecoratedCallback {
        DecoratedCallback::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::{on_response, IDENTIFICATION};
    use crate::http::message::ResponseType;
    use http::header::{HeaderValue, SERVER};

    #[test]
    fn test_default_callback_sets_server() {
        let callback = DecoratedCallback::default();
        let res = callback.on_request(&Request::default(), Response::default()).unwrap();
        assert_eq!(res.headers()[SERVER], IDENTIFICATION);
    }

    #[test]
    fn test_custom_callback_from_handle() {
        let handle = DecoratorHandle::new(on_response(|res: &mut ResponseType| {
            res.headers_mut().insert(SERVER, HeaderValue::from_static("edge"));
        }));

        let res = handle
            .into_callback()
            .on_request(&Request::default(), Response::default())
            .unwrap();

        assert_eq!(res.headers()[SERVER], "edge");
    }
}
