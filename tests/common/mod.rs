//! Shared test doubles for integration tests.

use http::header::{HeaderName, HeaderValue};
use handshake_decorator::{Decorator, RequestType, ResponseType};

pub const REQUEST_CALLS: HeaderName = HeaderName::from_static("x-request-calls");
pub const RESPONSE_CALLS: HeaderName = HeaderName::from_static("x-response-calls");

/// Counts request decorations and reports the count on each request.
#[derive(Clone, Default)]
pub struct RequestOnly {
    pub calls: u32,
}

impl Decorator for RequestOnly {
    fn decorate_request(&mut self, req: &mut RequestType) {
        self.calls += 1;
        req.headers_mut().insert(REQUEST_CALLS, HeaderValue::from(self.calls));
    }
}

/// Counts response decorations and reports the count on each response.
#[derive(Clone, Default)]
pub struct ResponseOnly {
    pub calls: u32,
}

impl Decorator for ResponseOnly {
    fn decorate_response(&mut self, res: &mut ResponseType) {
        self.calls += 1;
        res.headers_mut().insert(RESPONSE_CALLS, HeaderValue::from(self.calls));
    }
}

/// Customizes both message kinds.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct Both {
    pub requests: u32,
    pub responses: u32,
}

impl Decorator for Both {
    fn decorate_request(&mut self, req: &mut RequestType) {
        self.requests += 1;
        req.headers_mut().insert(REQUEST_CALLS, HeaderValue::from(self.requests));
    }

    fn decorate_response(&mut self, res: &mut ResponseType) {
        self.responses += 1;
        res.headers_mut().insert(RESPONSE_CALLS, HeaderValue::from(self.responses));
    }
}
