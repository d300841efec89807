//! Capability-detected decorator adapter.
//!
//! # Responsibilities
//! - Define the `Decorator` customization points
//! - Apply the default `User-Agent` / `Server` mutation when a decorator
//!   does not customize that message kind
//! - Erase the concrete decorator type behind `ErasedDecorator`
//!
//! # Design Decisions
//! - The default mutation lives in the provided trait methods. Overriding a
//!   method is what makes a type capable for that message kind; there is no
//!   runtime flag to consult
//! - `Decorator` requires `Clone` and is therefore not object safe; the
//!   adapter bridges it to an object-safe trait with a boxed clone

use std::any::{self, Any};

use http::header::{HeaderValue, SERVER, USER_AGENT};

use crate::decorator::identity::IDENTIFICATION;
use crate::http::message::{HasFields, RequestType, ResponseType};

/// Customizes outgoing handshake messages.
///
/// Both methods are optional. A type that leaves one out gets the default
/// identification header for that message kind:
///
/// ```
/// use handshake_decorator::decorator::{Decorator, DecoratorHandle};
/// use handshake_decorator::http::RequestType;
///
/// #[derive(Clone)]
/// struct Subprotocol(&'static str);
///
/// impl Decorator for Subprotocol {
///     fn decorate_request(&mut self, req: &mut RequestType) {
///         req.headers_mut().insert(
///             "sec-websocket-protocol",
///             http::HeaderValue::from_static(self.0),
///         );
///     }
/// }
///
/// let mut handle = DecoratorHandle::new(Subprotocol("chat"));
/// let mut req = RequestType::default();
/// handle.apply_request(&mut req);
/// assert!(req.headers().get("user-agent").is_none());
/// ```
///
/// A panic raised inside either method is not caught; it unwinds through
/// the handle into the handshake that invoked it.
pub trait Decorator: Clone + Send + 'static {
    fn decorate_request(&mut self, req: &mut RequestType) {
        set_default_user_agent(req);
    }

    fn decorate_response(&mut self, res: &mut ResponseType) {
        set_default_server(res);
    }
}

/// Overwrite `User-Agent` with the library identification.
pub fn set_default_user_agent(req: &mut RequestType) {
    tracing::trace!(field = %USER_AGENT, value = IDENTIFICATION, "Applying default identification");
    req.replace_field(USER_AGENT, HeaderValue::from_static(IDENTIFICATION));
}

/// Overwrite `Server` with the library identification.
pub fn set_default_server(res: &mut ResponseType) {
    tracing::trace!(field = %SERVER, value = IDENTIFICATION, "Applying default identification");
    res.replace_field(SERVER, HeaderValue::from_static(IDENTIFICATION));
}

/// Object-safe view of a decorator, held by `DecoratorHandle`.
pub trait ErasedDecorator: Send {
    fn apply_request(&mut self, req: &mut RequestType);

    fn apply_response(&mut self, res: &mut ResponseType);

    /// Deep copy into a new, independently owned adapter.
    fn clone_box(&self) -> Box<dyn ErasedDecorator>;

    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// Owns exactly one decorator value.
#[derive(Debug, Clone, Default)]
pub struct DecoratorAdapter<T> {
    inner: T,
}

impl<T: Decorator> DecoratorAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: Decorator> ErasedDecorator for DecoratorAdapter<T> {
    fn apply_request(&mut self, req: &mut RequestType) {
        self.inner.decorate_request(req);
    }

    fn apply_response(&mut self, res: &mut ResponseType) {
        self.inner.decorate_response(res);
    }

    fn clone_box(&self) -> Box<dyn ErasedDecorator> {
        Box::new(self.clone())
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
