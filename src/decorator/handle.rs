//! Owning decorator handle.
//!
//! # Responsibilities
//! - Own exactly one type-erased adapter
//! - Deep copy on `Clone`, plain move transfers ownership
//! - Expose `apply_request` / `apply_response` to the handshake
//!
//! # Design Decisions
//! - There is no empty state; `Default` installs `DefaultDecorator`
//! - Applying takes `&mut self`, so one handle cannot be driven from two
//!   places at once without external synchronization

use std::fmt;

use crate::decorator::adapter::{Decorator, DecoratorAdapter, ErasedDecorator};
use crate::decorator::identity::DefaultDecorator;
use crate::http::message::{RequestType, ResponseType};

/// Type-erased, owning holder of a decorator.
pub struct DecoratorHandle {
    inner: Box<dyn ErasedDecorator>,
}

impl DecoratorHandle {
    /// Wrap `decorator` in a fresh adapter.
    pub fn new<T: Decorator>(decorator: T) -> Self {
        let inner: Box<dyn ErasedDecorator> = Box::new(DecoratorAdapter::new(decorator));
        tracing::trace!(decorator = inner.type_name(), "Decorator installed");
        Self { inner }
    }

    /// Decorate an outgoing upgrade request.
    pub fn apply_request(&mut self, req: &mut RequestType) {
        self.inner.apply_request(req);
    }

    /// Decorate an outgoing upgrade response.
    pub fn apply_response(&mut self, res: &mut ResponseType) {
        self.inner.apply_response(res);
    }

    /// Type name of the wrapped decorator.
    pub fn decorator_type(&self) -> &'static str {
        self.inner.type_name()
    }

    /// Borrow the wrapped decorator if it is a `T`.
    pub fn downcast_ref<T: Decorator>(&self) -> Option<&T> {
        self.inner
            .as_any()
            .downcast_ref::<DecoratorAdapter<T>>()
            .map(DecoratorAdapter::get_ref)
    }
}

impl Clone for DecoratorHandle {
    fn clone(&self) -> Self {
        tracing::trace!(decorator = self.inner.type_name(), "Decorator cloned");
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl Default for DecoratorHandle {
    fn default() -> Self {
        Self::new(DefaultDecorator)
    }
}

impl<T: Decorator> From<T> for DecoratorHandle {
    fn from(decorator: T) -> Self {
        Self::new(decorator)
    }
}

impl fmt::Debug for DecoratorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorHandle")
            .field("decorator", &self.decorator_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::identity::IDENTIFICATION;
    use http::header::{SERVER, USER_AGENT};

    #[test]
    fn test_default_handle_wraps_default_decorator() {
        let handle = DecoratorHandle::default();
        assert!(handle.downcast_ref::<DefaultDecorator>().is_some());
        assert!(format!("{:?}", handle).contains("DefaultDecorator"));
    }

    #[test]
    fn test_default_handle_on_empty_request() {
        let mut handle = DecoratorHandle::default();
        let mut req = RequestType::default();

        handle.apply_request(&mut req);

        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.headers()[USER_AGENT], IDENTIFICATION);
    }

    #[test]
    fn test_default_mutation_is_idempotent() {
        let mut handle = DecoratorHandle::default();
        let mut res = ResponseType::default();

        handle.apply_response(&mut res);
        handle.apply_response(&mut res);

        assert_eq!(res.headers().get_all(SERVER).iter().count(), 1);
        assert_eq!(res.headers()[SERVER], IDENTIFICATION);
    }

    #[test]
    fn test_mem_take_leaves_default_behind() {
        let mut source = DecoratorHandle::new(crate::decorator::on_request(|_: &mut RequestType| {}));
        let taken = std::mem::take(&mut source);

        assert!(source.downcast_ref::<DefaultDecorator>().is_some());
        assert!(taken.downcast_ref::<DefaultDecorator>().is_none());
    }
}
