//! Closure-backed decorators.
//!
//! Wrapping a closure states which message kinds it customizes; the other
//! kind keeps the default identification header. Whatever the closure
//! returns is discarded.

use std::marker::PhantomData;

use crate::decorator::adapter::Decorator;
use crate::http::message::{RequestType, ResponseType};

/// Customizes requests only.
pub struct OnRequest<F, R = ()> {
    f: F,
    _ret: PhantomData<fn() -> R>,
}

/// Customizes responses only.
pub struct OnResponse<G, S = ()> {
    g: G,
    _ret: PhantomData<fn() -> S>,
}

/// Customizes both requests and responses.
pub struct OnBoth<F, G, R = (), S = ()> {
    request: F,
    response: G,
    _ret: PhantomData<fn() -> (R, S)>,
}

impl<F: Clone, R> Clone for OnRequest<F, R> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone(), _ret: PhantomData }
    }
}

impl<G: Clone, S> Clone for OnResponse<G, S> {
    fn clone(&self) -> Self {
        Self { g: self.g.clone(), _ret: PhantomData }
    }
}

impl<F: Clone, G: Clone, R, S> Clone for OnBoth<F, G, R, S> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            response: self.response.clone(),
            _ret: PhantomData,
        }
    }
}

pub fn on_request<F, R>(f: F) -> OnRequest<F, R>
where
    F: FnMut(&mut RequestType) -> R + Clone + Send + 'static,
    R: 'static,
{
    OnRequest { f, _ret: PhantomData }
}

pub fn on_response<G, S>(g: G) -> OnResponse<G, S>
where
    G: FnMut(&mut ResponseType) -> S + Clone + Send + 'static,
    S: 'static,
{
    OnResponse { g, _ret: PhantomData }
}

pub fn on_both<F, G, R, S>(request: F, response: G) -> OnBoth<F, G, R, S>
where
    F: FnMut(&mut RequestType) -> R + Clone + Send + 'static,
    G: FnMut(&mut ResponseType) -> S + Clone + Send + 'static,
    R: 'static,
    S: 'static,
{
    OnBoth { request, response, _ret: PhantomData }
}

impl<F, R> Decorator for OnRequest<F, R>
where
    F: FnMut(&mut RequestType) -> R + Clone + Send + 'static,
    R: 'static,
{
    fn decorate_request(&mut self, req: &mut RequestType) {
        (self.f)(req);
    }
}

impl<G, S> Decorator for OnResponse<G, S>
where
    G: FnMut(&mut ResponseType) -> S + Clone + Send + 'static,
    S: 'static,
{
    fn decorate_response(&mut self, res: &mut ResponseType) {
        (self.g)(res);
    }
}

impl<F, G, R, S> Decorator for OnBoth<F, G, R, S>
where
    F: FnMut(&mut RequestType) -> R + Clone + Send + 'static,
    G: FnMut(&mut ResponseType) -> S + Clone + Send + 'static,
    R: 'static,
    S: 'static,
{
    fn decorate_request(&mut self, req: &mut RequestType) {
        (self.request)(req);
    }

    fn decorate_response(&mut self, res: &mut ResponseType) {
        (self.response)(res);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::handle::DecoratorHandle;
    use crate::decorator::identity::IDENTIFICATION;
    use http::header::{HeaderValue, SERVER, USER_AGENT};

    #[test]
    fn test_on_response_keeps_default_request() {
        let mut decorator = on_response(|res: &mut ResponseType| {
            res.headers_mut().insert("x-region", HeaderValue::from_static("eu"));
        });
        let mut req = RequestType::default();
        let mut res = ResponseType::default();

        decorator.decorate_request(&mut req);
        decorator.decorate_response(&mut res);

        assert_eq!(req.headers()[USER_AGENT], IDENTIFICATION);
        assert_eq!(res.headers()["x-region"], "eu");
        assert!(res.headers().get(SERVER).is_none());
    }

    #[test]
    fn test_closure_state_is_copied_with_decorator() {
        let mut calls = 0u32;
        let mut first = on_request(move |req: &mut RequestType| {
            calls += 1;
            req.headers_mut().insert("x-calls", HeaderValue::from(calls));
        });
        first.decorate_request(&mut RequestType::default());

        let mut second = first.clone();
        let mut req = RequestType::default();
        first.decorate_request(&mut RequestType::default());
        second.decorate_request(&mut req);

        assert_eq!(req.headers()["x-calls"], "2");
    }

    #[test]
    fn test_closure_return_value_is_discarded() {
        let mut handle = DecoratorHandle::new(on_request(|req: &mut RequestType| {
            req.headers_mut().insert(USER_AGENT, HeaderValue::from_static("bot/1"))
        }));
        let mut req = RequestType::default();
        let mut res = ResponseType::default();

        handle.apply_request(&mut req);
        handle.apply_response(&mut res);

        assert_eq!(req.headers()[USER_AGENT], "bot/1");
        assert_eq!(res.headers()[SERVER], IDENTIFICATION);
    }

    #[test]
    fn test_on_both_with_returning_closures() {
        let mut handle = DecoratorHandle::new(on_both(
            |req: &mut RequestType| req.headers().len(),
            |res: &mut ResponseType| res.headers_mut().insert(SERVER, HeaderValue::from_static("edge")).is_some(),
        ));
        let mut req = RequestType::default();
        let mut res = ResponseType::default();

        handle.apply_request(&mut req);
        handle.apply_response(&mut res);

        assert!(req.headers().is_empty());
        assert_eq!(res.headers()[SERVER], "edge");
    }
}
