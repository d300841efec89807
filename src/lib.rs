//! Pluggable header decoration for WebSocket upgrade handshakes.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller decorator ──▶ DecoratorAdapter<T> ──▶ DecoratorHandle (Box<dyn ErasedDecorator>)
//!                        (default User-Agent /     │ clone = deep copy
//!                         Server when T does       │ move  = box transfer
//!                         not customize)           ▼
//!                                         http::request / http::response
//!                                         http::websocket (tungstenite accept)
//! ```
//!
//! A decorator is any `Clone + Send + 'static` type implementing
//! [`Decorator`]. Each of its two methods is optional; leaving one out keeps
//! the default identification header (`Beast/<version>`) for that message
//! kind.

pub mod config;
pub mod decorator;
pub mod http;
pub mod observability;

pub use crate::config::{ConfiguredDecorator, HandshakeConfig};
pub use crate::decorator::{Decorator, DecoratorHandle, DefaultDecorator};
pub use crate::http::{HandshakeError, RequestType, ResponseType};
