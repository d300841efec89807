//! Handshake decoration subsystem.
//!
//! # Data Flow
//! ```text
//! caller value (impl Decorator, closure, config)
//!     → adapter.rs (monomorphized dispatch, default fallback)
//!     → handle.rs (type-erased owner, clone-on-copy)
//!     → apply_request / apply_response from the handshake
//! ```
//!
//! # Design Decisions
//! - Capability is decided by which `Decorator` methods a type overrides,
//!   so it is fixed at compile time per type and per message kind
//! - The handle is never empty; `Default` wraps `DefaultDecorator`
//! - Clones never share decorator state

pub mod adapter;
pub mod closure;
pub mod handle;
pub mod identity;

pub use adapter::{Decorator, DecoratorAdapter, ErasedDecorator};
pub use closure::{on_both, on_request, on_response, OnBoth, OnRequest, OnResponse};
pub use handle::DecoratorHandle;
pub use identity::{DefaultDecorator, Identity, IdentityDecorator, IDENTIFICATION, PRODUCT_NAME, VERSION};
