//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, header compilation)
//!     → decorator.rs (ConfiguredDecorator)
//!     → DecoratorHandle
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs; an empty file
//!   reproduces the library default identification
//! - Validation separates syntactic (serde) from semantic checks

pub mod decorator;
pub mod loader;
pub mod schema;
pub mod validation;

pub use decorator::ConfiguredDecorator;
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DecoratorConfig, HandshakeConfig, IdentityConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
