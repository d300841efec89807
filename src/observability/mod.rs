//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! decorator, config and http modules emit tracing events
//!     → logging.rs (subscriber, filter, formatting)
//! ```

pub mod logging;

pub use logging::init_logging;
