//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / net / probe
//!     → logging.rs (structured log events, stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
