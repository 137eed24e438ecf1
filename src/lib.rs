//! HTTPS connectivity probe.
//!
//! Issues one HEAD request (falling back to one GET) against a target URL
//! using the platform trust store, and accepts any status in `200..500`.

pub mod config;
pub mod error;
pub mod net;
pub mod observability;
pub mod probe;

pub use config::ProbeConfig;
pub use error::{FailureKind, ProbeError};
pub use probe::{Probe, ProbeReport};
