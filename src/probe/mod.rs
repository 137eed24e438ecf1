//! Connectivity probe.
//!
//! # Data Flow
//! ```text
//! ProbeConfig
//!     → net::tls (system roots; failure is fatal)
//!     → net::client (HTTPS client, per-request timeout)
//!     → runner.rs: HEAD
//!         → ok and HEAD accepted      → classify
//!         → error or HEAD rejected    → GET (once) → classify
//!     → status.rs (200 <= code < 500)
//!     → outcome.rs (ProbeReport | ProbeError)
//! ```
//!
//! # Design Decisions
//! - At most two requests per run; the fallback is not a retry loop
//! - 405/501 on HEAD count as the server rejecting the method
//! - Bodies are drained and dropped before the status is classified
//! - 3xx and 4xx are reachable answers and pass

pub mod outcome;
pub mod runner;
pub mod status;

pub use outcome::{Attempt, AttemptResult, ProbeReport};
pub use runner::Probe;
pub use status::{rejects_head, StatusRange, ACCEPTED_STATUS};
