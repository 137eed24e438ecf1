//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Platform trust store
//!     → tls.rs (load & parse system roots)
//!     → client.rs (rustls config + reqwest client with timeouts)
//!     → probe (HEAD / GET attempts)
//! ```
//!
//! # Design Decisions
//! - Only the platform roots are trusted; verification is never disabled
//! - One client per probe run, no idle connections kept between runs
//! - Timeouts are enforced by the client, not by wrapping futures

pub mod client;
pub mod tls;

pub use client::build_client;
pub use tls::{load_system_roots, SystemRoots, TrustStoreError};
