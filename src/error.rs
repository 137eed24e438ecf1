//! Probe error taxonomy.
//!
//! # Failure Kinds
//! - Trust store: the platform did not supply a usable root set (fatal)
//! - Client setup: the TLS/HTTP client could not be built (fatal)
//! - Request: DNS, connect, TLS handshake or timeout, after the fallback
//! - Status: a response arrived but its code is outside the accepted range

use reqwest::{Method, StatusCode};
use thiserror::Error;

use crate::net::tls::TrustStoreError;

/// Coarse classification of a probe failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    TrustStore,
    ClientSetup,
    Request,
    Status,
}

impl FailureKind {
    /// Process exit code used by the `net-probe` binary.
    pub fn exit_code(self) -> u8 {
        match self {
            FailureKind::TrustStore | FailureKind::ClientSetup => 3,
            FailureKind::Request => 4,
            FailureKind::Status => 5,
        }
    }
}

/// Error returned by a failed probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("system trust store unavailable: {0}")]
    TrustStore(#[from] TrustStoreError),

    #[error("failed to build HTTPS client: {0}")]
    ClientSetup(String),

    #[error("TLS/HTTPS request failed ({method}): {cause}")]
    Request {
        method: Method,
        cause: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status: {status}")]
    UnexpectedStatus { method: Method, status: StatusCode },
}

impl ProbeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::TrustStore(_) => FailureKind::TrustStore,
            ProbeError::ClientSetup(_) => FailureKind::ClientSetup,
            ProbeError::Request { .. } => FailureKind::Request,
            ProbeError::UnexpectedStatus { .. } => FailureKind::Status,
        }
    }

    pub(crate) fn request(method: Method, source: reqwest::Error) -> Self {
        ProbeError::Request {
            method,
            cause: error_chain(&source),
            source,
        }
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
///
/// `reqwest::Error`'s own `Display` omits the transport cause, which is the
/// part worth reading in a failed probe.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and rustls sometimes repeat the inner message verbatim
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
