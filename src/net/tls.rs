//! System trust store loading.

use rustls::pki_types::CertificateDer;
use rustls::RootCertStore;
use thiserror::Error;

/// Error raised when the platform cannot supply a usable root set.
#[derive(Debug, Error)]
pub enum TrustStoreError {
    #[error("failed to load platform certificates: {0}")]
    Load(String),

    #[error("no usable certificates in platform store ({skipped} unparsable)")]
    Empty { skipped: usize },
}

/// Root certificates retrieved from the operating system.
#[derive(Debug, Clone)]
pub struct SystemRoots {
    pub store: RootCertStore,
    pub loaded: usize,
    pub skipped: usize,
}

/// Load the platform's trusted CA set.
///
/// Honours `SSL_CERT_FILE` / `SSL_CERT_DIR` the way the platform's own
/// OpenSSL would. Partial load errors are tolerated as long as at least one
/// certificate parses.
pub fn load_system_roots() -> Result<SystemRoots, TrustStoreError> {
    let result = rustls_native_certs::load_native_certs();
    let errors = result.errors.iter().map(|e| e.to_string()).collect();
    build_root_store(result.certs, errors)
}

/// Build a root store from what the platform returned.
pub fn build_root_store(
    certs: Vec<CertificateDer<'static>>,
    errors: Vec<String>,
) -> Result<SystemRoots, TrustStoreError> {
    if certs.is_empty() && !errors.is_empty() {
        return Err(TrustStoreError::Load(errors.join("; ")));
    }

    for error in &errors {
        tracing::warn!(error = %error, "Partial failure reading platform certificates");
    }

    let mut store = RootCertStore::empty();
    let (loaded, skipped) = store.add_parsable_certificates(certs);

    if loaded == 0 {
        return Err(TrustStoreError::Empty { skipped });
    }
    if skipped > 0 {
        tracing::warn!(skipped, "Ignored unparsable platform certificates");
    }

    tracing::debug!(loaded, "System trust store loaded");
    Ok(SystemRoots { store, loaded, skipped })
}
