//! HTTPS client construction.

use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::Client;

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::net::tls::SystemRoots;

/// Build the client used for both probe attempts.
///
/// The TLS stack trusts exactly `roots`; no bundled anchors are added and
/// certificate verification stays on. Redirects are not followed so a
/// single attempt is a single request.
pub fn build_client(config: &ProbeConfig, roots: SystemRoots) -> Result<Client, ProbeError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let tls = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| ProbeError::ClientSetup(e.to_string()))?
        .with_root_certificates(roots.store)
        .with_no_client_auth();

    let request_timeout = config.timeouts.request();
    let connect_timeout = config.timeouts.connect().min(request_timeout);

    Client::builder()
        .use_preconfigured_tls(tls)
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.client.user_agent.as_str())
        .redirect(Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .map_err(|e| ProbeError::ClientSetup(crate::error::error_chain(&e)))
}
