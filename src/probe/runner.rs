//! HEAD-then-GET probe execution.

use std::time::Instant;

use reqwest::{Client, Method, Response, StatusCode};

use crate::config::ProbeConfig;
use crate::error::{error_chain, ProbeError};
use crate::net::{build_client, load_system_roots, SystemRoots};
use crate::probe::outcome::{Attempt, AttemptResult, ProbeReport};
use crate::probe::status::{rejects_head, ACCEPTED_STATUS};

/// A configured, ready-to-run connectivity probe.
pub struct Probe {
    client: Client,
    target: String,
}

impl Probe {
    /// Build a probe that trusts the platform's CA set.
    ///
    /// Fails immediately if the trust store cannot be read; no request is
    /// made in that case.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let roots = load_system_roots()?;
        tracing::debug!(loaded = roots.loaded, skipped = roots.skipped, "Trust store ready");
        Self::with_roots(config, roots)
    }

    /// Build a probe over an explicit root set.
    pub fn with_roots(config: &ProbeConfig, roots: SystemRoots) -> Result<Self, ProbeError> {
        if config.target.url.starts_with("http://") {
            tracing::warn!(target_url = %config.target.url, "Target uses plain HTTP; no TLS will be negotiated");
        }
        let client = build_client(config, roots)?;
        Ok(Self {
            client,
            target: config.target.url.clone(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Run the probe: one HEAD, and one GET only if the HEAD fails or is
    /// rejected by the server.
    pub async fn run(&self) -> Result<ProbeReport, ProbeError> {
        let started = Instant::now();
        let mut attempts = Vec::with_capacity(2);

        let (method, status) = match self.attempt(Method::HEAD, &mut attempts).await {
            Ok(status) if !rejects_head(status) => (Method::HEAD, status),
            Ok(status) => {
                tracing::info!(target_url = %self.target, status = %status, "Server rejected HEAD, falling back to GET");
                self.fallback(&mut attempts).await?
            }
            Err(e) => {
                tracing::warn!(target_url = %self.target, error = %error_chain(&e), "HEAD failed, falling back to GET");
                self.fallback(&mut attempts).await?
            }
        };

        if !ACCEPTED_STATUS.contains(status) {
            tracing::warn!(target_url = %self.target, method = %method, status = %status, "Probe failed: unacceptable status");
            return Err(ProbeError::UnexpectedStatus { method, status });
        }

        let report = ProbeReport {
            target: self.target.clone(),
            method,
            status,
            attempts,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            target_url = %report.target,
            method = %report.method,
            status = %report.status,
            attempts = report.attempts.len(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Probe passed"
        );
        Ok(report)
    }

    async fn fallback(&self, attempts: &mut Vec<Attempt>) -> Result<(Method, StatusCode), ProbeError> {
        match self.attempt(Method::GET, attempts).await {
            Ok(status) => Ok((Method::GET, status)),
            Err(e) => {
                let err = ProbeError::request(Method::GET, e);
                tracing::warn!(target_url = %self.target, error = %err, "Probe failed: request error");
                Err(err)
            }
        }
    }

    async fn attempt(
        &self,
        method: Method,
        attempts: &mut Vec<Attempt>,
    ) -> Result<StatusCode, reqwest::Error> {
        let started = Instant::now();
        let result = match self.client.request(method.clone(), &self.target).send().await {
            Ok(response) => {
                let status = response.status();
                release(response).await;
                Ok(status)
            }
            Err(e) => Err(e),
        };

        let attempt = Attempt {
            method,
            elapsed: started.elapsed(),
            result: match &result {
                Ok(status) => AttemptResult::Status(*status),
                Err(e) => AttemptResult::Failed(error_chain(e)),
            },
        };
        tracing::debug!(attempt = %attempt, "Probe attempt finished");
        attempts.push(attempt);

        result
    }
}

/// Drain the body so the connection is released cleanly, then drop it.
///
/// A read error here does not change the outcome: the status line has
/// already been received.
async fn release(mut response: Response) {
    let mut drained = 0usize;
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => drained += chunk.len(),
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, drained, "Stopped draining response body");
                break;
            }
        }
    }
    tracing::trace!(drained, "Response body released");
}
