//! Probe results.

use std::fmt;
use std::time::Duration;

use reqwest::{Method, StatusCode};

/// What a single request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    Status(StatusCode),
    Failed(String),
}

/// One request made during a probe run.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub method: Method,
    pub elapsed: Duration,
    pub result: AttemptResult,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            AttemptResult::Status(status) => {
                write!(f, "{} -> {} in {:?}", self.method, status, self.elapsed)
            }
            AttemptResult::Failed(cause) => {
                write!(f, "{} failed in {:?}: {}", self.method, self.elapsed, cause)
            }
        }
    }
}

/// Successful probe run.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub target: String,
    /// Method of the request whose status was accepted.
    pub method: Method,
    pub status: StatusCode,
    pub attempts: Vec<Attempt>,
    pub elapsed: Duration,
}

impl ProbeReport {
    pub fn fell_back(&self) -> bool {
        self.attempts.len() > 1
    }
}
