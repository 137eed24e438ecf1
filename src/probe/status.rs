//! Status code classification.

use reqwest::StatusCode;

/// Half-open range of acceptable status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRange {
    pub min: u16,
    pub max_exclusive: u16,
}

/// Any answer from 200 up to, not including, 500.
pub const ACCEPTED_STATUS: StatusRange = StatusRange {
    min: 200,
    max_exclusive: 500,
};

impl StatusRange {
    pub fn contains(&self, status: StatusCode) -> bool {
        (self.min..self.max_exclusive).contains(&status.as_u16())
    }
}

/// Whether a HEAD response says the server does not support HEAD.
pub fn rejects_head(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
    )
}
