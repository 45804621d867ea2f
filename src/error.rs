//! Error taxonomy for the client core.
//!
//! Every variant is recovered where it happens: a poll tick is skipped, a
//! mode-change request is dropped. Nothing here reaches the end user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("counting service returned status {status}")]
    Service { status: u16 },
    #[error("display element #{key} is not mounted")]
    BindingAbsent { key: String },
}

impl ClientError {
    /// True for failures that mean the backend is unreachable or not ready yet.
    pub fn is_backend_unavailable(&self) -> bool {
        !matches!(self, ClientError::BindingAbsent { .. })
    }
}
