// SPDX-License-Identifier: MPL-2.0
//! Submission client: translates the form state into the backend's wire
//! format and interprets the response as either an error or video bytes.

mod client;
mod request;

pub use client::{check_health, submit, HEALTH_PATH, RENDER_PATH};
pub use request::{DiagramPayload, RenderRequest};

use std::fmt;

/// Ways a submission can fail.
///
/// All variants collapse into the single error panel on the form screen;
/// the variant only selects the localized message and the technical details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request could not complete (DNS, refused connection, reset, ...).
    Network(String),
    /// The backend's failure convention: a `content-type` header that is
    /// present but empty.
    BackendSignaled,
    /// The backend answered with a non-success HTTP status.
    Status(u16),
    /// The payload could not be serialized.
    Payload(String),
}

impl SubmissionError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmissionError::Network(_) => "error-submit-network",
            SubmissionError::BackendSignaled => "error-submit-backend",
            SubmissionError::Status(_) => "error-submit-status",
            SubmissionError::Payload(_) => "error-submit-payload",
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Network(msg) => write!(f, "network failure: {}", msg),
            SubmissionError::BackendSignaled => {
                write!(f, "backend signaled a rendering failure")
            }
            SubmissionError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            SubmissionError::Payload(msg) => write!(f, "payload serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for SubmissionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_distinct_i18n_key() {
        let keys = [
            SubmissionError::Network("x".into()).i18n_key(),
            SubmissionError::BackendSignaled.i18n_key(),
            SubmissionError::Status(500).i18n_key(),
            SubmissionError::Payload("x".into()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_mentions_the_status_code() {
        let err = SubmissionError::Status(502);
        assert!(format!("{}", err).contains("502"));
    }
}
