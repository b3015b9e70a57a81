// SPDX-License-Identifier: MPL-2.0
//! HTTP layer of the submission client.
//!
//! The backend signals a rendering failure by answering with a `content-type`
//! header that is present but empty, not necessarily with an error status.
//! That convention is checked before the status code.

use super::{RenderRequest, SubmissionError};
use reqwest::header;

/// Path of the rendering endpoint, relative to the base URL.
pub const RENDER_PATH: &str = "test/";

/// Path of the backend health probe, relative to the base URL.
pub const HEALTH_PATH: &str = "health/";

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

fn client() -> Result<reqwest::Client, SubmissionError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("TikzMotion/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SubmissionError::Network(e.to_string()))
}

fn endpoint(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}

/// Posts the form snapshot and returns the rendered video bytes.
///
/// No retry is attempted and no timeout is enforced beyond the transport
/// defaults; the caller decides whether a completion is still current.
pub async fn submit(
    base_url: String,
    request: RenderRequest,
) -> Result<Vec<u8>, SubmissionError> {
    let body =
        serde_json::to_vec(&request).map_err(|e| SubmissionError::Payload(e.to_string()))?;

    tracing::info!(
        diagrams = request.diagrams.len(),
        bytes = body.len(),
        "submitting animation request"
    );

    let response = client()?
        .post(endpoint(&base_url, RENDER_PATH))
        .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
        .body(body)
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    if response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.is_empty())
    {
        tracing::warn!("backend signaled failure via empty content-type");
        return Err(SubmissionError::BackendSignaled);
    }

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "backend returned error status");
        return Err(SubmissionError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    tracing::info!(bytes = bytes.len(), "received rendered animation");
    Ok(bytes.to_vec())
}

/// Probes the backend's health endpoint.
pub async fn check_health(base_url: String) -> Result<(), SubmissionError> {
    let response = client()?
        .get(endpoint(&base_url, HEALTH_PATH))
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SubmissionError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_existing_slash() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000/", RENDER_PATH),
            "http://127.0.0.1:8000/test/"
        );
    }

    #[test]
    fn endpoint_inserts_missing_slash() {
        assert_eq!(
            endpoint("http://render.local:9000", HEALTH_PATH),
            "http://render.local:9000/health/"
        );
    }
}
