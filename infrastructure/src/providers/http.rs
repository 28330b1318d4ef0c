//! Shared HTTP plumbing for provider adapters.
//!
//! Every adapter posts one JSON body and decodes one JSON envelope. The
//! status and transport mapping into [`ProviderError`] lives here so all
//! vendors fail the same way.

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use triage_application::ProviderError;
use triage_domain::util::preview;

/// Sampling temperature for classification calls.
pub(crate) const TEMPERATURE: f32 = 0.1;

/// Build the client shared by one adapter.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("feedback-triage/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send `body` and decode the response envelope as `R`.
pub(crate) async fn post_json<B, R>(
    request: RequestBuilder,
    body: &B,
    timeout: Duration,
) -> Result<R, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request
        .json(body)
        .send()
        .await
        .map_err(|e| map_transport(e, timeout))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| map_transport(e, timeout))?;

    if !status.is_success() {
        return Err(map_status(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| {
        ProviderError::MalformedRequest(format!(
            "Could not decode provider response ({}): {}",
            e,
            preview(&text, 200)
        ))
    })
}

pub(crate) fn map_status(status: StatusCode, body: &str) -> ProviderError {
    let detail = format!("HTTP {}: {}", status.as_u16(), preview(body.trim(), 200));
    match status.as_u16() {
        401 | 403 => ProviderError::AuthFailure(detail),
        429 => ProviderError::RateLimited(detail),
        400 | 404 | 422 => ProviderError::MalformedRequest(detail),
        _ => ProviderError::NetworkError(detail),
    }
}

pub(crate) fn map_transport(err: reqwest::Error, timeout: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout)
    } else {
        // without_url keeps query strings out of error text
        ProviderError::NetworkError(err.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_application::ProviderErrorKind;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (401, ProviderErrorKind::AuthFailure),
            (403, ProviderErrorKind::AuthFailure),
            (429, ProviderErrorKind::RateLimited),
            (400, ProviderErrorKind::MalformedRequest),
            (404, ProviderErrorKind::MalformedRequest),
            (422, ProviderErrorKind::MalformedRequest),
            (500, ProviderErrorKind::NetworkError),
            (503, ProviderErrorKind::NetworkError),
        ];
        for (code, kind) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(map_status(status, "body").kind(), kind, "status {code}");
        }
    }

    #[test]
    fn test_status_detail_is_truncated() {
        let body = "x".repeat(1000);
        let err = map_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert!(err.to_string().len() < 300);
        assert!(err.to_string().contains("HTTP 500"));
    }
}
