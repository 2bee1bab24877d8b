//! Remote analysis client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` where an endpoint
//! exists, canned fixtures behind the same async seam where one does not.
//! Server-side (SSR): stubs returning errors since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function validates its payload synchronously; an empty request is
//! rejected with `ApiError::EmptyInput` and never reaches the network. The
//! caller collapses all failures into one notification and resets to idle —
//! nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::mock;
use crate::net::types::{
    AnalysisRequest, Credentials, DocumentReport, PhishingReport,
};

/// Phishing-model lab host; there is no deployed service yet.
const PREDICT_ENDPOINT: &str = "http://192.168.150.126:8080/predict";
/// Auth lab host; there is no deployed service yet.
const SIGNIN_ENDPOINT: &str = "http://192.168.102.122:8000/signin";

/// Analyze an uploaded document.
///
/// The `/upload` contract is unsettled, so the canned report stands in
/// behind the latency a real analysis would have.
///
/// # Errors
///
/// `EmptyInput` for a missing or mismatched payload.
pub async fn analyze_document(request: &AnalysisRequest) -> Result<DocumentReport, ApiError> {
    let AnalysisRequest::Document { .. } = request else {
        return Err(ApiError::EmptyInput);
    };
    if request.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    mock::delay(mock::ANALYSIS_DELAY_MS).await;
    Ok(mock::document_report())
}

/// Ask a follow-up question about the analyzed document.
///
/// Returns the answer text, substituting a fallback string when the
/// response carries no usable answer field.
///
/// # Errors
///
/// `EmptyInput` for a blank or mismatched payload.
pub async fn ask_question(request: &AnalysisRequest) -> Result<String, ApiError> {
    let AnalysisRequest::Question(question) = request else {
        return Err(ApiError::EmptyInput);
    };
    if request.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    mock::delay(mock::ANSWER_DELAY_MS).await;
    Ok(mock::answer_for(question).into_answer())
}

/// Scan free-form text for fake-content markers.
///
/// # Errors
///
/// `EmptyInput` for a blank or mismatched payload.
pub async fn scan_text(
    request: &AnalysisRequest,
) -> Result<crate::net::types::FakeReport, ApiError> {
    let AnalysisRequest::Text(text) = request else {
        return Err(ApiError::EmptyInput);
    };
    if request.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    mock::delay(mock::ANSWER_DELAY_MS).await;
    Ok(mock::fake_report(text))
}

/// Check a URL against the phishing model via `POST /predict`.
///
/// Expects the structured JSON report shape; the caller should have
/// normalized the URL with [`normalize_url`] first.
///
/// # Errors
///
/// `EmptyInput` for a blank payload, `Network`/`Status`/`Decode` for a
/// failed round trip.
pub async fn check_url(request: &AnalysisRequest) -> Result<PhishingReport, ApiError> {
    let AnalysisRequest::Url(url) = request else {
        return Err(ApiError::EmptyInput);
    };
    if request.is_empty() {
        return Err(ApiError::EmptyInput);
    }

    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PREDICT_ENDPOINT)
            .json(&serde_json::json!({ "url": url }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<PhishingReport>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Sign in via `POST /signin`. The result is honored: a failed request is
/// a failed sign-in, not a simulated success.
///
/// # Errors
///
/// `EmptyInput` for blank credentials, `Network`/`Status` otherwise.
pub async fn sign_in(credentials: &Credentials) -> Result<(), ApiError> {
    if credentials.email.trim().is_empty() || credentials.password.is_empty() {
        return Err(ApiError::EmptyInput);
    }

    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Register a new account. No endpoint exists; succeeds after the mock
/// auth latency.
///
/// # Errors
///
/// `EmptyInput` when any field is blank.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    mock::delay(mock::AUTH_DELAY_MS).await;
    Ok(())
}

/// Validate and normalize a user-entered URL, defaulting the scheme to
/// `http://` when absent.
///
/// # Errors
///
/// `EmptyInput` for a blank input, `InvalidUrl` when it does not parse.
pub fn normalize_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("http://{trimmed}")
    };
    let parsed = url::Url::parse(&candidate).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    Ok(parsed.into())
}
