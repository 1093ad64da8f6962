//! OCR proxy types

use serde::Deserialize;

/// Inbound OCR request
///
/// The image is a base64 (or URL-encoded) payload supplied by the caller
/// and forwarded to the vendor untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrRequest {
    #[serde(default)]
    pub image: String,
}

/// Vendor token-endpoint reply
///
/// A reply without `access_token` counts as a failed credential exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
}

/// OCR proxy error types
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Missing image data")]
    MissingImage,

    #[error("Failed to obtain access token")]
    CredentialExchange,

    #[error("OCR request failed with status {0}")]
    UpstreamStatus(u16),

    #[error("{message}")]
    UpstreamApi { code: i64, message: String },

    #[error("Vendor request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl OcrError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::MissingImage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
