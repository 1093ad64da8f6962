//! Vendor OCR client
//!
//! Talks to the Baidu OCR REST API: an OAuth2 client-credentials token
//! exchange followed by the recognition call itself. The recognition result
//! is relayed verbatim as JSON; this client does no parsing of the
//! recognized text.

use std::time::Duration;

use reqwest::header;
use serde_json::Value;

use super::token::TokenCache;
use super::types::{OcrError, TokenResponse};
use crate::config::Config;

/// Client for the vendor OCR service
pub struct OcrClient {
    http: reqwest::Client,
    config: Config,
    tokens: TokenCache,
}

impl OcrClient {
    /// Create a new client with an empty token cache
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens: TokenCache::new(),
        }
    }

    /// Return a valid access token
    ///
    /// The cached token is reused while it is within its safety-margined
    /// lifetime; otherwise a client-credentials exchange fetches a new one.
    /// A failed exchange leaves the existing cache entry untouched.
    pub async fn access_token(&self) -> Result<String, OcrError> {
        if let Some(token) = self.tokens.get() {
            return Ok(token);
        }

        tracing::debug!("Cached token missing or expired, requesting a new one");

        let response = self
            .http
            .get(&self.config.token_url)
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.api_key.as_str()),
                ("client_secret", self.config.secret_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Token exchange request failed: {}", e);
                OcrError::CredentialExchange
            })?;

        let data: TokenResponse = response.json().await.map_err(|e| {
            tracing::warn!("Token endpoint returned an unreadable body: {}", e);
            OcrError::CredentialExchange
        })?;

        let token = data.access_token.ok_or(OcrError::CredentialExchange)?;
        let lifetime = Duration::from_secs(data.expires_in.unwrap_or(0));
        self.tokens
            .store(token.clone(), lifetime, self.config.token_safety_margin());

        tracing::info!("Obtained new vendor access token (lifetime {:?})", lifetime);
        Ok(token)
    }

    /// Forward one image payload to the vendor recognition endpoint
    ///
    /// The image goes out as the sole form field, percent-encoded, with the
    /// access token as a query parameter. A vendor `error_code` inside a
    /// 2xx body is surfaced as an error carrying the vendor's message.
    pub async fn recognize(&self, image: &str) -> Result<Value, OcrError> {
        let token = self.access_token().await?;

        let body = format!("image={}", urlencoding::encode(image));
        let response = self
            .http
            .post(&self.config.ocr_url)
            .query(&[("access_token", token.as_str())])
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OcrError::UpstreamStatus(status.as_u16()));
        }

        let result: Value = response.json().await?;
        if let Some(code) = result.get("error_code") {
            let message = result
                .get("error_msg")
                .and_then(Value::as_str)
                .unwrap_or("OCR request failed")
                .to_string();
            return Err(OcrError::UpstreamApi {
                code: code.as_i64().unwrap_or(-1),
                message,
            });
        }

        Ok(result)
    }
}
