//! Vendor OCR client subsystem
//!
//! Handles the OAuth2 client-credentials token exchange, the in-memory
//! token cache, and the forwarding call to the vendor OCR endpoint.

mod client;
mod token;
mod types;

pub use client::OcrClient;
pub use token::{CachedToken, TokenCache};
pub use types::{OcrError, OcrRequest, TokenResponse};
