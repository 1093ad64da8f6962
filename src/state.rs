//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::ocr::OcrClient;

/// Shared application state
///
/// Cloned per request; the inner data (including the vendor client and its
/// token cache) lives behind one `Arc` for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    ocr: OcrClient,
}

impl AppState {
    /// Create a new application state from a loaded configuration
    pub fn new(config: Config) -> Self {
        let ocr = OcrClient::new(config.clone());
        Self {
            inner: Arc::new(AppStateInner { config, ocr }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the vendor OCR client
    pub fn ocr(&self) -> &OcrClient {
        &self.inner.ocr
    }
}
