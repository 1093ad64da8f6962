//! Service configuration
//!
//! All settings come from environment variables, loaded via dotenvy in main.
//! The vendor endpoint URLs are configurable so tests can point the client
//! at a mock server; the defaults are the production Baidu endpoints.

use std::env;
use std::time::Duration;

/// Default vendor OAuth2 token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://aip.baidubce.com/oauth/2.0/token";

/// Default vendor OCR endpoint (general basic recognition)
pub const DEFAULT_OCR_URL: &str = "https://aip.baidubce.com/rest/2.0/ocr/v1/general_basic";

const DEFAULT_TOKEN_SAFETY_MARGIN_SECS: u64 = 60;
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth2 client id for the vendor token exchange
    pub api_key: String,
    /// OAuth2 client secret
    pub secret_key: String,
    /// Vendor token endpoint
    pub token_url: String,
    /// Vendor OCR endpoint
    pub ocr_url: String,
    /// Subtracted from the declared token lifetime before the cached
    /// token counts as expired, so a token never expires mid-flight
    pub token_safety_margin_secs: u64,
    /// Include error detail in failure responses (development only)
    pub expose_error_detail: bool,
    /// Port the server binds to
    pub server_port: u16,
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require("BAIDU_API_KEY")?,
            secret_key: require("BAIDU_SECRET_KEY")?,
            token_url: env::var("OCR_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            ocr_url: env::var("OCR_API_URL").unwrap_or_else(|_| DEFAULT_OCR_URL.to_string()),
            token_safety_margin_secs: env::var("TOKEN_SAFETY_MARGIN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_SAFETY_MARGIN_SECS),
            expose_error_detail: env::var("EXPOSE_ERROR_DETAIL")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Safety margin as a [`Duration`]
    pub fn token_safety_margin(&self) -> Duration {
        Duration::from_secs(self.token_safety_margin_secs)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_truthy_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_safety_margin_duration() {
        let config = Config {
            api_key: "k".to_string(),
            secret_key: "s".to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            ocr_url: DEFAULT_OCR_URL.to_string(),
            token_safety_margin_secs: 60,
            expose_error_detail: false,
            server_port: DEFAULT_SERVER_PORT,
        };
        assert_eq!(config.token_safety_margin(), Duration::from_secs(60));
    }

    // Environment access is process-global, so everything touching the real
    // env lives in a single test.
    #[test]
    fn test_from_env_requires_credentials() {
        env::remove_var("BAIDU_API_KEY");
        env::remove_var("BAIDU_SECRET_KEY");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("BAIDU_API_KEY"))
        ));

        env::set_var("BAIDU_API_KEY", "key");
        env::set_var("BAIDU_SECRET_KEY", "secret");
        let config = Config::from_env().expect("config should load");
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.ocr_url, DEFAULT_OCR_URL);
        assert_eq!(config.token_safety_margin_secs, 60);
        assert!(!config.expose_error_detail);

        env::remove_var("BAIDU_API_KEY");
        env::remove_var("BAIDU_SECRET_KEY");
    }
}
