//! Client configuration, validated once at construction.

use secrecy::{ExposeSecret, SecretString};

use crate::Error;

/// Environment variable read by [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "MESSARI_API_KEY";

/// API key and endpoint the client talks to. Immutable once built.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: SecretString,
    base_url: String,
}

impl ClientConfig {
    /// Validates `api_key` and targets the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: messari_api::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Reads the key from `MESSARI_API_KEY`, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, Error> {
        let _ = dotenvy::dotenv();
        match std::env::var(API_KEY_ENV) {
            Ok(api_key) => Self::new(api_key),
            Err(_) => Err(Error::MissingApiKey),
        }
    }

    /// Points the client at a different base URL. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exposes the key. Only the transport should need this.
    pub fn expose_api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
