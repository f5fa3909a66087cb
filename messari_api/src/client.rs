//! HTTP transport for the Messari REST API.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    transport::Transport,
    types::{Envelope, QueryResult},
    Error,
};

/// Production base URL. Endpoints are appended to it verbatim.
pub const DEFAULT_BASE_URL: &str = "https://data.messari.io/api/";

/// Header that carries the API key on every request.
pub const API_KEY_HEADER: &str = "x-messari-api-key";

const USER_AGENT: &str = concat!("messari-api/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] that performs one GET per call with `reqwest`.
///
/// No retries and no timeout beyond the `reqwest` default. The underlying
/// connection pool is shared by every call made through this value.
pub struct HttpTransport {
    client: reqwest::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    api_key: SecretString,
}

impl HttpTransport {
    /// Creates a transport pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a transport with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            base_api_url: base_url.to_string(),
            api_key: SecretString::from(api_key.to_string()),
        })
    }

    fn get_url(&self, endpoint: &str) -> Result<Url, Error> {
        let base = if self.base_api_url.ends_with('/') {
            self.base_api_url.clone()
        } else {
            format!("{}/", self.base_api_url)
        };
        Url::parse(format!("{}{}", base, endpoint).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidEndpoint(endpoint.to_string())
        })
    }

    async fn fetch<T>(&self, endpoint: &str) -> Result<QueryResult<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(endpoint)?;
        tracing::debug!("GET {}", endpoint);
        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        // Error envelopes arrive with a non-2xx status, so decode before looking at it.
        match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => envelope.into_query_result::<T>(),
            Err(e) if !status.is_success() => {
                let snippet = truncate_body(&body);
                tracing::error!(
                    "Request failed with status {} ({}): {}",
                    status,
                    e,
                    snippet
                );
                Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                })
            }
            Err(e) => {
                let snippet = truncate_body(&body);
                tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
                Err(Error::Decode(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_api_url", &self.base_api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Transport for HttpTransport {
    async fn get<T>(&self, endpoint: &str) -> Result<QueryResult<T>, Error>
    where
        T: DeserializeOwned + Send,
    {
        self.fetch(endpoint).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
