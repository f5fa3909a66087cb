//! The client facade: one method per remote operation.

use messari_api::types::{
    Asset, AssetListing, AssetMarketData, AssetMetrics, AssetWithMetrics, Market, MarketData,
    NewsArticle, QueryResult,
};
use messari_api::{
    build_endpoint, error_message_for, FieldSelection, HttpTransport, Metric, PaginationOptions,
    Transport,
};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, Error};

/// Client for the Messari REST API.
///
/// Every method is a single GET. A failure the service reports comes back as
/// `Ok(QueryResult::Failure { .. })` carrying the code, its resolved message and
/// the original status metadata; only transport faults are `Err`.
///
/// The client holds no mutable state, so one instance can serve concurrent calls.
pub struct MessariClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl MessariClient<HttpTransport> {
    /// Creates a client for the production API. Fails if `api_key` is empty.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(api_key)?)
    }

    /// Creates a client from an already validated configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::with_base_url(config.base_url(), config.expose_api_key())?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> MessariClient<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request<R, U, F>(&self, endpoint: &str, reshape: F) -> Result<QueryResult<U>, Error>
    where
        R: DeserializeOwned + Send,
        F: FnOnce(R) -> U,
    {
        let result = self.transport.get::<R>(endpoint).await?;
        if let Some(code) = result.error_code() {
            tracing::debug!("{} resolved to service error {}", endpoint, code);
        }
        Ok(normalize(result).map(reshape))
    }

    /// Gets the basic metadata for an asset by ID, slug or symbol.
    ///
    /// With a non-empty `metrics` list the requested metric groups are merged
    /// into the result alongside the identity fields.
    pub async fn get_asset(
        &self,
        asset_key: &str,
        metrics: &[Metric],
    ) -> Result<QueryResult<AssetWithMetrics>, Error> {
        if metrics.is_empty() {
            let endpoint = build_endpoint(&format!("v1/assets/{}", asset_key), None);
            self.request::<Asset, _, _>(&endpoint, AssetWithMetrics::from)
                .await
        } else {
            let fields = FieldSelection::entity(metrics);
            let endpoint =
                build_endpoint(&format!("v1/assets/{}/metrics", asset_key), Some(&fields));
            self.request::<AssetWithMetrics, _, _>(&endpoint, |asset| asset)
                .await
        }
    }

    /// Gets every quantitative metric group for an asset.
    pub async fn get_asset_metrics(
        &self,
        asset_key: &str,
    ) -> Result<QueryResult<AssetMetrics>, Error> {
        let endpoint = build_endpoint(&format!("v1/assets/{}/metrics", asset_key), None);
        self.request::<AssetMetrics, _, _>(&endpoint, |metrics| metrics)
            .await
    }

    /// Gets the market data for an asset, unwrapped from its `market_data` field.
    pub async fn get_asset_market_data(
        &self,
        asset_key: &str,
    ) -> Result<QueryResult<MarketData>, Error> {
        let endpoint = build_endpoint(
            &format!("v1/assets/{}/metrics/market-data", asset_key),
            None,
        );
        self.request::<AssetMarketData, _, _>(&endpoint, |payload| payload.market_data)
            .await
    }

    /// Lists every market pair the service tracks, across exchanges.
    pub async fn list_markets(&self) -> Result<QueryResult<Vec<Market>>, Error> {
        let endpoint = build_endpoint("v1/markets", None);
        self.request::<Vec<Market>, _, _>(&endpoint, |markets| markets)
            .await
    }

    /// Lists assets, optionally paginated, with the given metric groups nested
    /// under each asset's `metrics`.
    pub async fn list_assets(
        &self,
        options: Option<&PaginationOptions>,
        metrics: &[Metric],
    ) -> Result<QueryResult<Vec<AssetListing>>, Error> {
        let fields = (!metrics.is_empty()).then(|| FieldSelection::collection(metrics));
        let query = (options.copied(), fields);
        let endpoint = build_endpoint("v2/assets", Some(&query));
        self.request::<Vec<AssetListing>, _, _>(&endpoint, |assets| assets)
            .await
    }

    /// Lists the latest news and research across all assets.
    pub async fn list_news(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<QueryResult<Vec<NewsArticle>>, Error> {
        let endpoint = build_endpoint("v1/news", Some(&options.copied()));
        self.request::<Vec<NewsArticle>, _, _>(&endpoint, |news| news)
            .await
    }

    /// Lists the latest news and research for one asset.
    pub async fn list_asset_news(
        &self,
        asset_key: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<QueryResult<Vec<NewsArticle>>, Error> {
        let endpoint = build_endpoint(
            &format!("v1/news/{}", asset_key),
            Some(&options.copied()),
        );
        self.request::<Vec<NewsArticle>, _, _>(&endpoint, |news| news)
            .await
    }
}

/// Resolves a failure's message through the error-code table so that every
/// transport converges on the same failure contract. Status metadata is kept.
fn normalize<R>(result: QueryResult<R>) -> QueryResult<R> {
    match result {
        QueryResult::Failure {
            status,
            error_code,
            ..
        } => QueryResult::Failure {
            status,
            error_code,
            error_message: error_message_for(error_code).to_string(),
        },
        success => success,
    }
}

#[cfg(test)]
mod tests {
    use messari_api::types::Status;

    use super::*;

    fn status() -> Status {
        Status {
            timestamp: "2021-09-14T12:00:00Z".parse().unwrap(),
            elapsed: Some(4),
        }
    }

    #[test]
    fn normalize_resolves_message_and_keeps_status() {
        let raw: QueryResult<()> = QueryResult::Failure {
            status: status(),
            error_code: 403,
            error_message: "Forbidden".to_string(),
        };
        assert_eq!(
            normalize(raw),
            QueryResult::Failure {
                status: status(),
                error_code: 403,
                error_message: "Forbidden (authorization)".to_string(),
            }
        );
    }

    #[test]
    fn normalize_leaves_success_alone() {
        let ok = QueryResult::Success {
            status: status(),
            data: 7u8,
        };
        assert_eq!(normalize(ok.clone()), ok);
    }
}
