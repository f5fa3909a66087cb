//! Asset identity and the shapes that combine it with metric groups.

use serde::{Deserialize, Serialize};

use super::metrics::{MarketData, Metrics};

/// Identity fields shared by every asset payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Asset {
    /// Service-wide UUID.
    pub id: String,
    pub serial_id: i64,
    /// Ticker symbol. Some listed assets have none.
    pub symbol: Option<String>,
    pub name: String,
    pub slug: String,
}

/// Asset identity with metric groups at the top level, as returned by
/// `v1/assets/{key}/metrics`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssetWithMetrics {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// The full metrics bundle for one asset.
pub type AssetMetrics = AssetWithMetrics;

/// Asset identity with metric groups nested under `metrics`, as returned by `v2/assets`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssetListing {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(default)]
    pub metrics: Metrics,
}

/// Payload of `v1/assets/{key}/metrics/market-data`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssetMarketData {
    #[serde(flatten)]
    pub asset: Asset,
    pub market_data: MarketData,
}

impl From<Asset> for AssetWithMetrics {
    fn from(asset: Asset) -> Self {
        Self {
            asset,
            metrics: Metrics::default(),
        }
    }
}
