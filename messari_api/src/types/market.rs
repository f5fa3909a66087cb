use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trading pair on one exchange, as returned by `v1/markets`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Market {
    pub id: String,
    pub exchange_id: String,
    pub base_asset_id: String,
    pub quote_asset_id: String,
    pub trade_start: Option<DateTime<Utc>>,
    pub trade_end: Option<DateTime<Utc>>,
    pub version: i64,
    /// Whether the service leaves this market out of its reference price.
    pub excluded_from_price: bool,
    pub exchange_name: String,
    pub exchange_slug: String,
    pub base_asset_symbol: String,
    pub quote_asset_symbol: String,
    /// Display pair, e.g. `BTC-USD`.
    pub pair: String,
    pub price_usd: Option<f64>,
    pub vwap_weight: f64,
    pub volume_last_24_hours: Option<f64>,
    pub has_real_volume: bool,
    pub deviation_from_vwap_percent: Option<f64>,
    pub last_trade_at: Option<DateTime<Utc>>,
}
