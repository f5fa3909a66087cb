//! Metric groups an asset can carry. Every group is optional because callers
//! choose which ones the service returns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loosely structured groups whose keys vary by asset.
pub type MetricValues = HashMap<String, Option<f64>>;

/// All metric groups, keyed by their wire names.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_time_high: Option<AllTimeHigh>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_stats_24_hours: Option<BlockchainStats24Hours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_low: Option<CycleLow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_activity: Option<DeveloperActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_flows: Option<MetricValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketcap: Option<MarketCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data: Option<MarketData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data_liquidity: Option<MarketDataLiquidity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner_flows: Option<MinerFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mining_stats: Option<MiningStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc_data: Option<MiscData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_chain_data: Option<MetricValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reddit: Option<Reddit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_metrics: Option<RiskMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_by_year: Option<MetricValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_data: Option<RoiData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<Supply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply_activity: Option<MetricValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_sale_stats: Option<TokenSaleStats>,
}

/// Price and volume snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarketData {
    pub price_usd: Option<f64>,
    pub price_btc: Option<f64>,
    pub price_eth: Option<f64>,
    pub volume_last_24_hours: Option<f64>,
    /// Volume restricted to exchanges the service considers genuine.
    pub real_volume_last_24_hours: Option<f64>,
    pub percent_change_usd_last_1_hour: Option<f64>,
    pub percent_change_btc_last_1_hour: Option<f64>,
    pub percent_change_eth_last_1_hour: Option<f64>,
    pub percent_change_usd_last_24_hours: Option<f64>,
    pub percent_change_btc_last_24_hours: Option<f64>,
    pub percent_change_eth_last_24_hours: Option<f64>,
    #[serde(default)]
    pub ohlcv_last_1_hour: Option<Ohlcv>,
    #[serde(default)]
    pub ohlcv_last_24_hour: Option<Ohlcv>,
    #[serde(default)]
    pub last_trade_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ohlcv {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarketCap {
    pub rank: Option<i64>,
    pub marketcap_dominance_percent: Option<f64>,
    pub current_marketcap_usd: Option<f64>,
    pub liquid_marketcap_usd: Option<f64>,
    pub volume_turnover_last_24_hours_percent: Option<f64>,
    pub realized_marketcap_usd: Option<f64>,
    pub outstanding_marketcap_usd: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AllTimeHigh {
    pub price: Option<f64>,
    pub at: Option<DateTime<Utc>>,
    pub days_since: Option<i64>,
    pub percent_down: Option<f64>,
    /// Multiple the current price must grow by to reach the high again.
    pub breakeven_multiple: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CycleLow {
    pub price: Option<f64>,
    pub at: Option<DateTime<Utc>>,
    pub percent_up: Option<f64>,
    pub days_since: Option<i64>,
}

/// Return on investment over trailing windows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoiData {
    pub percent_change_last_1_week: Option<f64>,
    pub percent_change_last_1_month: Option<f64>,
    pub percent_change_last_3_months: Option<f64>,
    pub percent_change_last_1_year: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BlockchainStats24Hours {
    pub count_of_active_addresses: Option<f64>,
    pub transaction_volume: Option<f64>,
    pub adjusted_transaction_volume: Option<f64>,
    pub adjusted_nvt: Option<f64>,
    pub median_tx_value: Option<f64>,
    pub median_tx_fee: Option<f64>,
    pub count_of_tx: Option<f64>,
    pub count_of_payments: Option<f64>,
    pub new_issuance: Option<f64>,
    pub average_difficulty: Option<f64>,
    pub kilobytes_added: Option<f64>,
    pub count_of_blocks_added: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeveloperActivity {
    pub stars: Option<i64>,
    pub watchers: Option<i64>,
    pub commits_last_3_months: Option<i64>,
    pub commits_last_1_year: Option<i64>,
    pub lines_added_last_3_months: Option<i64>,
    pub lines_added_last_1_year: Option<i64>,
    pub lines_deleted_last_3_months: Option<i64>,
    pub lines_deleted_last_1_year: Option<i64>,
}

/// Order-book depth. The nested shapes vary by asset and are kept as raw JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarketDataLiquidity {
    pub clearing_prices_to_sell: Option<serde_json::Value>,
    pub marketcap: Option<serde_json::Value>,
    pub asset_bid_depth: Option<serde_json::Value>,
    pub usd_bid_depth: Option<serde_json::Value>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MinerFlows {
    pub supply_1hop_miners_usd: Option<f64>,
    pub supply_1hop_miners_native_units: Option<f64>,
    pub supply_miners_usd: Option<f64>,
    pub supply_miners_native_units: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MiningStats {
    pub mining_algo: Option<String>,
    pub network_hash_rate: Option<String>,
    pub available_on_nicehash_percent: Option<f64>,
    pub attack_appeal: Option<f64>,
    pub hash_rate: Option<f64>,
    pub hash_rate_30d_average: Option<f64>,
    pub mining_revenue_per_hash_usd: Option<f64>,
    pub mining_revenue_per_hash_native_units: Option<f64>,
    pub mining_revenue_per_hash_per_second_usd: Option<f64>,
    pub mining_revenue_per_hash_per_second_native_units: Option<f64>,
    pub mining_revenue_from_fees_percent_last_24_hours: Option<f64>,
    pub mining_revenue_native: Option<f64>,
    pub mining_revenue_usd: Option<f64>,
    pub mining_revenue_total: Option<f64>,
    pub average_difficulty: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MiscData {
    pub private_market_price_usd: Option<f64>,
    pub vladimir_club_cost: Option<f64>,
    pub btc_current_normalized_supply_price_usd: Option<f64>,
    pub btc_y2050_normalized_supply_price_usd: Option<f64>,
    pub asset_created_at: Option<String>,
    pub asset_age_days: Option<i64>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reddit {
    pub active_user_count: Option<i64>,
    pub subscribers: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RiskMetrics {
    pub sharpe_ratios: SharpeRatios,
    pub volatility_stats: VolatilityStats,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SharpeRatios {
    pub last_30_days: Option<f64>,
    pub last_90_days: Option<f64>,
    pub last_1_year: Option<f64>,
    pub last_3_years: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VolatilityStats {
    pub volatility_last_30_days: Option<f64>,
    pub volatility_last_90_days: Option<f64>,
    pub volatility_last_1_year: Option<f64>,
    pub volatility_last_3_years: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Supply {
    pub y_2050: Option<f64>,
    pub y_plus10: Option<f64>,
    pub y_2050_percent_issued: Option<f64>,
    pub annual_inflation_percent: Option<f64>,
    pub y_plus10_issued_percent: Option<f64>,
    pub liquid: Option<f64>,
    pub circulating: Option<f64>,
    pub stock_to_flow: Option<f64>,
    #[serde(default)]
    pub supply_revived_90d: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenSaleStats {
    pub sale_proceeds_usd: Option<f64>,
    pub sale_start_date: Option<String>,
    pub sale_end_date: Option<String>,
    pub roi_since_sale_usd_percent: Option<f64>,
    pub roi_since_sale_btc_percent: Option<f64>,
    pub roi_since_sale_eth_percent: Option<f64>,
}
