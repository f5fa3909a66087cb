use std::collections::HashSet;
use std::str::FromStr;

use super::Query;

/// Identity fields that lead every field selection.
pub const IDENTITY_FIELDS: [&str; 5] = ["id", "serial_id", "name", "slug", "symbol"];

/// Metric groups the service can return for an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    AllTimeHigh,
    BlockchainStats24Hours,
    CycleLow,
    DeveloperActivity,
    ExchangeFlows,
    MarketDataLiquidity,
    MarketData,
    Marketcap,
    MinerFlows,
    MiningStats,
    MiscData,
    OnChainData,
    Reddit,
    RiskMetrics,
    RoiData,
    RoiByYear,
    SupplyActivity,
    Supply,
    TokenSaleStats,
}

impl Metric {
    /// Every metric group, in the order the service documents them.
    pub const ALL: [Metric; 19] = [
        Metric::AllTimeHigh,
        Metric::BlockchainStats24Hours,
        Metric::CycleLow,
        Metric::DeveloperActivity,
        Metric::ExchangeFlows,
        Metric::MarketDataLiquidity,
        Metric::MarketData,
        Metric::Marketcap,
        Metric::MinerFlows,
        Metric::MiningStats,
        Metric::MiscData,
        Metric::OnChainData,
        Metric::Reddit,
        Metric::RiskMetrics,
        Metric::RoiData,
        Metric::RoiByYear,
        Metric::SupplyActivity,
        Metric::Supply,
        Metric::TokenSaleStats,
    ];

    /// The wire name of this metric group.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::AllTimeHigh => "all_time_high",
            Metric::BlockchainStats24Hours => "blockchain_stats_24_hours",
            Metric::CycleLow => "cycle_low",
            Metric::DeveloperActivity => "developer_activity",
            Metric::ExchangeFlows => "exchange_flows",
            Metric::MarketDataLiquidity => "market_data_liquidity",
            Metric::MarketData => "market_data",
            Metric::Marketcap => "marketcap",
            Metric::MinerFlows => "miner_flows",
            Metric::MiningStats => "mining_stats",
            Metric::MiscData => "misc_data",
            Metric::OnChainData => "on_chain_data",
            Metric::Reddit => "reddit",
            Metric::RiskMetrics => "risk_metrics",
            Metric::RoiData => "roi_data",
            Metric::RoiByYear => "roi_by_year",
            Metric::SupplyActivity => "supply_activity",
            Metric::Supply => "supply",
            Metric::TokenSaleStats => "token_sale_stats",
        }
    }
}
impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for Metric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .find(|metric| metric.as_str() == s)
            .copied()
            .ok_or(())
    }
}

/// How requested metrics are spelled in the `fields` parameter.
///
/// Collection endpoints nest metric groups under `metrics/`, single-asset
/// endpoints return them at the top level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldNaming {
    /// `metrics/<name>`, used by `v2/assets`.
    Collection,
    /// `<name>`, used by `v1/assets/{key}/metrics`.
    Entity,
}

/// A `fields=` selection: the identity fields followed by the requested metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSelection {
    pub metrics: Vec<Metric>,
    pub naming: FieldNaming,
}

impl FieldSelection {
    /// Selection for a collection endpoint.
    pub fn collection(metrics: &[Metric]) -> Self {
        Self {
            metrics: metrics.to_vec(),
            naming: FieldNaming::Collection,
        }
    }

    /// Selection for a single-asset endpoint.
    pub fn entity(metrics: &[Metric]) -> Self {
        Self {
            metrics: metrics.to_vec(),
            naming: FieldNaming::Entity,
        }
    }

    /// Adds one metric group to the selection.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// The field tokens in the order they are sent, duplicates removed.
    pub fn fields(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let metrics = self
            .metrics
            .iter()
            .filter(|metric| seen.insert(**metric))
            .map(|metric| match self.naming {
                FieldNaming::Collection => format!("metrics/{}", metric),
                FieldNaming::Entity => metric.to_string(),
            });
        IDENTITY_FIELDS
            .iter()
            .map(|field| field.to_string())
            .chain(metrics)
            .collect()
    }
}

impl Query for FieldSelection {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("fields", self.fields().join(","))]
    }
}
