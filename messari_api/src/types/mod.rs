mod envelope;
pub use self::envelope::{Envelope, QueryResult, RemoteError, Status, WireStatus};

mod asset;
pub use self::asset::{Asset, AssetListing, AssetMarketData, AssetMetrics, AssetWithMetrics};

mod metrics;
pub use self::metrics::{
    AllTimeHigh, BlockchainStats24Hours, CycleLow, DeveloperActivity, MarketCap, MarketData,
    MarketDataLiquidity, MetricValues, Metrics, MinerFlows, MiningStats, MiscData, Ohlcv, Reddit,
    RiskMetrics, RoiData, SharpeRatios, Supply, TokenSaleStats, VolatilityStats,
};

mod market;
pub use self::market::Market;

mod news;
pub use self::news::{NewsArticle, NewsAuthor, NewsReference};
