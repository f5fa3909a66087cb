use messari_lib::{ClientConfig, MessariClient, Metric, PaginationOptions};

fn live_tests_enabled() -> bool {
    std::env::var("MESSARI_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_asset_smoke() -> Result<(), Box<dyn std::error::Error>> {
    if !live_tests_enabled() {
        return Ok(());
    }

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(_) => return Ok(()),
    };
    let client = MessariClient::from_config(config)?;

    let asset = client.get_asset("ethereum", &[]).await?.into_result()?;
    assert_eq!(asset.asset.slug, "ethereum");

    let missing = client.get_asset("fake-asset", &[]).await?;
    assert!(missing.error_code().is_some());

    let assets = client
        .list_assets(
            Some(&PaginationOptions::default().with_limit(5)),
            &[Metric::MarketData],
        )
        .await?
        .into_result()?;
    assert_eq!(assets.len(), 5);

    Ok(())
}
