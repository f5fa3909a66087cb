use messari_lib::{ClientConfig, Error, MessariClient, Metric, PaginationOptions};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client(server: &MockServer) -> MessariClient {
    let config = ClientConfig::new("test-key")
        .unwrap()
        .with_base_url(&server.uri());
    MessariClient::from_config(config).unwrap()
}

#[tokio::test]
async fn get_asset_market_data_success() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets/bitcoin/metrics/market-data"))
        .and(header("x-messari-api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("asset_market_data.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get_asset_market_data("bitcoin")
        .await
        .unwrap();

    let market_data = result.data().unwrap();
    assert_eq!(market_data.price_usd, Some(46512.33));
    assert_eq!(market_data.ohlcv_last_1_hour.as_ref().unwrap().close, 46512.33);
    assert_eq!(result.status().elapsed, Some(5));
}

#[tokio::test]
async fn get_asset_not_found_resolves_to_failure() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets/fake-asset"))
        .respond_with(ResponseTemplate::new(404).set_body_string(load_fixture("not_found.json")))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get_asset("fake-asset", &[])
        .await
        .unwrap();
    assert!(result.is_failure());
    assert_eq!(result.error_code(), Some(404));
    assert_eq!(result.error_message(), Some("Asset not found"));
}

#[tokio::test]
async fn list_assets_sends_pagination_and_fields() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/assets"))
        .and(query_param("limit", "2"))
        .and(query_param("sort", "id"))
        .and(query_param(
            "fields",
            "id,serial_id,name,slug,symbol,metrics/supply",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("assets.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = PaginationOptions::default()
        .with_limit(2)
        .with_sort(messari_lib::SortBy::Id);
    let result = client(&mock_server)
        .list_assets(Some(&options), &[Metric::Supply])
        .await
        .unwrap();
    let assets = result.into_data().unwrap();
    assert_eq!(assets.len(), 2);
    assert!(assets[0].metrics.supply.is_some());
}

#[tokio::test]
async fn list_markets_and_news() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("markets.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/news/ethereum"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("news.json")))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let markets = client.list_markets().await.unwrap();
    assert_eq!(markets.data().unwrap()[0].pair, "BTC-USD");

    let news = client
        .list_asset_news("ethereum", Some(&PaginationOptions::default().with_limit(2)))
        .await
        .unwrap();
    assert_eq!(news.data().unwrap().len(), 2);
}

#[tokio::test]
async fn success_then_rate_limited() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets/ethereum"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("asset.json")))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/assets/ethereum"))
        .respond_with(ResponseTemplate::new(429).set_body_string(load_fixture("rate_limited.json")))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let first = client.get_asset("ethereum", &[]).await.unwrap();
    let second = client.get_asset("ethereum", &[]).await.unwrap();

    assert_eq!(first.data().unwrap().asset.name, "Ethereum");
    assert_eq!(first.error_code(), None);
    assert!(second.data().is_none());
    assert_eq!(second.error_code(), Some(429));
    assert_eq!(
        second.error_message(),
        Some("Too many requests (rate limit)")
    );
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/news"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).list_news(None).await;
    assert!(matches!(result, Err(Error::Api(_))));
}
