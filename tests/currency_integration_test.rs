use anyhow::Result;
use httpmock::prelude::*;
use multi_calc::core::ConfigProvider;
use multi_calc::domain::model::ExchangeRates;
use multi_calc::{
    forms, CurrencyConverter, ErApiRateProvider, Settings, StaticRateProvider, TomlConfig,
};

#[tokio::test]
async fn test_currency_form_with_mocked_api() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v6/latest/USD");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"rates": {"INR": 83.0}}));
    });

    let converter = CurrencyConverter::new(ErApiRateProvider::new(server.url("/v6/latest")));
    let output = forms::currency_converter(&converter, 10.0, "USD", "INR").await;

    assert_eq!(output, "10 USD = 830.00 INR");
    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_every_conversion_fetches_fresh_rates() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/latest/EUR");
        then.status(200)
            .json_body(serde_json::json!({"base_code": "EUR", "rates": {"USD": 1.1}}));
    });

    let converter = CurrencyConverter::new(ErApiRateProvider::new(server.url("/latest")));
    forms::currency_converter(&converter, 1.0, "EUR", "USD").await;
    forms::currency_converter(&converter, 2.0, "EUR", "USD").await;

    api_mock.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_missing_currency_key() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest/USD");
        then.status(200)
            .json_body(serde_json::json!({"rates": {"INR": 83.0}}));
    });

    let converter = CurrencyConverter::new(ErApiRateProvider::new(server.url("/latest")));
    let output = forms::currency_converter(&converter, 10.0, "USD", "JPY").await;

    assert_eq!(output, "Error: Invalid currency code");
    Ok(())
}

#[tokio::test]
async fn test_network_failure_is_rendered() -> Result<()> {
    // Nothing listens on port 9 on the loopback interface.
    let converter = CurrencyConverter::new(ErApiRateProvider::new("http://127.0.0.1:9/latest"));
    let output = forms::currency_converter(&converter, 1.0, "USD", "INR").await;

    assert!(output.starts_with("Error: "));
    assert_ne!(output, "Error: Invalid currency code");
    Ok(())
}

#[tokio::test]
async fn test_provider_built_from_settings() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rates/GBP");
        then.status(200)
            .json_body(serde_json::json!({"rates": {"USD": 1.25}}));
    });

    let file = TomlConfig::from_toml_str("[currency]\ntimeout_seconds = 5\n")?;
    let settings = Settings::new(file).with_rates_endpoint(Some(server.url("/rates")));
    assert_eq!(settings.rates_endpoint(), server.url("/rates"));

    let converter = CurrencyConverter::new(ErApiRateProvider::from_config(&settings)?);
    let output = forms::currency_converter(&converter, 4.0, "GBP", "USD").await;

    assert_eq!(output, "4 GBP = 5.00 USD");
    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_fake_provider_needs_no_network() {
    let converter = CurrencyConverter::new(StaticRateProvider::new(ExchangeRates::from_rates(
        "USD",
        [("INR", 83.0)],
    )));

    assert_eq!(
        forms::currency_converter(&converter, 10.0, "USD", "INR").await,
        "10 USD = 830.00 INR"
    );
    assert_eq!(
        forms::currency_converter(&converter, 10.0, "USD", "CHF").await,
        "Error: Invalid currency code"
    );
}
