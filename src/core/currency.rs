use crate::domain::model::ExchangeRates;
use crate::domain::ports::{ConfigProvider, RateProvider};
use crate::utils::error::{CalcError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_RATES_ENDPOINT: &str = "https://open.er-api.com/v6/latest";

/// Fetches rates from an open.er-api.com compatible endpoint.
///
/// Every call is a fresh request: no retry and no caching.
pub struct ErApiRateProvider {
    client: Client,
    endpoint: String,
}

impl ErApiRateProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        match config.request_timeout() {
            Some(timeout) => Self::with_timeout(config.rates_endpoint(), timeout),
            None => Ok(Self::new(config.rates_endpoint())),
        }
    }

    fn url_for(&self, base_currency: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), base_currency)
    }
}

#[async_trait]
impl RateProvider for ErApiRateProvider {
    async fn fetch_rates(&self, base_currency: &str) -> Result<ExchangeRates> {
        let url = self.url_for(base_currency);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        // Error responses still carry a JSON body; a missing `rates` key is
        // reported as an invalid currency further up.
        let body = response.text().await?;
        let snapshot: ExchangeRates = serde_json::from_str(&body)?;
        Ok(snapshot)
    }
}

pub struct CurrencyConverter<R: RateProvider> {
    provider: R,
}

impl<R: RateProvider> CurrencyConverter<R> {
    pub fn new(provider: R) -> Self {
        Self { provider }
    }

    pub async fn convert(&self, amount: f64, from_currency: &str, to_currency: &str) -> Result<f64> {
        let snapshot = self.provider.fetch_rates(from_currency).await?;

        let rate = snapshot
            .rate(to_currency)
            .ok_or_else(|| CalcError::InvalidCurrency {
                code: to_currency.to_string(),
            })?;

        tracing::debug!("Rate {} -> {} = {}", from_currency, to_currency, rate);
        Ok(amount * rate)
    }
}

/// Serves fixed snapshots without touching the network.
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    snapshot: ExchangeRates,
}

impl StaticRateProvider {
    pub fn new(snapshot: ExchangeRates) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn fetch_rates(&self, _base_currency: &str) -> Result<ExchangeRates> {
        Ok(self.snapshot.clone())
    }
}
