use crate::domain::model::ExchangeRates;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Source of exchange-rate snapshots for a base currency.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base_currency: &str) -> Result<ExchangeRates>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait ConfigProvider: Send + Sync {
    fn rates_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn log_level(&self) -> Option<&str>;
}
