pub mod arithmetic;
pub mod currency;
pub mod geometry;
pub mod health;
pub mod units;

pub use crate::domain::model::{ArithmeticOp, BmiCategory, ExchangeRates, Shape, UnitTable};
pub use crate::domain::ports::{Clock, ConfigProvider, RateProvider};
pub use crate::utils::error::Result;
