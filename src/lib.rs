pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Commands};

pub use app::forms;
pub use config::{toml_config::TomlConfig, Settings};
pub use core::currency::{CurrencyConverter, ErApiRateProvider, StaticRateProvider};
pub use core::health::{FixedClock, SystemClock};
pub use utils::error::{CalcError, Result};
