use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "multi-calc")]
#[command(about = "Multi-purpose calculator and unit converter")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Base URL of the exchange-rate API (overrides the config file)
    #[arg(long, global = true)]
    pub rates_endpoint: Option<String>,

    /// Exchange-rate request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Commands {
    /// Addition, Subtraction, Multiplication, Division, Exponent or Modulus
    Arithmetic {
        operation: String,
        #[arg(allow_negative_numbers = true)]
        first: f64,
        #[arg(allow_negative_numbers = true)]
        second: Option<f64>,
    },

    /// Logarithm of NUMBER in BASE
    Log {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(allow_negative_numbers = true)]
        base: f64,
    },

    /// BASE raised to LOG_VALUE
    Antilog {
        #[arg(allow_negative_numbers = true)]
        log_value: f64,
        #[arg(allow_negative_numbers = true)]
        base: f64,
    },

    Sqrt {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },

    Cbrt {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },

    /// Body mass index from weight (kg) and height (m)
    Bmi {
        #[arg(allow_negative_numbers = true)]
        weight_kg: f64,
        #[arg(allow_negative_numbers = true)]
        height_m: f64,
    },

    /// Age in whole years from a YYYY-MM-DD birthdate
    Age { birthdate: String },

    /// Area of a Circle, Rectangle or Square
    Area {
        shape: String,
        #[arg(allow_negative_numbers = true)]
        dimension_1: f64,
        #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
        dimension_2: f64,
    },

    Length {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    Time {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Convert an amount using live exchange rates
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        from: String,
        to: String,
    },

    /// List the units the length and time converters accept
    Units,
}
