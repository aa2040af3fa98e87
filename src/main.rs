use clap::Parser;
use multi_calc::core::units::{LENGTH_UNITS, TIME_UNITS};
use multi_calc::core::ConfigProvider;
use multi_calc::utils::{logger, validation::Validate};
use multi_calc::{forms, CliConfig, Commands, CurrencyConverter, ErApiRateProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level());
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let output = match config.command {
        Commands::Arithmetic {
            operation,
            first,
            second,
        } => forms::calculator(&operation, first, second),
        Commands::Log { number, base } => forms::log_calculator(number, base),
        Commands::Antilog { log_value, base } => forms::antilog_calculator(log_value, base),
        Commands::Sqrt { number } => forms::square_root(number),
        Commands::Cbrt { number } => forms::cube_root(number),
        Commands::Bmi {
            weight_kg,
            height_m,
        } => forms::calculate_bmi(weight_kg, height_m),
        Commands::Age { birthdate } => forms::calculate_age(&birthdate),
        Commands::Area {
            shape,
            dimension_1,
            dimension_2,
        } => forms::calculate_area(&shape, dimension_1, dimension_2),
        Commands::Length { value, from, to } => forms::length_converter(value, &from, &to),
        Commands::Time { value, from, to } => forms::time_converter(value, &from, &to),
        Commands::Currency { amount, from, to } => {
            let provider = ErApiRateProvider::from_config(&settings)?;
            let converter = CurrencyConverter::new(provider);
            forms::currency_converter(&converter, amount, &from, &to).await
        }
        Commands::Units => [&LENGTH_UNITS, &TIME_UNITS]
            .iter()
            .map(|table| {
                format!(
                    "{} (base {}): {}",
                    table.quantity,
                    table.base_unit,
                    table.units().collect::<Vec<_>>().join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    println!("{}", output);
    Ok(())
}
