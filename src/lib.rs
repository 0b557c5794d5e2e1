pub mod cli;
pub mod core;
pub mod providers;
pub mod service;

use crate::core::config::{AppConfig, SourceKind};
use crate::core::currency::CurrencyCode;
use crate::service::RateService;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// PLN rate of one currency
    Rate(CurrencyCode),
    /// USD to EUR cross rate
    UsdToEur,
    /// Cross rate between any two currencies
    Cross { from: CurrencyCode, to: CurrencyCode },
    /// Every supported rate plus the not-found check
    Demo,
}

/// Loads the config, builds the service and runs `command`, returning the
/// text to print.
pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    source: Option<SourceKind>,
) -> Result<String> {
    info!("NBP rates starting...");

    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if let Some(source) = source {
        config.source = source;
    }
    debug!("Loaded config: {config:#?}");

    let service = RateService::from_config(&config);

    match command {
        AppCommand::Rate(code) => cli::rates::show_rate(&service, code).await,
        AppCommand::UsdToEur => {
            cli::rates::show_cross_rate(&service, CurrencyCode::Usd, CurrencyCode::Eur).await
        }
        AppCommand::Cross { from, to } => cli::rates::show_cross_rate(&service, from, to).await,
        AppCommand::Demo => cli::rates::show_demo(&service).await,
    }
}
