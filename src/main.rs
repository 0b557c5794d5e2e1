use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use nbp_rates::core::config::SourceKind;
use nbp_rates::core::currency::CurrencyCode;
use nbp_rates::core::error::RateError;
use nbp_rates::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Override the rate source from the configuration
    #[arg(short, long, global = true, value_enum)]
    source: Option<SourceArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Nbp,
    Static,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> SourceKind {
        match arg {
            SourceArg::Nbp => SourceKind::Nbp,
            SourceArg::Static => SourceKind::Static,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the PLN rate of a currency
    Rate {
        /// Currency code, e.g. EUR
        code: CurrencyCode,
    },
    /// Display the USD to EUR rate
    UsdToEur,
    /// Display the cross rate between two currencies
    Cross { from: CurrencyCode, to: CurrencyCode },
    /// Fetch all supported rates and check not-found handling
    Demo,
}

impl From<Commands> for nbp_rates::AppCommand {
    fn from(cmd: Commands) -> nbp_rates::AppCommand {
        match cmd {
            Commands::Rate { code } => nbp_rates::AppCommand::Rate(code),
            Commands::UsdToEur => nbp_rates::AppCommand::UsdToEur,
            Commands::Cross { from, to } => nbp_rates::AppCommand::Cross { from, to },
            Commands::Demo => nbp_rates::AppCommand::Demo,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => nbp_rates::cli::setup::setup(),
        Some(cmd) => nbp_rates::run_command(
            cmd.into(),
            cli.config_path.as_deref(),
            cli.source.map(SourceKind::from),
        )
        .await
        .map(|output| println!("{output}")),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        match e.downcast_ref::<RateError>() {
            Some(RateError::NotFound) => tracing::error!(error = %e, "No rate published"),
            _ => tracing::error!(error = %e, "Application failed"),
        }
    }
    result
}
