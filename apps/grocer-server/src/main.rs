mod adapters;
mod config;
mod seed;
mod server;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grocer_kit::logging::init_logging;

use crate::config::{AppConfig, CliOverrides};

/// Grocer Server - grocery catalog, commerce and meal planning API
#[derive(Parser)]
#[command(name = "grocer-server")]
#[command(about = "Grocer Server - grocery catalog, commerce and meal planning API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML, secrets redacted) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Run migrations and load demo data
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    };
    let config = AppConfig::load(cli.config.as_deref(), &overrides)?;

    if cli.print_config {
        println!("{}", config.redacted().to_yaml()?);
        return Ok(());
    }

    init_logging(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "grocer server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => server::run(&config).await,
        Commands::Check => check_config(&config),
        Commands::Seed => seed_database(&config).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("configuration loaded");
    println!("Configuration is valid");
    println!("{}", config.redacted().to_yaml()?);
    Ok(())
}

async fn seed_database(config: &AppConfig) -> Result<()> {
    let db = grocer_kit::db::connect(&config.database).await?;
    let modules = server::Modules::new(&db, config);
    modules.migrate(&db).await?;
    seed::seed(&modules).await?;
    db.close().await?;
    Ok(())
}
