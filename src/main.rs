//! Ictus CLI entry point

use clap::Parser;
use ictus::cli::{Cli, Commands};
use ictus::config::LoggingConfig;
use ictus::logging::init_logging;
use std::process;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for the CLI itself. Commands that need file
    // logging re-initialize from the loaded configuration.
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let console_logging = LoggingConfig {
        local_enabled: false,
        local_path: String::new(),
        local_rotation: "daily".to_string(),
    };

    let _guard = match init_logging(log_level, &console_logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting ictus");

    let result = match &cli.command {
        Commands::Export(args) => args.execute(&cli.config),
        Commands::Analyze(args) => args.execute(&cli.config),
        Commands::Validate(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Fatal error: {e}");
            process::exit(5);
        }
    }
}
