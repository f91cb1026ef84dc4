//! CLI interface and argument parsing
//!
//! Command-line interface for the engine using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Ictus - epilepsy clinical document engine
#[derive(Parser, Debug)]
#[command(name = "ictus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ictus.toml", env = "ICTUS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ICTUS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all exchange documents for a patient record
    Export(commands::export::ExportArgs),

    /// Run analytics over a patient record
    Analyze(commands::analyze::AnalyzeArgs),

    /// Validate a generated document against its schema's compliance checks
    Validate(commands::validate_document::ValidateDocumentArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
