//! Configuration management
//!
//! TOML-backed configuration with serde defaults and `ICTUS_*` environment
//! variable overrides. Every setting has a working default, so the engine
//! runs without any configuration file.

pub mod loader;
pub mod schema;

pub use loader::{default_config, load_config};
pub use schema::{ApplicationConfig, ExchangeConfig, ExportConfig, IctusConfig, LoggingConfig};
