//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "ictus.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your exchange identities", self.output);
                println!("  2. Validate configuration: ictus validate-config");
                println!("  3. Export a patient record: ictus export --patient patient.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# Ictus Configuration File
# Epilepsy clinical document engine

[application]
log_level = "info"

[exchange]
# FHIR base URL used in resource references and profiles
base_url = "https://epilepsy.example.org/fhir"
fhir_version = "4.0.1"

# Registry and exchange-network identities
organization_id = "ICTUS-ORG"
system_id = "ICTUS-SYS-001"
facility_id = "ICTUS-FAC-001"

# openEHR composition locale
language = "en"
territory = "US"

[export]
output_dir = "exports"
# Record a SHA-256 checksum per exported file
checksum = true

[logging]
local_enabled = true
local_path = "logs"
# daily | never
local_rotation = "daily"
"#
    }
}
