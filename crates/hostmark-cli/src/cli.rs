//! Argument parsing for the `hostmark` binary.

use std::path::PathBuf;

use clap::Parser;

use hostmark::{FingerprintConfig, DEFAULT_MACHINE_ID_PATH};

/// Generate a stable, URL-safe fingerprint for this host.
#[derive(Debug, Parser)]
#[command(name = "hostmark", about = "Stable, low-entropy host fingerprints", version)]
pub struct Cli {
    /// Partition salt scoping the token per product or tenant.
    #[arg(long, visible_alias = "extra-salt", value_name = "VALUE")]
    pub salt: Option<String>,

    /// Path to the machine identifier file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MACHINE_ID_PATH)]
    pub machine_id_path: PathBuf,

    /// Enable debug logging (diagnostics go to stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Map the parsed arguments onto a pipeline configuration.
    pub fn config(&self) -> FingerprintConfig {
        FingerprintConfig {
            machine_id_path: self.machine_id_path.clone(),
            salt: self.salt.clone(),
        }
    }
}
