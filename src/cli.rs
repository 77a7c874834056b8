use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILENAME;

/// Default location of the export file
pub const DEFAULT_OUTPUT_FILENAME: &str = "sboms.json";

/// Export runtime SBOMs from the Sysdig Secure vulnerability API
#[derive(Parser, Debug)]
#[command(name = "sysdig-sbom-export")]
#[command(version)]
#[command(
    about = "Export runtime SBOMs from the Sysdig Secure vulnerability API",
    long_about = None
)]
pub struct Args {
    /// Path to the YAML config file holding api_token and region
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Output file path (overwritten on every run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// Region override: us1, us2, us4, eu1, au1, me2 or in1 (unknown values use us1)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Resolve the configuration and print the endpoints without sending requests
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
