//! sysdig-sbom-export - runtime SBOM export for Sysdig Secure
//!
//! This library pages through the Sysdig Secure runtime-results listing,
//! fetches the SBOM behind every distinct identifier and writes the
//! collected documents to a single JSON file. It follows hexagonal
//! architecture: the application core only talks to ports.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_export`): regions, endpoints, identifier set and
//!   the pagination policy
//! - **Application Layer** (`application`): the export use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sysdig_sbom_export::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let config = ExportConfig::load(Path::new("config.yaml"), None)?;
//!
//! // Create adapters
//! let client = SysdigClient::new(config.endpoints().clone(), config.api_token())?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case, then export and write the output
//! let use_case = ExportSbomsUseCase::new(client, progress_reporter);
//! let writer = FileSystemWriter::new(PathBuf::from("sboms.json"));
//! let response = use_case.export_to(ExportRequest::new(), &JsonFormatter::new(), &writer)?;
//! println!("Skipped {} SBOM(s)", response.failed());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_export;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::network::SysdigClient;
    pub use crate::application::dto::{ExportRequest, ExportResponse};
    pub use crate::application::use_cases::ExportSbomsUseCase;
    pub use crate::config::{load_config_from_path, ConfigFile, ExportConfig};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SbomFetchOutcome, SbomFormatter, SbomRepository,
    };
    pub use crate::sbom_export::domain::{
        ApiEndpoints, Region, RuntimeResultEntry, RuntimeResultsPage, SbomEntry, SbomIdSet,
    };
    pub use crate::sbom_export::services::{
        PageOutcome, RuntimeResultsPaginator, DEFAULT_PAGE_LIMIT,
    };
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
