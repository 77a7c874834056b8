/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (vendor API, file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_repository;

pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_repository::{SbomFetchOutcome, SbomRepository};
