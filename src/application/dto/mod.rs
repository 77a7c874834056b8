/// Data Transfer Objects for application layer
///
/// DTOs carry the inputs and results of the export use case between
/// the CLI and the application core.
mod export_request;
mod export_response;

pub use export_request::ExportRequest;
pub use export_response::ExportResponse;
