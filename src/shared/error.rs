use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The export finished and the output file was written
    Success = 0,
    /// Fatal application error (missing token, listing failure, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the SBOM export.
///
/// Every variant ends with a hint line so the CLI can print the error
/// as-is without further decoration.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("api_token not found in config file: {path}\n\n💡 Hint: Add an 'api_token' entry with your Sysdig Secure API token")]
    MissingApiToken { path: PathBuf },

    #[error("Failed to fetch runtime results: {status} {body}\n\n💡 Hint: Check that the API token is valid and the region matches your Sysdig account")]
    RuntimeResultsFetchError { status: u16, body: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for request and builder parameters
    #[error("Validation error: {message}")]
    Validation { message: String },
}
