/// Shared kernel - error types, result alias and file-safety checks
/// used by every layer.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
