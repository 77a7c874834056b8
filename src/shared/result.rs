/// Result alias used throughout the crate.
/// Domain failures are `SbomError` values wrapped into `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
