use crate::sbom_export::domain::SbomEntry;
use crate::shared::Result;

/// SbomFormatter port for serializing exported SBOM entries
pub trait SbomFormatter {
    /// Formats the collected entries, preserving their order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, entries: &[SbomEntry]) -> Result<String>;
}
