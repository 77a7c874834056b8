use crate::ports::outbound::SbomFormatter;
use crate::sbom_export::domain::SbomEntry;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter for the export file
///
/// Produces a JSON array of `{"sbomId", "sbomData"}` objects, pretty-printed
/// with two-space indentation.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for JsonFormatter {
    fn format(&self, entries: &[SbomEntry]) -> Result<String> {
        serde_json::to_string_pretty(entries).context("Failed to serialize SBOM entries to JSON")
    }
}
