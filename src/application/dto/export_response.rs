use crate::sbom_export::domain::SbomEntry;

/// ExportResponse - Result of one export run
///
/// `entries` keeps the order in which identifiers were first listed;
/// identifiers whose SBOM could not be fetched are absent.
#[derive(Debug, Clone)]
pub struct ExportResponse {
    /// Number of distinct identifiers found in the runtime-results listing
    pub requested: usize,
    /// SBOMs fetched successfully
    pub entries: Vec<SbomEntry>,
}

impl ExportResponse {
    pub fn new(requested: usize, entries: Vec<SbomEntry>) -> Self {
        Self { requested, entries }
    }

    /// Number of identifiers that were skipped
    pub fn failed(&self) -> usize {
        self.requested.saturating_sub(self.entries.len())
    }
}
