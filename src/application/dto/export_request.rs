use crate::sbom_export::services::DEFAULT_PAGE_LIMIT;

/// ExportRequest - Internal request DTO for the SBOM export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Page size used against the runtime-results listing
    pub page_limit: usize,
}

impl ExportRequest {
    pub fn new() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self::new()
    }
}
