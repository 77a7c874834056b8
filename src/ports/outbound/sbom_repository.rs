use crate::sbom_export::domain::RuntimeResultsPage;
use crate::shared::Result;
use serde_json::Value;

/// Result of asking the API for one SBOM document
#[derive(Debug, Clone, PartialEq)]
pub enum SbomFetchOutcome {
    /// HTTP 200 with a JSON body
    Retrieved(Value),
    /// Any other HTTP status; the identifier is skipped
    Rejected { status: u16 },
}

/// SbomRepository port for the vendor vulnerability API
///
/// This port abstracts the remote source of runtime results and SBOM
/// documents. Calls are blocking and issued one at a time.
pub trait SbomRepository {
    /// Fetches one page of the runtime-results listing
    ///
    /// # Arguments
    /// * `limit` - Maximum number of entries on the page
    /// * `offset` - Number of entries to skip
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API answers with any status other than 200
    /// - The response cannot be parsed
    fn fetch_runtime_results_page(&self, limit: usize, offset: usize)
        -> Result<RuntimeResultsPage>;

    /// Fetches the SBOM document for one identifier
    ///
    /// A non-200 status is not an error: it is reported as
    /// [`SbomFetchOutcome::Rejected`].
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or a 200 body is not JSON
    fn fetch_sbom(&self, sbom_id: &str) -> Result<SbomFetchOutcome>;
}

impl<T: SbomRepository + ?Sized> SbomRepository for &T {
    fn fetch_runtime_results_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<RuntimeResultsPage> {
        (**self).fetch_runtime_results_page(limit, offset)
    }

    fn fetch_sbom(&self, sbom_id: &str) -> Result<SbomFetchOutcome> {
        (**self).fetch_sbom(sbom_id)
    }
}
