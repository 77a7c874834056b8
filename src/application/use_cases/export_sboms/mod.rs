use crate::application::dto::{ExportRequest, ExportResponse};
use crate::ports::outbound::{
    OutputPresenter, ProgressReporter, SbomFetchOutcome, SbomFormatter, SbomRepository,
};
use crate::sbom_export::domain::{SbomEntry, SbomIdSet};
use crate::sbom_export::services::{PageOutcome, RuntimeResultsPaginator};
use crate::shared::Result;

/// ExportSbomsUseCase - Core use case for the runtime SBOM export
///
/// Walks the runtime-results listing to collect SBOM identifiers, then
/// fetches each SBOM document in turn. Listing failures abort the run;
/// a failed SBOM fetch only drops that identifier.
///
/// # Type Parameters
/// * `REPO` - SbomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportSbomsUseCase<REPO, PR> {
    sbom_repository: REPO,
    progress_reporter: PR,
}

impl<REPO, PR> ExportSbomsUseCase<REPO, PR>
where
    REPO: SbomRepository,
    PR: ProgressReporter,
{
    /// Creates a new ExportSbomsUseCase with injected dependencies
    pub fn new(sbom_repository: REPO, progress_reporter: PR) -> Self {
        Self {
            sbom_repository,
            progress_reporter,
        }
    }

    /// Executes the export
    ///
    /// # Returns
    /// ExportResponse with the fetched entries in first-listed order
    ///
    /// # Errors
    /// Returns an error if the page limit is invalid or any runtime-results
    /// page cannot be fetched. SBOM fetch failures are not errors.
    pub fn execute(&self, request: ExportRequest) -> Result<ExportResponse> {
        // Step 1: Collect identifiers from the runtime-results listing
        let sbom_ids = self.collect_sbom_ids(request.page_limit)?;

        // Step 2: Fetch every SBOM, skipping the ones that fail
        let entries = self.fetch_sboms(&sbom_ids);

        let response = ExportResponse::new(sbom_ids.len(), entries);
        if response.failed() > 0 {
            self.progress_reporter.report_warning(&format!(
                "Skipped {} of {} SBOM(s) that could not be fetched",
                response.failed(),
                response.requested
            ));
        }

        Ok(response)
    }

    /// Executes the export and writes the result through `presenter`
    ///
    /// Nothing is written unless the whole run succeeds, so a listing
    /// failure leaves the previous output in place.
    ///
    /// # Errors
    /// Returns an error if the export fails, or if the entries cannot be
    /// formatted or written
    pub fn export_to<F, P>(
        &self,
        request: ExportRequest,
        formatter: &F,
        presenter: &P,
    ) -> Result<ExportResponse>
    where
        F: SbomFormatter,
        P: OutputPresenter,
    {
        let response = self.execute(request)?;

        // Step 3: Serialize and write the collected entries
        let formatted_output = formatter.format(&response.entries)?;
        presenter.present(&formatted_output)?;

        self.progress_reporter.report_completion(&format!(
            "✅ SBOM data saved to {} ({} entries).",
            presenter.destination(),
            response.entries.len()
        ));

        Ok(response)
    }

    /// Pages through the runtime-results listing until the paginator stops
    fn collect_sbom_ids(&self, page_limit: usize) -> Result<SbomIdSet> {
        let mut paginator = RuntimeResultsPaginator::new(page_limit)?;

        self.progress_reporter
            .report("📡 Fetching runtime results with pagination...");

        while !paginator.is_finished() {
            let page = self
                .sbom_repository
                .fetch_runtime_results_page(paginator.limit(), paginator.offset())?;

            match paginator.absorb(&page) {
                PageOutcome::Empty => {}
                PageOutcome::NoNewIds => {
                    self.progress_reporter
                        .report("No new IDs found in this page, stopping to avoid duplicates.");
                }
                PageOutcome::Collected { new_ids, .. } => {
                    self.progress_reporter.report(&format!(
                        "   Fetched {} new entries (Total so far: {})",
                        new_ids,
                        paginator.collected()
                    ));
                }
            }
        }

        Ok(paginator.into_ids())
    }

    fn fetch_sboms(&self, sbom_ids: &SbomIdSet) -> Vec<SbomEntry> {
        let total = sbom_ids.len();
        self.progress_reporter
            .report(&format!("📦 Fetching SBOMs for {} IDs...", total));

        let mut entries = Vec::with_capacity(total);
        for (index, sbom_id) in sbom_ids.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(sbom_id));

            match self.sbom_repository.fetch_sbom(sbom_id) {
                Ok(SbomFetchOutcome::Retrieved(document)) => {
                    entries.push(SbomEntry::new(sbom_id, document));
                }
                Ok(SbomFetchOutcome::Rejected { status }) => {
                    self.progress_reporter.report_warning(&format!(
                        "Failed to fetch SBOM for {}: {}",
                        sbom_id, status
                    ));
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "Failed to fetch SBOM for {}: {:#}",
                        sbom_id, e
                    ));
                }
            }
        }

        entries
    }
}
