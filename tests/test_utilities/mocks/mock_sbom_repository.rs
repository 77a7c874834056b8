use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use sysdig_sbom_export::prelude::*;

/// Mock SbomRepository serving scripted listing pages and SBOM statuses
#[derive(Default, Clone)]
pub struct MockSbomRepository {
    pages: Arc<Mutex<VecDeque<RuntimeResultsPage>>>,
    statuses: HashMap<String, u16>,
    listing_status: Option<u16>,
    pub listing_offsets: Arc<Mutex<Vec<usize>>>,
    pub sbom_requests: Arc<Mutex<Vec<String>>>,
}

impl MockSbomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, ids: &[&str]) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(RuntimeResultsPage::from_ids(ids.iter().copied()));
        self
    }

    /// Every listing request answers with `status`
    pub fn with_listing_status(mut self, status: u16) -> Self {
        self.listing_status = Some(status);
        self
    }

    /// The SBOM for `id` answers with `status` instead of a document
    pub fn with_sbom_status(mut self, id: &str, status: u16) -> Self {
        self.statuses.insert(id.to_string(), status);
        self
    }

    pub fn listing_request_count(&self) -> usize {
        self.listing_offsets.lock().unwrap().len()
    }

    pub fn sbom_request_count(&self) -> usize {
        self.sbom_requests.lock().unwrap().len()
    }
}

impl SbomRepository for MockSbomRepository {
    fn fetch_runtime_results_page(
        &self,
        _limit: usize,
        offset: usize,
    ) -> Result<RuntimeResultsPage> {
        self.listing_offsets.lock().unwrap().push(offset);
        if let Some(status) = self.listing_status {
            return Err(SbomError::RuntimeResultsFetchError {
                status,
                body: String::new(),
            }
            .into());
        }
        Ok(self.pages.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn fetch_sbom(&self, sbom_id: &str) -> Result<SbomFetchOutcome> {
        self.sbom_requests.lock().unwrap().push(sbom_id.to_string());
        match self.statuses.get(sbom_id) {
            Some(status) => Ok(SbomFetchOutcome::Rejected { status: *status }),
            None => Ok(SbomFetchOutcome::Retrieved(
                json!({ "bomFormat": "CycloneDX", "serialNumber": sbom_id }),
            )),
        }
    }
}
