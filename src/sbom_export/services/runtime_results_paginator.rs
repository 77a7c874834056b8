use crate::sbom_export::domain::{RuntimeResultsPage, SbomIdSet};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Page size used against the runtime-results listing
pub const DEFAULT_PAGE_LIMIT: usize = 1000;

/// What the paginator concluded after absorbing one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page had no entries; the listing is exhausted
    Empty,
    /// Every identifier on the page was already collected; stop to avoid
    /// looping on an API that keeps returning the same data
    NoNewIds,
    /// New identifiers were collected. `last_page` is set when the page was
    /// shorter than the limit.
    Collected { new_ids: usize, last_page: bool },
}

/// RuntimeResultsPaginator - limit/offset walk over the runtime-results listing
///
/// Holds the paging cursor and the identifiers collected so far. The caller
/// fetches the page at [`offset`](Self::offset) and hands it to
/// [`absorb`](Self::absorb) until [`is_finished`](Self::is_finished).
#[derive(Debug)]
pub struct RuntimeResultsPaginator {
    limit: usize,
    offset: usize,
    ids: SbomIdSet,
    finished: bool,
}

impl RuntimeResultsPaginator {
    /// # Errors
    /// Returns a validation error when `limit` is zero
    pub fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(SbomError::Validation {
                message: "page limit must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Self {
            limit,
            offset: 0,
            ids: SbomIdSet::new(),
            finished: false,
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of distinct identifiers collected so far
    pub fn collected(&self) -> usize {
        self.ids.len()
    }

    /// Folds one page into the collected identifiers and advances the cursor.
    pub fn absorb(&mut self, page: &RuntimeResultsPage) -> PageOutcome {
        if page.is_empty() {
            self.finished = true;
            return PageOutcome::Empty;
        }

        let new_ids = self
            .ids
            .extend_new(page.entries().iter().map(|entry| entry.sbom_id()));
        if new_ids == 0 {
            self.finished = true;
            return PageOutcome::NoNewIds;
        }

        let last_page = page.len() < self.limit;
        if last_page {
            self.finished = true;
        } else {
            self.offset += self.limit;
        }

        PageOutcome::Collected { new_ids, last_page }
    }

    pub fn into_ids(self) -> SbomIdSet {
        self.ids
    }
}
