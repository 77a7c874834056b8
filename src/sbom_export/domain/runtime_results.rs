use serde::Deserialize;

/// One page of the runtime-results listing.
///
/// Only the `sbomId` of each entry is read; every other field of the
/// vendor payload is ignored. A missing or `null` `data` field is an
/// empty page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeResultsPage {
    #[serde(default)]
    data: Option<Vec<RuntimeResultEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuntimeResultEntry {
    #[serde(rename = "sbomId")]
    sbom_id: String,
}

impl RuntimeResultsPage {
    pub fn new(entries: Vec<RuntimeResultEntry>) -> Self {
        Self {
            data: Some(entries),
        }
    }

    /// Convenience constructor from bare identifiers
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(RuntimeResultEntry::new).collect())
    }

    pub fn entries(&self) -> &[RuntimeResultEntry] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl RuntimeResultEntry {
    pub fn new(sbom_id: impl Into<String>) -> Self {
        Self {
            sbom_id: sbom_id.into(),
        }
    }

    pub fn sbom_id(&self) -> &str {
        &self.sbom_id
    }
}
