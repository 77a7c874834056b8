use super::Region;

/// URL builder for the two vulnerability API endpoints the export uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    pub fn for_region(region: Region) -> Self {
        Self::from_base_url(region.base_url())
    }

    /// Builds endpoints from an arbitrary base URL. A trailing `/` is
    /// added when missing so paths can be appended directly.
    pub fn from_base_url(base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runtime-results listing URL without paging parameters
    pub fn runtime_results_url(&self) -> String {
        format!("{}v1/runtime-results", self.base_url)
    }

    /// One page of the runtime-results listing
    pub fn runtime_results_page_url(&self, limit: usize, offset: usize) -> String {
        format!(
            "{}?limit={}&offset={}",
            self.runtime_results_url(),
            limit,
            offset
        )
    }

    /// SBOM document URL with an `{id}` placeholder, for display
    pub fn sbom_url_template(&self) -> String {
        format!("{}v1beta1/sboms?bomIdentifier={{id}}", self.base_url)
    }

    /// SBOM document URL for a single identifier
    pub fn sbom_url(&self, sbom_id: &str) -> String {
        format!(
            "{}v1beta1/sboms?bomIdentifier={}",
            self.base_url,
            urlencoding::encode(sbom_id)
        )
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::for_region(Region::default())
    }
}
