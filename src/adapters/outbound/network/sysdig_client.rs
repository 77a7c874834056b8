use crate::ports::outbound::{SbomFetchOutcome, SbomRepository};
use crate::sbom_export::domain::{ApiEndpoints, RuntimeResultsPage};
use crate::shared::error::SbomError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Sysdig Secure vulnerability API client
///
/// Implements the SbomRepository port with blocking requests. Every
/// request carries the bearer token and a JSON content type.
///
/// # Behavior
/// - Timeout of 30 seconds per request
/// - No retries: a failed request is reported once to the caller
pub struct SysdigClient {
    client: Client,
    endpoints: ApiEndpoints,
}

impl SysdigClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `endpoints` authenticated with `api_token`
    ///
    /// # Errors
    /// Returns an error if the token cannot be used as a header value or
    /// the HTTP client cannot be built
    pub fn new(endpoints: ApiEndpoints, api_token: &str) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_token))
            .context("api_token contains characters that are not allowed in an HTTP header")?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sysdig-sbom-export/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, endpoints })
    }

}

impl SbomRepository for SysdigClient {
    fn fetch_runtime_results_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<RuntimeResultsPage> {
        let url = self.endpoints.runtime_results_page_url(limit, offset);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to request runtime results at offset {}", offset))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(SbomError::RuntimeResultsFetchError {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let page: RuntimeResultsPage = response
            .json()
            .with_context(|| format!("Failed to parse runtime results page at offset {}", offset))?;
        Ok(page)
    }

    fn fetch_sbom(&self, sbom_id: &str) -> Result<SbomFetchOutcome> {
        let url = self.endpoints.sbom_url(sbom_id);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to request SBOM {}", sbom_id))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(SbomFetchOutcome::Rejected {
                status: status.as_u16(),
            });
        }

        let document: Value = response.json().context("SBOM response is not valid JSON")?;
        Ok(SbomFetchOutcome::Retrieved(document))
    }
}
