use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One exported SBOM: the identifier and the document returned for it.
///
/// Serializes as `{"sbomId": ..., "sbomData": ...}`. The document is kept
/// as raw JSON; its content is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbomEntry {
    sbom_id: String,
    sbom_data: Value,
}

impl SbomEntry {
    pub fn new(sbom_id: impl Into<String>, sbom_data: Value) -> Self {
        Self {
            sbom_id: sbom_id.into(),
            sbom_data,
        }
    }

    pub fn sbom_id(&self) -> &str {
        &self.sbom_id
    }

    pub fn sbom_data(&self) -> &Value {
        &self.sbom_data
    }
}
