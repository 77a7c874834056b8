//! Configuration file support.
//!
//! Reads the YAML configuration (`config.yaml` by default) holding the API
//! token and region, and resolves it into an [`ExportConfig`] that the rest
//! of the run is driven from.

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::sbom_export::domain::{ApiEndpoints, Region};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Unquoted numeric tokens are accepted as their literal text.
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub api_token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub region: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Reads a string or number as text; `null` is treated as absent.
fn deserialize_scalar_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml_ng::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml_ng::Value::Null) => Ok(None),
        Some(serde_yaml_ng::Value::String(value)) => Ok(Some(value)),
        Some(serde_yaml_ng::Value::Number(value)) => Ok(Some(value.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, found {:?}",
            other
        ))),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let size = validate_regular_file(path, "config file")?;
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    let content = std::fs::read_to_string(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config = parse_config(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

fn parse_config(content: &str) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Resolved settings for one export run.
///
/// The token is never shown by `Debug`.
#[derive(Clone)]
pub struct ExportConfig {
    api_token: String,
    region: Region,
    endpoints: ApiEndpoints,
}

impl ExportConfig {
    /// Resolves a loaded config file.
    ///
    /// # Arguments
    /// * `config` - Parsed config file
    /// * `config_path` - Where the config came from, for error messages
    /// * `region_override` - Region given on the command line, if any
    ///
    /// # Errors
    /// Returns `SbomError::MissingApiToken` when `api_token` is absent or blank
    pub fn resolve(
        config: ConfigFile,
        config_path: &Path,
        region_override: Option<&str>,
    ) -> Result<Self> {
        let api_token = config
            .api_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| SbomError::MissingApiToken {
                path: config_path.to_path_buf(),
            })?;

        let region = region_override
            .or(config.region.as_deref())
            .map(Region::resolve)
            .unwrap_or_default();

        Ok(Self {
            api_token,
            region,
            endpoints: ApiEndpoints::for_region(region),
        })
    }

    /// Loads and resolves the config file at `path`
    pub fn load(path: &Path, region_override: Option<&str>) -> Result<Self> {
        let config = load_config_from_path(path)?;
        Self::resolve(config, path, region_override)
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("api_token", &"<redacted>")
            .field("region", &self.region)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
