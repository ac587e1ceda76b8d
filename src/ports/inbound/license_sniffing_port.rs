use crate::application::dto::SniffOptions;
use crate::license_detection::domain::{DependencyRecord, LicenseResult};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// LicenseSniffingPort - Inbound port for license detection
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to identify licenses. It represents the application's public API.
#[async_trait]
pub trait LicenseSniffingPort: Send + Sync {
    /// Identifies the license of the module at `module_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The module's package.json does not exist (`NotFound`)
    /// - The package.json is malformed (`ParseError`)
    /// - Any file cannot be read for a reason other than absence (`Io`)
    async fn sniff_module(&self, module_path: &Path, options: &SniffOptions)
        -> Result<LicenseResult>;

    /// Identifies the license of the module at `root_path` and of every
    /// module installed beneath it, one record per module
    ///
    /// # Errors
    /// Any error while sniffing any module aborts the whole walk
    async fn sniff_tree(
        &self,
        root_path: &Path,
        options: &SniffOptions,
    ) -> Result<Vec<DependencyRecord>>;

    /// Reads license names from a parsed manifest (no text)
    fn resolve_manifest_licenses(&self, manifest: &Value) -> LicenseResult;

    /// Reads license names from manifest JSON text (no text)
    ///
    /// # Errors
    /// Returns `ParseError` if `manifest_json` is not valid JSON
    fn resolve_manifest_licenses_str(&self, manifest_json: &str) -> Result<LicenseResult>;
}
