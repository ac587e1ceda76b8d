use crate::application::dto::SniffOptions;
use crate::application::use_cases::{SniffModuleUseCase, SniffTreeUseCase};
use crate::license_detection::domain::manifest::MANIFEST_FILENAME;
use crate::license_detection::domain::{DependencyRecord, LicenseCatalog, LicenseResult, Manifest};
use crate::license_detection::policies::ManifestLicensePolicy;
use crate::ports::inbound::LicenseSniffingPort;
use crate::ports::outbound::{MarkdownParser, ModuleFileSystem, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// LicenseSniffer - the application's public entry point
///
/// Wires the module and tree use cases behind [`LicenseSniffingPort`].
pub struct LicenseSniffer<FS, MP, PR> {
    tree: SniffTreeUseCase<FS, MP, PR>,
}

impl<FS, MP, PR> LicenseSniffer<FS, MP, PR>
where
    FS: ModuleFileSystem,
    MP: MarkdownParser,
    PR: ProgressReporter,
{
    pub fn new(file_system: FS, markdown_parser: MP, progress_reporter: PR, catalog: Arc<LicenseCatalog>) -> Self {
        let module = SniffModuleUseCase::new(file_system, markdown_parser, catalog);
        Self {
            tree: SniffTreeUseCase::new(module, progress_reporter),
        }
    }
}

#[async_trait]
impl<FS, MP, PR> LicenseSniffingPort for LicenseSniffer<FS, MP, PR>
where
    FS: ModuleFileSystem,
    MP: MarkdownParser,
    PR: ProgressReporter,
{
    async fn sniff_module(&self, module_path: &Path, options: &SniffOptions) -> Result<LicenseResult> {
        self.tree.module_sniffer().execute(module_path, options).await
    }

    async fn sniff_tree(&self, root_path: &Path, options: &SniffOptions) -> Result<Vec<DependencyRecord>> {
        self.tree.execute(root_path, options).await
    }

    fn resolve_manifest_licenses(&self, manifest: &Value) -> LicenseResult {
        ManifestLicensePolicy::create_license_result(&Manifest::from_value(manifest))
    }

    fn resolve_manifest_licenses_str(&self, manifest_json: &str) -> Result<LicenseResult> {
        let manifest = Manifest::parse(manifest_json, Path::new(MANIFEST_FILENAME))?;
        Ok(ManifestLicensePolicy::create_license_result(&manifest))
    }
}
