use crate::application::dto::SniffOptions;
use crate::application::use_cases::SniffModuleUseCase;
use crate::license_detection::domain::{DependencyRecord, ModuleVisit};
use crate::ports::outbound::{MarkdownParser, ModuleFileSystem, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// Directory, relative to a module, holding its installed dependencies
pub const NESTED_DEPENDENCY_DIR: &str = "node_modules";

/// Entry of the nested dependency directory that is never a module
pub const EXCLUDED_ENTRY: &str = ".bin";

/// SniffTreeUseCase - walks an installed dependency tree
///
/// Pending modules are kept on a LIFO stack, so a module's dependencies
/// are visited before siblings pushed earlier. Records come back in
/// visitation order. Any failure aborts the walk; there is no partial result.
///
/// # Type Parameters
/// * `FS` - ModuleFileSystem implementation
/// * `MP` - MarkdownParser implementation
/// * `PR` - ProgressReporter implementation
pub struct SniffTreeUseCase<FS, MP, PR> {
    module_sniffer: SniffModuleUseCase<FS, MP>,
    progress_reporter: PR,
}

impl<FS, MP, PR> SniffTreeUseCase<FS, MP, PR>
where
    FS: ModuleFileSystem,
    MP: MarkdownParser,
    PR: ProgressReporter,
{
    /// Creates a new SniffTreeUseCase with injected dependencies
    pub fn new(module_sniffer: SniffModuleUseCase<FS, MP>, progress_reporter: PR) -> Self {
        Self {
            module_sniffer,
            progress_reporter,
        }
    }

    pub fn module_sniffer(&self) -> &SniffModuleUseCase<FS, MP> {
        &self.module_sniffer
    }

    /// Executes the tree walk rooted at `root_path`
    ///
    /// # Returns
    /// One DependencyRecord per visited module, in visitation order
    pub async fn execute(&self, root_path: &Path, options: &SniffOptions) -> Result<Vec<DependencyRecord>> {
        self.progress_reporter.report(&format!(
            "🔍 Scanning dependency tree from: {}",
            root_path.display()
        ));

        let mut pending = vec![ModuleVisit::root(root_path.to_path_buf())];
        let mut records = Vec::new();

        while let Some(visit) = pending.pop() {
            let record = self.visit_module(&visit, options).await?;
            self.progress_reporter
                .report_module(records.len() + 1, record.identity());
            if !record.is_known() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  No license found for {} ({})",
                    record.identity(),
                    record.module_path.display()
                ));
            }

            let children = self.discover_children(&visit.module_path, &record.dependency_chain).await?;
            pending.extend(children);
            records.push(record);
        }

        let unknown = records.iter().filter(|record| !record.is_known()).count();
        self.progress_reporter.report_completion(&format!(
            "✅ Scanned {} module(s), {} with an unknown license",
            records.len(),
            unknown
        ));

        Ok(records)
    }

    async fn visit_module(&self, visit: &ModuleVisit, options: &SniffOptions) -> Result<DependencyRecord> {
        let (license, manifest) = futures::try_join!(
            self.module_sniffer.execute(&visit.module_path, options),
            self.module_sniffer.read_manifest(&visit.module_path),
        )?;

        let mut chain = visit.parent_dependency_chain.clone();
        chain.push(manifest.identity());

        Ok(DependencyRecord::new(visit.module_path.clone(), license, chain))
    }

    /// Pending visits for every dependency installed under `module_path`.
    async fn discover_children(&self, module_path: &Path, chain: &[String]) -> Result<Vec<ModuleVisit>> {
        let nested_dir = module_path.join(NESTED_DEPENDENCY_DIR);
        let entries = self
            .module_sniffer
            .file_system()
            .list_directory_if_exists(&nested_dir)
            .await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry != EXCLUDED_ENTRY)
            .map(|entry| ModuleVisit::new(nested_dir.join(entry), chain.to_vec()))
            .collect())
    }
}
