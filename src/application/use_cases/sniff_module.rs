use crate::application::dto::SniffOptions;
use crate::license_detection::domain::manifest::MANIFEST_FILENAME;
use crate::license_detection::domain::{LicenseCatalog, LicenseResult, Manifest};
use crate::license_detection::policies::ManifestLicensePolicy;
use crate::license_detection::services::{first_known, ReadmeSection, TemplateRenderer, TextMatcher};
use crate::ports::outbound::{MarkdownParser, ModuleFileSystem};
use crate::shared::Result;
use futures::future::BoxFuture;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// License files probed in order; the first one that exists wins
pub const LICENSE_FILENAMES: &[&str] = &["LICENSE", "UNLICENSE", "LICENSE.txt", "UNLICENSE.txt"];

/// README file name, matched case-insensitively against the module's entries
pub const README_FILENAME: &str = "readme.md";

/// Detection strategies in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Manifest,
    LicenseFile,
    Readme,
}

const STRATEGIES: [Strategy; 3] = [Strategy::Manifest, Strategy::LicenseFile, Strategy::Readme];

/// SniffModuleUseCase - identifies the license of a single module directory
///
/// Three strategies run in a fixed order and the first known result wins:
/// 1. the manifest's `license`/`licenses` fields, with text read from a
///    license file or README section (or rendered from a template)
/// 2. a license file classified by the text matcher
/// 3. the README's license section classified by the text matcher
///
/// # Type Parameters
/// * `FS` - ModuleFileSystem implementation
/// * `MP` - MarkdownParser implementation
pub struct SniffModuleUseCase<FS, MP> {
    file_system: FS,
    markdown_parser: MP,
    matcher: TextMatcher,
    renderer: TemplateRenderer,
}

impl<FS, MP> SniffModuleUseCase<FS, MP>
where
    FS: ModuleFileSystem,
    MP: MarkdownParser,
{
    /// Creates a new SniffModuleUseCase with injected dependencies
    pub fn new(file_system: FS, markdown_parser: MP, catalog: Arc<LicenseCatalog>) -> Self {
        Self {
            file_system,
            markdown_parser,
            matcher: TextMatcher::new(catalog.clone()),
            renderer: TemplateRenderer::new(catalog),
        }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Identifies the license of the module at `module_path`
    ///
    /// # Errors
    /// Returns `NotFound` if the module has no package.json, `ParseError`
    /// if it is malformed, and `Io` for any other read failure
    pub async fn execute(&self, module_path: &Path, options: &SniffOptions) -> Result<LicenseResult> {
        let options = *options;
        first_known(STRATEGIES, |strategy| self.run_strategy(strategy, module_path, options)).await
    }

    /// Reads and parses the module's package.json
    pub async fn read_manifest(&self, module_path: &Path) -> Result<Manifest> {
        let manifest_path = module_path.join(MANIFEST_FILENAME);
        let content = self.file_system.read_text_file(&manifest_path).await?;
        Manifest::parse(&content, &manifest_path)
    }

    /// Runs one strategy as a boxed `Send` future.
    fn run_strategy<'a>(
        &'a self,
        strategy: Strategy,
        module_path: &'a Path,
        options: SniffOptions,
    ) -> BoxFuture<'a, Result<LicenseResult>> {
        Box::pin(async move {
            match strategy {
                Strategy::Manifest => self.sniff_manifest(module_path, options).await,
                Strategy::LicenseFile => self.sniff_license_file(module_path).await,
                Strategy::Readme => self.sniff_readme(module_path).await,
            }
        })
    }

    async fn sniff_manifest(&self, module_path: &Path, options: SniffOptions) -> Result<LicenseResult> {
        let manifest = self.read_manifest(module_path).await?;
        let declared = ManifestLicensePolicy::create_license_result(&manifest);
        if !declared.is_known() {
            return Ok(declared);
        }

        let text = match self.read_license_text(module_path).await? {
            Some(text) => Some(text),
            None if options.generate_body => {
                let holder = Self::copyright_holder(&manifest, module_path);
                self.renderer.render_first(declared.names(), &holder)
            }
            None => None,
        };

        Ok(declared.with_text(text))
    }

    async fn sniff_license_file(&self, module_path: &Path) -> Result<LicenseResult> {
        match self.find_license_file(module_path).await? {
            Some(path) => {
                let text = self.file_system.read_text_file(&path).await?;
                Ok(self.matcher.classify(&text))
            }
            None => Ok(LicenseResult::unknown()),
        }
    }

    async fn sniff_readme(&self, module_path: &Path) -> Result<LicenseResult> {
        Ok(match self.read_readme_section(module_path).await? {
            Some(section) => self.matcher.classify(&section),
            None => LicenseResult::unknown(),
        })
    }

    /// Literal license text on disk: a license file, else a README section.
    async fn read_license_text(&self, module_path: &Path) -> Result<Option<String>> {
        if let Some(path) = self.find_license_file(module_path).await? {
            return Ok(Some(self.file_system.read_text_file(&path).await?));
        }
        self.read_readme_section(module_path).await
    }

    async fn find_license_file(&self, module_path: &Path) -> Result<Option<PathBuf>> {
        let candidates: Vec<PathBuf> = LICENSE_FILENAMES
            .iter()
            .map(|name| module_path.join(name))
            .collect();

        for candidate in candidates {
            if self.file_system.file_exists(&candidate).await {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    async fn read_readme_section(&self, module_path: &Path) -> Result<Option<String>> {
        let Some(readme_path) = self.find_readme(module_path).await? else {
            return Ok(None);
        };
        let content = self.file_system.read_text_file(&readme_path).await?;
        let blocks = self.markdown_parser.parse(&content);
        Ok(ReadmeSection::extract(&blocks))
    }

    /// First sorted entry matching `readme.md` in any case.
    async fn find_readme(&self, module_path: &Path) -> Result<Option<PathBuf>> {
        let entries = self.file_system.list_directory_if_exists(module_path).await?;
        Ok(entries
            .iter()
            .find(|entry| entry.eq_ignore_ascii_case(README_FILENAME))
            .map(|name| module_path.join(name)))
    }

    /// The manifest's name, or the directory name when the manifest has none.
    fn copyright_holder(manifest: &Manifest, module_path: &Path) -> String {
        manifest.name.clone().unwrap_or_else(|| {
            module_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
