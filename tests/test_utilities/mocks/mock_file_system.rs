use async_trait::async_trait;
use license_sniffer::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// In-memory ModuleFileSystem for testing
///
/// Directories are implied by the files registered beneath them. Paths
/// added with `with_unreadable` exist but fail to read with an I/O error.
#[derive(Default, Clone)]
pub struct MockFileSystem {
    pub files: BTreeMap<PathBuf, String>,
    pub unreadable: BTreeSet<PathBuf>,
    pub should_fail: bool,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Registers `dir/package.json` with the given name, version and license.
    pub fn with_module(self, dir: impl Into<PathBuf>, name: &str, version: &str, license: &str) -> Self {
        let manifest = format!(
            r#"{{"name": "{}", "version": "{}", "license": "{}"}}"#,
            name, version, license
        );
        self.with_file(dir.into().join("package.json"), &manifest)
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    fn io_error(path: &Path) -> anyhow::Error {
        SnifferError::Io {
            path: path.to_path_buf(),
            details: "Mock file system failure".to_string(),
        }
        .into()
    }

    fn not_found(path: &Path) -> anyhow::Error {
        SnifferError::NotFound {
            path: path.to_path_buf(),
            hint: "Mock file system has no such path".to_string(),
        }
        .into()
    }
}

#[async_trait]
impl ModuleFileSystem for MockFileSystem {
    async fn read_text_file(&self, path: &Path) -> Result<String> {
        if self.should_fail || self.unreadable.contains(path) {
            return Err(Self::io_error(path));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    async fn file_exists(&self, path: &Path) -> bool {
        !self.should_fail && self.files.contains_key(path)
    }

    async fn list_directory(&self, path: &Path) -> Result<Vec<String>> {
        if self.should_fail {
            return Err(Self::io_error(path));
        }

        let entries: BTreeSet<String> = self
            .files
            .keys()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter_map(|relative| relative.components().next())
            .map(|first| first.as_os_str().to_string_lossy().into_owned())
            .collect();

        if entries.is_empty() {
            return Err(Self::not_found(path));
        }
        Ok(entries.into_iter().collect())
    }
}
