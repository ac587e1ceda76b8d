use crate::ports::outbound::ModuleFileSystem;
use crate::shared::error::SnifferError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// TokioFileSystem adapter for reading module directories from disk
///
/// This adapter implements the ModuleFileSystem port on top of `tokio::fs`.
/// Raw `io::Error`s are classified into `SnifferError::NotFound` and
/// `SnifferError::Io`.
#[derive(Debug, Clone, Copy)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleFileSystem for TokioFileSystem {
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing.
    async fn read_text_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| SnifferError::from_io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn file_exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn list_directory(&self, path: &Path) -> Result<Vec<String>> {
        let mut reader = fs::read_dir(path)
            .await
            .map_err(|e| SnifferError::from_io(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| SnifferError::from_io(path, e))?
        {
            entries.push(entry.file_name().to_string_lossy().into_owned());
        }

        // read_dir order is platform dependent
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_text_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("LICENSE");
        std_fs::write(&path, "license text").unwrap();

        let content = TokioFileSystem::new().read_text_file(&path).await.unwrap();
        assert_eq!(content, "license text");
    }

    #[tokio::test]
    async fn test_read_text_file_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("LICENSE");
        std_fs::write(&path, b"Copyright (c) Ren\xe9 Dupont").unwrap();

        let content = TokioFileSystem::new().read_text_file(&path).await.unwrap();
        assert_eq!(content, "Copyright (c) Ren\u{FFFD} Dupont");
    }

    #[tokio::test]
    async fn test_read_text_file_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = TokioFileSystem::new()
            .read_text_file(&temp_dir.path().join("package.json"))
            .await
            .unwrap_err();
        assert!(SnifferError::is_not_found(&err));
    }

    #[tokio::test]
    async fn test_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        std_fs::write(&path, "# readme").unwrap();

        let fs = TokioFileSystem::new();
        assert!(fs.file_exists(&path).await);
        assert!(!fs.file_exists(&temp_dir.path().join("LICENSE")).await);
    }

    #[tokio::test]
    async fn test_list_directory_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b", "a", "c"] {
            std_fs::create_dir(temp_dir.path().join(name)).unwrap();
        }

        let entries = TokioFileSystem::new()
            .list_directory(temp_dir.path())
            .await
            .unwrap();
        assert_eq!(entries, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_list_directory_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("node_modules");

        let fs = TokioFileSystem::new();
        let err = fs.list_directory(&missing).await.unwrap_err();
        assert!(SnifferError::is_not_found(&err));

        let entries = fs.list_directory_if_exists(&missing).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_list_directory_if_exists_propagates_other_errors() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        std_fs::write(&file, "x").unwrap();

        let result = TokioFileSystem::new().list_directory_if_exists(&file).await;
        assert!(result.is_err());
        assert!(!SnifferError::is_not_found(&result.unwrap_err()));
    }
}
