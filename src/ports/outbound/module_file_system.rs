use crate::shared::error::SnifferError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ModuleFileSystem port for the read-only file access the sniffer needs
///
/// Failures are reported as `SnifferError::NotFound` when the path does
/// not exist and `SnifferError::Io` otherwise, so callers can tell an
/// absent directory from a broken one.
///
/// # Async Support
/// All methods are async. Implementations must be `Send + Sync` so module
/// sniffing can be shared across tasks.
#[async_trait]
pub trait ModuleFileSystem: Send + Sync {
    /// Reads a whole file as UTF-8 text; invalid sequences are replaced, not rejected
    ///
    /// # Errors
    /// Returns `NotFound` if the file is missing, `Io` for any other failure
    async fn read_text_file(&self, path: &Path) -> Result<String>;

    /// Reports whether a file exists; any stat failure counts as "no"
    async fn file_exists(&self, path: &Path) -> bool;

    /// Lists the entry names of a directory, sorted
    ///
    /// # Errors
    /// Returns `NotFound` if the directory is missing, `Io` for any other failure
    async fn list_directory(&self, path: &Path) -> Result<Vec<String>>;

    /// Like [`list_directory`](Self::list_directory), but an absent
    /// directory is an empty listing
    ///
    /// # Errors
    /// Returns any failure other than `NotFound`
    async fn list_directory_if_exists(&self, path: &Path) -> Result<Vec<String>> {
        match self.list_directory(path).await {
            Ok(entries) => Ok(entries),
            Err(err) if SnifferError::is_not_found(&err) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}
