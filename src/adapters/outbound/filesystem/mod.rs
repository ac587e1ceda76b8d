/// Filesystem adapters for file I/O operations
mod file_writer;
mod tokio_file_system;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use tokio_file_system::TokioFileSystem;
