/// Mock implementations for testing
mod mock_file_system;
mod mock_progress_reporter;

pub use mock_file_system::MockFileSystem;
pub use mock_progress_reporter::MockProgressReporter;
