/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, markdown parsing, console, etc.).
pub mod markdown_parser;
pub mod module_file_system;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use markdown_parser::MarkdownParser;
pub use module_file_system::ModuleFileSystem;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
