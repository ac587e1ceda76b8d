use crate::license_detection::domain::DependencyRecord;
use crate::shared::Result;

/// ReportFormatter port for rendering sniffing results
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the records of a module or tree sniff
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[DependencyRecord]) -> Result<String>;
}
