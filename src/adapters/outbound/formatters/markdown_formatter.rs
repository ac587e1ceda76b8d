use crate::license_detection::domain::DependencyRecord;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for module license information
const TABLE_HEADER: &str = "| Module | License | Dependency Chain |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|--------|---------|------------------|\n";

/// MarkdownFormatter adapter for human-readable license reports
///
/// This adapter implements the ReportFormatter port for Markdown format:
/// a summary line followed by one table row per module.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// `name@version`, or the module path for records without a chain.
    fn module_label(record: &DependencyRecord) -> String {
        match record.identity() {
            "" => record.module_path.display().to_string(),
            identity => identity.to_string(),
        }
    }

    fn render_summary(output: &mut String, records: &[DependencyRecord]) {
        let unknown = records.iter().filter(|r| !r.is_known()).count();
        output.push_str(&format!(
            "{} module(s) scanned, {} with an unknown license.\n\n",
            records.len(),
            unknown
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, records: &[DependencyRecord]) -> Result<String> {
        let mut output = String::from("# License Report\n\n");
        Self::render_summary(&mut output, records);

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for record in records {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&Self::module_label(record)),
                Self::escape_markdown_table_cell(&record.license().to_string()),
                Self::escape_markdown_table_cell(&record.dependency_chain.join(" > "))
            ));
        }

        Ok(output)
    }
}
