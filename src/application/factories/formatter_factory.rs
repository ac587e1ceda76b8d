use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Keeps the choice of formatter adapter out of the CLI.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use license_sniffer::application::dto::OutputFormat;
    /// use license_sniffer::application::factories::FormatterFactory;
    /// use license_sniffer::ports::outbound::ReportFormatter;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// assert_eq!(formatter.format(&[]).unwrap(), "[]\n");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON license report...",
            OutputFormat::Markdown => "📝 Generating Markdown license report...",
        }
    }
}
