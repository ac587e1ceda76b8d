use crate::license_detection::domain::DependencyRecord;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable reports
///
/// Emits a pretty-printed JSON array with one object per record
/// (`modulePath`, `names`, `text`, `dependencyChain`).
pub struct JsonFormatter {
    include_text: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { include_text: true }
    }

    /// Creates a formatter that drops license bodies from the output.
    pub fn without_text() -> Self {
        Self {
            include_text: false,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, records: &[DependencyRecord]) -> Result<String> {
        let output = if self.include_text {
            serde_json::to_string_pretty(records)?
        } else {
            let stripped: Vec<DependencyRecord> = records
                .iter()
                .cloned()
                .map(|record| DependencyRecord {
                    text: None,
                    ..record
                })
                .collect();
            serde_json::to_string_pretty(&stripped)?
        };
        Ok(output + "\n")
    }
}
