use crate::license_detection::domain::MarkdownBlock;

/// MarkdownParser port for splitting a document into top-level blocks
pub trait MarkdownParser: Send + Sync {
    /// Parses `text` into its top-level blocks, in document order
    fn parse(&self, text: &str) -> Vec<MarkdownBlock>;
}
