use crate::license_detection::domain::MarkdownBlock;

/// Heading spellings that introduce a license section
const LICENSE_HEADINGS: &[&str] = &["license", "licence"];

/// Separator placed between the blocks of an extracted section
const BLOCK_SEPARATOR: &str = "\n\n";

/// ReadmeSection extracts the license section of a parsed README
pub struct ReadmeSection;

impl ReadmeSection {
    /// Returns the blocks between the first license heading and the next
    /// heading of any level, joined with a blank line
    ///
    /// # Returns
    /// `None` when there is no license heading or nothing follows it
    pub fn extract(blocks: &[MarkdownBlock]) -> Option<String> {
        let start = blocks
            .iter()
            .position(|block| block.is_heading() && Self::is_license_heading(&block.text))?;

        let section: Vec<&str> = blocks[start + 1..]
            .iter()
            .take_while(|block| !block.is_heading())
            .map(|block| block.text.as_str())
            .collect();

        if section.is_empty() {
            None
        } else {
            Some(section.join(BLOCK_SEPARATOR))
        }
    }

    fn is_license_heading(text: &str) -> bool {
        let text = text.trim();
        LICENSE_HEADINGS
            .iter()
            .any(|heading| text.eq_ignore_ascii_case(heading))
    }
}
