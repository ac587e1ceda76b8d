use crate::license_detection::domain::{BlockKind, MarkdownBlock};
use crate::ports::outbound::MarkdownParser;
use pulldown_cmark::{Event, Options, Parser, Tag};

/// PulldownMarkdownParser adapter built on pulldown-cmark
///
/// Only top-level blocks are reported. Content blocks keep their source
/// text verbatim (minus trailing whitespace) so license text read from a
/// README is compared as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownMarkdownParser;

impl PulldownMarkdownParser {
    pub fn new() -> Self {
        Self
    }

    fn kind_of(tag: &Tag<'_>) -> BlockKind {
        match tag {
            Tag::Heading { .. } => BlockKind::Heading,
            Tag::CodeBlock(_) => BlockKind::CodeBlock,
            Tag::List(_) => BlockKind::List,
            Tag::BlockQuote(_) => BlockKind::BlockQuote,
            Tag::Table(_) => BlockKind::Table,
            Tag::HtmlBlock => BlockKind::Html,
            _ => BlockKind::Paragraph,
        }
    }
}

impl MarkdownParser for PulldownMarkdownParser {
    fn parse(&self, text: &str) -> Vec<MarkdownBlock> {
        let mut blocks = Vec::new();
        let mut depth = 0usize;
        let mut heading: Option<(usize, String)> = None;

        for (event, range) in Parser::new_ext(text, Options::ENABLE_TABLES).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        if let Tag::Heading { level, .. } = tag {
                            heading = Some((level as usize, String::new()));
                        } else {
                            blocks.push(MarkdownBlock::content(
                                Self::kind_of(&tag),
                                text[range].trim_end(),
                            ));
                        }
                    }
                    depth += 1;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if let Some((level, title)) = heading.take() {
                            blocks.push(MarkdownBlock::heading(level, title.trim()));
                        }
                    }
                }
                Event::Text(fragment) | Event::Code(fragment) => {
                    if let Some((_, title)) = heading.as_mut() {
                        title.push_str(&fragment);
                    }
                }
                Event::Rule if depth == 0 => {
                    blocks.push(MarkdownBlock::content(BlockKind::Rule, text[range].trim_end()));
                }
                _ => {}
            }
        }

        blocks
    }
}
