/// Kind of a top-level markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    CodeBlock,
    List,
    BlockQuote,
    Table,
    Html,
    Rule,
}

/// MarkdownBlock is one top-level block of a parsed markdown document
///
/// For headings `text` is the heading text and `depth` its level; for
/// every other kind `text` is the block's source as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownBlock {
    pub kind: BlockKind,
    pub depth: usize,
    pub text: String,
}

impl MarkdownBlock {
    pub fn heading(depth: usize, text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading,
            depth,
            text: text.into(),
        }
    }

    pub fn content(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            depth: 0,
            text: text.into(),
        }
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }
}
