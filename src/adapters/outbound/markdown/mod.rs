/// Markdown adapters
mod pulldown_parser;

pub use pulldown_parser::PulldownMarkdownParser;
