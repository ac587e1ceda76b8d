pub mod readme_section;
pub mod strategy_chain;
pub mod template_renderer;
pub mod text_matcher;

pub use readme_section::ReadmeSection;
pub use strategy_chain::{first, first_known};
pub use template_renderer::TemplateRenderer;
pub use text_matcher::{TemplateMatch, TextMatcher, SIMILARITY_THRESHOLD};
