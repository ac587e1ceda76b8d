pub mod dependency_record;
pub mod license_catalog;
pub mod license_result;
pub mod manifest;
pub mod markdown_block;

pub use dependency_record::{DependencyRecord, ModuleVisit};
pub use license_catalog::{LicenseCatalog, LicenseTemplate};
pub use license_result::{LicenseResult, UNKNOWN_LICENSE};
pub use manifest::Manifest;
pub use markdown_block::{BlockKind, MarkdownBlock};
