//! license-sniffer - license detection for installed node modules
//!
//! This library identifies the license governing a module directory (a
//! directory with a `package.json` and, optionally, license text) and can do
//! so for every module of an installed `node_modules` tree. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_detection`): license results, the template
//!   catalog, manifest resolution and the text matcher
//! - **Application Layer** (`application`): module and tree sniffing use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_sniffer::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! let sniffer = LicenseSniffer::new(
//!     TokioFileSystem::new(),
//!     PulldownMarkdownParser::new(),
//!     StderrProgressReporter::new(),
//!     LicenseCatalog::global(),
//! );
//!
//! let license = sniffer
//!     .sniff_module(Path::new("node_modules/lodash"), &SniffOptions::default())
//!     .await?;
//! println!("{}", license);
//!
//! let records = sniffer.sniff_tree(Path::new("."), &SniffOptions::default()).await?;
//! println!("{}", JsonFormatter::new().format(&records)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_detection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, StdoutPresenter, TokioFileSystem,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::markdown::PulldownMarkdownParser;
    pub use crate::application::dto::{OutputFormat, SniffOptions};
    pub use crate::application::use_cases::{LicenseSniffer, SniffModuleUseCase, SniffTreeUseCase};
    pub use crate::license_detection::domain::{
        DependencyRecord, LicenseCatalog, LicenseResult, LicenseTemplate, Manifest, ModuleVisit,
    };
    pub use crate::license_detection::policies::ManifestLicensePolicy;
    pub use crate::license_detection::services::{TemplateRenderer, TextMatcher};
    pub use crate::ports::inbound::LicenseSniffingPort;
    pub use crate::ports::outbound::{
        MarkdownParser, ModuleFileSystem, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::SnifferError;
    pub use crate::shared::Result;
}
