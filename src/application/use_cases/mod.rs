/// Use cases module containing application business logic orchestration
mod license_sniffer;
mod sniff_module;
mod sniff_tree;

pub use license_sniffer::LicenseSniffer;
pub use sniff_module::{SniffModuleUseCase, LICENSE_FILENAMES, README_FILENAME};
pub use sniff_tree::{SniffTreeUseCase, EXCLUDED_ENTRY, NESTED_DEPENDENCY_DIR};
