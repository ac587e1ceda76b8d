/// Application layer - use cases and the objects that feed them
pub mod dto;
pub mod factories;
pub mod use_cases;

pub use use_cases::LicenseSniffer;
