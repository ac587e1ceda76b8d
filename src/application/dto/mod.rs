/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod sniff_options;

pub use output_format::OutputFormat;
pub use sniff_options::SniffOptions;
