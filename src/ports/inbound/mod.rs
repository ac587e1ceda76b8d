/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod license_sniffing_port;

pub use license_sniffing_port::LicenseSniffingPort;
