/// Ports (interfaces) between the license detection core and the outside world
pub mod inbound;
pub mod outbound;
