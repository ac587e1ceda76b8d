//! License detection core: domain values, pure services and selection policies
pub mod domain;
pub mod policies;
pub mod services;
