//! Core foundation for the Consorte quota engine: constants, error
//! enums, engine configuration, money and collection types, and
//! tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
