//! Error types for the Consorte quota engine.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::ConsorteErrorCode;
