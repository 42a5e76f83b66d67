//! ConsorteErrorCode trait for host-boundary conversion.

/// Trait for converting Consorte errors to structured error codes.
/// Every error enum implements this so the host UI layer can switch on
/// a stable string instead of matching display text.
pub trait ConsorteErrorCode {
    /// Returns the stable error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
