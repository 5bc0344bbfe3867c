//! ForesightErrorCode trait for API boundary conversion.

/// Every error enum provides a stable, machine-readable code so that the
/// request-handling layer can map failures without parsing messages.
pub trait ForesightErrorCode {
    /// Returns the error code string (e.g., "SOURCE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the boundary error string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the API boundary.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const SOURCE_UNAVAILABLE: &str = "SOURCE_UNAVAILABLE";
pub const NOT_FOUND: &str = "NOT_FOUND";
