//! Resolution errors.

/// Raised by [`crate::ConfigResolver::resolve`]. No partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A key starts with the HAL prefix but is neither the bare marker nor a
    /// named selection.
    #[error("Invalid MRBC_USE_HAL definition: {key} (expected MRBC_USE_HAL or MRBC_USE_HAL_<NAME>)")]
    InvalidHalSelection { key: String },
}
