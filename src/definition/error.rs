//! Definition error types.

use thiserror::Error;

/// Errors that can occur when encoding or decoding graph definitions
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Definition version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
