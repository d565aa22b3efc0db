//! Instruction Writer Port
//!
//! Outbound interface for persisting instruction batch files.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from instruction file writing.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure while writing the batch file.
    #[error("failed to write instruction file '{file_name}': {source}")]
    Io {
        /// Target file name.
        file_name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The export destination is not available.
    #[error("export destination unavailable: {message}")]
    DestinationUnavailable {
        /// Description of the failure.
        message: String,
    },

    /// The batch body could not be serialized.
    #[error("failed to serialize instruction batch: {message}")]
    Serialization {
        /// Description of the offending field.
        message: String,
    },
}

/// Port for writing instruction batch files.
///
/// Implementations must be atomic at file granularity: a file either
/// appears complete or not at all, never truncated.
#[async_trait]
pub trait InstructionWriterPort: Send + Sync {
    /// Write the batch body under the given file name.
    ///
    /// Returns the full path of the written file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    async fn write(&self, file_name: &str, body: &str) -> Result<PathBuf, ExportError>;
}
