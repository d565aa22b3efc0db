//! Filesystem instruction writer.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{ExportError, InstructionWriterPort};

/// Writes instruction batch files into a target directory.
///
/// Writes go to a temporary sibling first and are renamed into place,
/// so a crash mid-write never leaves a truncated batch file for the
/// bank upload to pick up.
#[derive(Debug, Clone)]
pub struct FsInstructionWriter {
    output_dir: PathBuf,
}

impl FsInstructionWriter {
    /// Create a writer targeting the given directory.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The configured output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn io_error(file_name: &str, source: std::io::Error) -> ExportError {
        ExportError::Io {
            file_name: file_name.to_string(),
            source,
        }
    }
}

#[async_trait]
impl InstructionWriterPort for FsInstructionWriter {
    async fn write(&self, file_name: &str, body: &str) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| Self::io_error(file_name, e))?;

        let final_path = self.output_dir.join(file_name);
        let tmp_path = self.output_dir.join(format!(".{file_name}.tmp"));

        tokio::fs::write(&tmp_path, body)
            .await
            .map_err(|e| Self::io_error(file_name, e))?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .map_err(|e| Self::io_error(file_name, e))?;

        Ok(final_path)
    }
}
