use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::error::{ProbeError, Result};
use crate::request::FilePart;

/// Text file written to disk as the source of an upload
///
/// The file is left in place after the run.
#[derive(Debug, Clone)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `content` to `path`, replacing any existing file
    pub fn write(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        std::fs::write(&path, content)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote scratch file");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file back as a multipart file part
    pub fn file_part(&self, field_name: &str, content_type: &str) -> Result<FilePart> {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ProbeError::InvalidRequest(format!("{} has no file name", self.path.display())))?;

        Ok(FilePart {
            field_name: field_name.to_owned(),
            file_name: file_name.to_owned(),
            content_type: content_type.to_owned(),
            bytes: Bytes::from(std::fs::read(&self.path)?),
        })
    }
}
