//! Local file data source.

use super::DataSource;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a file source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists at the path.
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    /// The path names a directory or other non-regular file.
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    /// Any other I/O failure.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Reads the whole content of a local file on demand.
///
/// Missing, unreadable and empty files are all reported as no data
/// available. The underlying reason is logged at debug level and can be
/// retrieved with [`FileSource::read`].
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file, distinguishing read failures from content.
    pub fn read(&self) -> Result<Vec<u8>, SourceError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| self.map_io(e))?;
        if !metadata.is_file() {
            return Err(SourceError::NotAFile(self.path.clone()));
        }
        std::fs::read(&self.path).map_err(|e| self.map_io(e))
    }

    fn map_io(&self, error: io::Error) -> SourceError {
        match error.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(self.path.clone()),
            _ => SourceError::Io {
                path: self.path.clone(),
                source: error,
            },
        }
    }
}

impl DataSource for FileSource {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        match self.read() {
            Ok(data) if data.is_empty() => {
                tracing::debug!(path = %self.path.display(), "File is empty, no data to classify");
                None
            }
            Ok(data) => Some(Cow::Owned(data)),
            Err(e) => {
                tracing::debug!(error = %e, "Getting file content failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::{tempdir, TempDir};

    fn scratch_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_reads_file_content() {
        let (_dir, path) = scratch_file("content.bin", b"hello");
        let source = FileSource::new(&path);

        assert_eq!(source.content().unwrap().as_ref(), b"hello");
    }

    #[test]
    fn test_empty_file_has_no_data() {
        let (_dir, path) = scratch_file("empty.bin", b"");
        let source = FileSource::new(&path);

        assert!(source.read().unwrap().is_empty());
        assert!(source.content().is_none());
    }

    #[test]
    fn test_missing_file() {
        let source = FileSource::new("/nonexistent/entropy-classifier/missing.bin");

        assert!(matches!(source.read(), Err(SourceError::NotFound(_))));
        assert!(source.content().is_none());
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(matches!(source.read(), Err(SourceError::NotAFile(_))));
    }
}
