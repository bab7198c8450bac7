//! Local file destination.

use crate::sink::{RowDestination, SinkError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination writing batches to a local file in append mode.
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    /// Create a destination for the given path. Nothing is touched until
    /// [`RowDestination::reset`] or the first append.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowDestination for FileDestination {
    fn reset(&mut self) -> Result<(), SinkError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SinkError::Io(e)),
        }
    }

    fn append_batch(&mut self, text: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BatchedSink;
    use tempfile::TempDir;

    #[test]
    fn test_reset_is_idempotent_when_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let mut destination = FileDestination::new(temp_dir.path().join("missing.csv"));

        destination.reset().unwrap();
        destination.reset().unwrap();
    }

    #[test]
    fn test_reset_removes_an_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        std::fs::write(&path, "stale").unwrap();

        let mut destination = FileDestination::new(&path);
        destination.reset().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_append_creates_then_extends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        let mut destination = FileDestination::new(&path);
        destination.append_batch("a\r\n").unwrap();
        destination.append_batch("b\r\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a\r\nb\r\n");
    }

    #[test]
    fn test_batched_sink_writes_a_file_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        let mut destination = FileDestination::new(&path);
        destination.reset().unwrap();

        let mut sink = BatchedSink::new(destination, 2);
        for i in 0..5 {
            sink.push(format!("row{i}")).unwrap();
        }
        let (destination, written) = sink.finish().unwrap();

        assert_eq!(written, 5);
        let content = std::fs::read_to_string(destination.path()).unwrap();
        assert_eq!(content, "row0\r\nrow1\r\nrow2\r\nrow3\r\nrow4\r\n");
    }
}
