//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only file output.
///
/// Writes are buffered; `flush` pushes the buffer and syncs the file data to
/// disk. After [`Sink::close`] every write and flush fails with
/// [`LoggerError::SinkClosed`].
pub struct FileSink {
    path: PathBuf,
    name: String,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;

        Ok(Self::from_file(path, file))
    }

    /// Wrap an already opened file; `path` is used for naming only.
    pub fn from_file(path: impl Into<PathBuf>, file: File) -> Self {
        let path = path.into();
        Self {
            name: format!("file:{}", path.display()),
            path,
            writer: Some(BufWriter::new(file)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        let name = &self.name;
        self.writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed(name.clone()))
    }
}

impl Sink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer()?.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let writer = self.writer()?;
        writer.flush()?;
        writer.get_ref().sync_data()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn close(&mut self) -> Result<()> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| LoggerError::sink_closed(self.name.clone()))?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Some(ref mut writer) = self.writer {
            if let Err(e) = writer.flush() {
                eprintln!("[WARN] Failed to flush {} on drop: {}", self.name, e);
            }
        }
    }
}
