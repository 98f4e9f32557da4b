use crate::error::ConfigError;
use crate::format::LineFormatter;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Appends each record to a single log file.
///
/// The file is opened once at construction, created when absent and
/// never truncated. Writers within this process share one mutex, so
/// their lines do not interleave.
pub struct FileSink {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
    formatter: Arc<LineFormatter>,
}

impl FileSink {
    /// Open `path` for appending.
    ///
    /// An unwritable path surfaces here, at configuration time, instead
    /// of at the first write.
    pub fn new(path: &Path, formatter: Arc<LineFormatter>) -> Result<Self, ConfigError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(FileSink {
            file: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
            formatter,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut file = self.file.lock().map_err(|_| "log file mutex poisoned")?;
        writeln!(file, "{}", self.formatter.format(record))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut file = self.file.lock().map_err(|_| "log file mutex poisoned")?;
        file.flush()?;
        Ok(())
    }
}
