use crate::format::LineFormatter;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::error::Error;
use std::io::Write;
use std::sync::Arc;

/// Writes each record to stdout, one line per record.
///
/// Every call flushes, so an operator tailing the process output sees
/// the line as soon as `send` returns.
pub struct ConsoleSink {
    formatter: Arc<LineFormatter>,
}

impl ConsoleSink {
    pub fn new(formatter: Arc<LineFormatter>) -> Self {
        ConsoleSink { formatter }
    }
}

impl LogSink for ConsoleSink {
    fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", self.formatter.format(record))?;
        out.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        std::io::stdout().lock().flush()?;
        Ok(())
    }
}
