use chrono::{DateTime, Utc};
use std::fmt;
use std::path::Path;

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured log event. Immutable once built; sinks only read it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub filename: String,
    pub line: u32,
    pub message: String,
}

impl LogRecord {
    /// Build a record for an event observed right now.
    ///
    /// `file` may be a full source path; only its base name is kept.
    pub fn new(
        level: Level,
        name: impl Into<String>,
        file: &str,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        let filename = Path::new(file)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.to_string());

        LogRecord {
            level,
            name: name.into(),
            timestamp: Utc::now(),
            filename,
            line,
            message: message.into(),
        }
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS,mmm`.
    pub fn asctime(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S,%3f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn level_names_are_upper_case() {
        assert_eq!(Level::Warning.as_str(), "WARNING");
        assert_eq!(Level::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn source_path_is_reduced_to_base_name() {
        let record = LogRecord::new(Level::Info, "flower", "src/server/round.rs", 42, "tick");
        assert_eq!(record.filename, "round.rs");
        assert_eq!(record.line, 42);
    }

    #[test]
    fn asctime_uses_comma_separated_millis() {
        let record = LogRecord::new(Level::Info, "flower", "a.rs", 1, "x");
        let text = record.asctime();
        assert_eq!(text.len(), 23);
        assert_eq!(&text[19..20], ",");
    }
}
