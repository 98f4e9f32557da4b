use crate::record::LogRecord;

/// Renders records into the single-line text form shared by the console
/// and file sinks.
///
/// The identifier is formatter state rather than record state: every
/// line produced by one formatter carries the same node label.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    identifier: String,
}

impl LineFormatter {
    pub fn new(identifier: impl Into<String>) -> Self {
        LineFormatter {
            identifier: identifier.into(),
        }
    }

    /// Produce the line for `record`, without a trailing newline.
    pub fn format(&self, record: &LogRecord) -> String {
        format!(
            "{} | {} {} {} | {}:{} | {}",
            self.identifier,
            record.level,
            record.name,
            record.asctime(),
            record.filename,
            record.line,
            record.message,
        )
    }
}
