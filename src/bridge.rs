use crate::error::ConfigError;
use crate::init::{dispatcher, LOGGER_NAME};
use crate::record::{Level, LogRecord};

/// Routes records from the `log` crate facade into the process-wide
/// dispatcher, so dependencies logging via `log::warn!` and friends
/// reach the same sinks as [`crate::log!`].
pub struct LogBridge;

fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Trace | log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warning,
        log::Level::Error => Level::Error,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let translated = LogRecord::new(
            map_level(record.level()),
            LOGGER_NAME,
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            record.args().to_string(),
        );
        dispatcher().emit(&translated);
    }

    fn flush(&self) {}
}

/// Install [`LogBridge`] as the global `log` logger.
///
/// Fails when another facade logger is already installed; at most one
/// can exist per process.
pub fn install() -> Result<(), ConfigError> {
    log::set_boxed_logger(Box::new(LogBridge))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_levels_map_onto_record_levels() {
        assert_eq!(map_level(log::Level::Trace), Level::Debug);
        assert_eq!(map_level(log::Level::Debug), Level::Debug);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Warn), Level::Warning);
        assert_eq!(map_level(log::Level::Error), Level::Error);
    }
}
