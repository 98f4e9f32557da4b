use crate::console::ConsoleSink;
use crate::dispatcher::Dispatcher;
use crate::error::ConfigError;
use crate::file::FileSink;
use crate::format::LineFormatter;
use crate::http::{HttpConfig, HttpSink};
use crate::record::{Level, LogRecord};
use lazy_static::lazy_static;
use reqwest::Method;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Channel name shared by every record this process emits.
pub const LOGGER_NAME: &str = "flower";

lazy_static! {
    static ref DISPATCHER: Dispatcher = Dispatcher::new(LOGGER_NAME);
}

/// The process-wide dispatcher behind [`configure`] and [`log`].
///
/// Created on first touch and never torn down; sinks attached to it
/// live until the process exits.
pub fn dispatcher() -> &'static Dispatcher {
    &DISPATCHER
}

/// Attach the standard sink set for this process.
///
/// **Parameters**
/// - `identifier`: node or run label stamped on every output line and
///   payload.
/// - `file_path`: when given, additionally append every line to this
///   file.
/// - `remote_host`: when given, additionally POST every record to
///   `http://{remote_host}/log`.
///
/// A console sink is always attached, and every sink receives every
/// level. Calling `configure` again appends further sinks instead of
/// replacing the existing ones, so each record is then delivered once
/// per attached sink.
///
/// **Returns**
/// - `Err(..)` when the file cannot be opened or the host does not
///   form a valid endpoint. Sinks attached before the failing one stay
///   attached.
pub fn configure(
    identifier: &str,
    file_path: Option<&Path>,
    remote_host: Option<&str>,
) -> Result<(), ConfigError> {
    let formatter = Arc::new(LineFormatter::new(identifier));
    let dispatcher = dispatcher();

    dispatcher.attach(
        Level::Debug,
        Box::new(ConsoleSink::new(Arc::clone(&formatter))),
    );

    if let Some(path) = file_path {
        let sink = FileSink::new(path, Arc::clone(&formatter))?;
        dispatcher.attach(Level::Debug, Box::new(sink));
    }

    if let Some(host) = remote_host {
        let mut config = HttpConfig::new(host);
        config.method = Method::POST;
        let sink = HttpSink::new(identifier, config)?;
        dispatcher.attach(Level::Debug, Box::new(sink));
    }

    Ok(())
}

/// Emit one record through the process-wide dispatcher.
///
/// Prefer the [`log!`](crate::log!) macro, which fills in `file` and
/// `line` from the call site.
pub fn log(level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let record = LogRecord::new(level, LOGGER_NAME, file, line, args.to_string());
    DISPATCHER.emit(&record);
}

/// Log a formatted message through the process-wide dispatcher.
///
/// ```
/// use flower_log::record::Level;
///
/// flower_log::log!(Level::Info, "round {} started", 3);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::init::log($level, file!(), line!(), format_args!($($arg)+))
    };
}
