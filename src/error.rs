use std::io;
use std::path::PathBuf;

/// Errors surfaced while wiring sinks, before any record flows.
///
/// Delivery failures after configuration never use this type; they stay
/// local to the failing sink.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid collector endpoint {endpoint}: {reason}")]
    Endpoint { endpoint: String, reason: String },

    #[error("cannot build http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("a log facade bridge is already installed: {0}")]
    BridgeInstalled(#[from] log::SetLoggerError),
}
