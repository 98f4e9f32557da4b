use crate::record::{Level, LogRecord};
use crate::sink::LogSink;
use std::sync::RwLock;

struct SinkEntry {
    threshold: Level,
    sink: Box<dyn LogSink>,
}

/// Owns the set of sinks attached to one logging channel and broadcasts
/// every record to all of them.
///
/// `attach` appends. Configuring the same destination twice therefore
/// leaves two sinks in place, and every later record reaches both. The
/// dispatcher performs no I/O itself; each sink does its own.
pub struct Dispatcher {
    name: String,
    sinks: RwLock<Vec<SinkEntry>>,
}

impl Dispatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Dispatcher {
            name: name.into(),
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// Channel name stamped on records built by [`Dispatcher::log`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append `sink`, receiving every record at `threshold` or above.
    pub fn attach(&self, threshold: Level, sink: Box<dyn LogSink>) {
        let mut sinks = match self.sinks.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sinks.push(SinkEntry { threshold, sink });
    }

    /// Number of currently attached sinks.
    pub fn sink_count(&self) -> usize {
        match self.sinks.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Deliver `record` to every attached sink, in attachment order.
    ///
    /// A failing sink is reported on stderr and skipped; the remaining
    /// sinks still receive the record. Nothing propagates back to the
    /// logging call site, and a poisoned sink list is recovered rather
    /// than panicking.
    pub fn emit(&self, record: &LogRecord) {
        let sinks = match self.sinks.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for entry in sinks.iter() {
            if record.level < entry.threshold {
                continue;
            }
            if let Err(e) = entry.sink.send(record) {
                eprintln!("log sink delivery failed: {}", e);
            }
        }
    }

    /// Build a record on this dispatcher's channel and emit it.
    pub fn log(&self, level: Level, file: &str, line: u32, message: impl Into<String>) {
        let record = LogRecord::new(level, self.name.clone(), file, line, message);
        self.emit(&record);
    }
}
