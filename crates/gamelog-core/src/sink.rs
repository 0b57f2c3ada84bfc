//! Sinks consume fully rendered messages.

use crate::severity::Severity;
use log::Level;
use parking_lot::Mutex;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// The `log` target used by [`LogSink`]
pub const LOG_TARGET: &str = "gamelog";

/// Consumes a rendered, decorated message.
pub trait Sink: Send + Sync {
    fn write(&self, message: &str);
}

impl<F: Fn(&str) + Send + Sync> Sink for F {
    fn write(&self, message: &str) {
        (self)(message)
    }
}

/// Forwards messages to the [`log`] crate with the [`LOG_TARGET`] target.
#[derive(Debug, Copy, Clone)]
pub struct LogSink {
    level: Level,
}

impl LogSink {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// The sink used for a severity
    pub fn for_severity(severity: Severity) -> Self {
        Self::new(severity.into())
    }
}

impl Sink for LogSink {
    fn write(&self, message: &str) {
        log::log!(target: LOG_TARGET, self.level, "{}", message);
    }
}

/// Drops every message
#[derive(Debug, Default, Copy, Clone)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn write(&self, _message: &str) {}
}

/// Keeps every message it receives in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the received messages, in the order they were received
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// The number of received messages
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// The sinks of all three severities.
#[derive(Clone)]
pub struct Sinks {
    pub info: Arc<dyn Sink>,
    pub warning: Arc<dyn Sink>,
    pub error: Arc<dyn Sink>,
}

impl Sinks {
    pub fn new(info: Arc<dyn Sink>, warning: Arc<dyn Sink>, error: Arc<dyn Sink>) -> Self {
        Self {
            info,
            warning,
            error,
        }
    }

    /// Uses the same sink for every severity
    pub fn uniform(sink: Arc<dyn Sink>) -> Self {
        Self::new(sink.clone(), sink.clone(), sink)
    }

    /// Sinks that forward to the `log` crate
    pub fn log() -> Self {
        Self::new(
            Arc::new(LogSink::for_severity(Severity::Info)),
            Arc::new(LogSink::for_severity(Severity::Warning)),
            Arc::new(LogSink::for_severity(Severity::Error)),
        )
    }

    /// Sinks that drop everything
    pub fn discard() -> Self {
        Self::uniform(Arc::new(DiscardSink))
    }

    /// Gets the sink of a severity
    pub fn get(&self, severity: Severity) -> &Arc<dyn Sink> {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    /// Replaces the sink of a severity
    pub fn set(&mut self, severity: Severity, sink: Arc<dyn Sink>) {
        match severity {
            Severity::Info => self.info = sink,
            Severity::Warning => self.warning = sink,
            Severity::Error => self.error = sink,
        }
    }
}

impl Default for Sinks {
    fn default() -> Self {
        Self::log()
    }
}

impl Debug for Sinks {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sinks").finish_non_exhaustive()
    }
}
