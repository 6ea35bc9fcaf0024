//! Editor event sinks.
//!
//! Every dispatch produces one human-readable line; with debug snapshots enabled it also
//! produces a multi-line block. Sinks decide where those go: the `tracing` pipeline, or an
//! in-memory log a presentation layer can show newest-first.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::info;

pub const DEFAULT_LOG_CAPACITY: usize = 200;

pub trait EventSink {
    fn record(&mut self, line: &str);

    /// Records a group of lines that belongs together. The default records them one by one.
    fn record_block(&mut self, lines: &[String]) {
        for line in lines {
            self.record(line);
        }
    }
}

/// Forwards editor events to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, line: &str) {
        info!(target: "chipboard::editor", "{line}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub line: String,
}

/// Bounded in-memory log, newest entry first.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.line.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push_front(&mut self, at: DateTime<Utc>, line: &str) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(LogEntry {
            at,
            line: line.to_owned(),
        });
        self.entries.truncate(self.capacity);
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl EventSink for EventLog {
    fn record(&mut self, line: &str) {
        self.push_front(Utc::now(), line);
    }

    /// The block reads top to bottom in the log even though the log itself is newest-first.
    fn record_block(&mut self, lines: &[String]) {
        let at = Utc::now();
        for line in lines.iter().rev() {
            self.push_front(at, line);
        }
    }
}

#[cfg(test)]
#[path = "tests/log_tests.rs"]
mod tests;
