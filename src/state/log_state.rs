//! LogState - Log Messages with Ring Buffer

use crate::helpers::BoundedDeque;
use chrono::{DateTime, Local};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff),  // Green
            LogLevel::Warn => gpui::rgba(0xf59e0bff),  // Yellow/Amber
            LogLevel::Error => gpui::rgba(0xef4444ff), // Red
            LogLevel::Debug => gpui::rgba(0x6b7280ff), // Gray
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for log messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: BoundedDeque<LogEntry>,
    next_id: u64,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Push a new log entry
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// Push a log entry with current timestamp
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    /// Iterate entries oldest to newest
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_state_caps_entries() {
        let mut state = LogState::new(2);
        state.push_now(LogLevel::Info, "one");
        state.push_now(LogLevel::Info, "two");
        state.push_now(LogLevel::Warn, "three");
        assert_eq!(state.len(), 2);
        let messages: Vec<_> = state.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_log_ids_monotonic() {
        let mut state = LogState::new(2);
        state.push_now(LogLevel::Info, "one");
        state.push_now(LogLevel::Info, "two");
        state.push_now(LogLevel::Info, "three");
        let ids: Vec<_> = state.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
