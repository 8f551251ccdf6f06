use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ingested log line. Fields are owned and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    timestamp: String,
    level: String,
    message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Only the two literal spellings "ERROR" and "error" count as an error
    /// level. "Error" does not.
    pub fn is_error(&self) -> bool {
        is_error_level(&self.level)
    }
}

pub fn is_error_level(level: &str) -> bool {
    level == "ERROR" || level == "error"
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.timestamp, self.level, self.message)
    }
}
