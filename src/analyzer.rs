use crate::frequency::{FrequencyEntry, FrequencyIndex};
use crate::matcher::Pattern;
use crate::record::LogRecord;
use crate::store::RecordStore;
use serde::Serialize;
use tracing::debug;

/// Fixed sample set loaded by [`LogAnalyzer::load_sample_data`].
pub const SAMPLE_LOGS: &[(&str, &str, &str)] = &[
    ("2024-01-15 08:00:00", "INFO", "Server started successfully"),
    ("2024-01-15 08:05:23", "WARNING", "High memory usage detected"),
    ("2024-01-15 08:10:45", "ERROR", "Failed to connect to database"),
    ("2024-01-15 08:15:12", "INFO", "User authentication successful"),
    ("2024-01-15 08:20:30", "ERROR", "Failed to connect to database"),
    ("2024-01-15 08:25:00", "DEBUG", "Processing request ID 12345"),
    ("2024-01-15 08:30:15", "ERROR", "File not found: config.xml"),
    ("2024-01-15 08:35:40", "INFO", "Cache cleared successfully"),
    ("2024-01-15 08:40:22", "WARNING", "Disk space below 10%"),
    ("2024-01-15 08:45:55", "ERROR", "Failed to connect to database"),
    ("2024-01-15 09:00:00", "INFO", "Database connection restored"),
    ("2024-01-15 09:05:12", "ERROR", "File not found: config.xml"),
    ("2024-01-15 09:10:30", "INFO", "User login successful"),
    ("2024-01-15 09:15:45", "WARNING", "Slow query detected"),
    ("2024-01-15 09:20:00", "ERROR", "Failed to connect to database"),
];

/// Serialisable snapshot of the analyzer's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_logs: usize,
    pub unique_errors: usize,
    pub frequencies: Vec<FrequencyEntry>,
}

/// Owns the record store and the error frequency index and answers queries
/// over them. Single-threaded; callers needing shared access must wrap the
/// whole analyzer in their own lock.
#[derive(Debug, Default)]
pub struct LogAnalyzer {
    store: RecordStore,
    errors: FrequencyIndex,
}

impl LogAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the record and, for "ERROR"/"error" levels, counts its message.
    pub fn add_log(&mut self, timestamp: &str, level: &str, message: &str) {
        let record = LogRecord::new(timestamp, level, message);
        if record.is_error() {
            self.errors.insert(record.message());
        }
        debug!(level, total = self.store.size() + 1, "ingested log record");
        self.store.insert(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &LogRecord> + '_ {
        self.store.traverse()
    }

    pub fn total_logs(&self) -> usize {
        self.store.size()
    }

    /// Number of distinct error messages seen.
    pub fn error_count(&self) -> usize {
        self.errors.total_distinct_keys()
    }

    pub fn error_occurrences(&self, message: &str) -> usize {
        self.errors.count_of(message)
    }

    pub fn frequency_report(&self) -> Vec<FrequencyEntry> {
        self.errors.all_entries().cloned().collect()
    }

    /// Total keyword occurrences across every record's message. Timestamps
    /// and levels are not searched. An empty keyword yields 0.
    pub fn search_keyword(&self, keyword: &str, case_sensitive: bool) -> usize {
        if keyword.is_empty() {
            return 0;
        }

        let pattern = Pattern::new(keyword, case_sensitive);
        let total = self
            .store
            .traverse()
            .map(|record| pattern.count(record.message()))
            .sum();
        debug!(keyword, case_sensitive, total, "keyword search");
        total
    }

    /// Records whose message contains the keyword at least once, in traversal
    /// order.
    pub fn matching_logs(&self, keyword: &str, case_sensitive: bool) -> Vec<&LogRecord> {
        self.matching_logs_indexed(keyword, case_sensitive)
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }

    /// Like [`matching_logs`](Self::matching_logs), paired with each record's
    /// 1-based position in the full traversal.
    pub fn matching_logs_indexed(
        &self,
        keyword: &str,
        case_sensitive: bool,
    ) -> Vec<(usize, &LogRecord)> {
        if keyword.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(keyword, case_sensitive);
        self.store
            .traverse()
            .enumerate()
            .filter(|(_, record)| pattern.is_match(record.message()))
            .map(|(i, record)| (i + 1, record))
            .collect()
    }

    /// Byte offsets of keyword matches inside `message`.
    pub fn highlight_positions(
        &self,
        message: &str,
        keyword: &str,
        case_sensitive: bool,
    ) -> Vec<usize> {
        Pattern::new(keyword, case_sensitive).positions(message)
    }

    pub fn report(&self) -> Report {
        Report {
            total_logs: self.total_logs(),
            unique_errors: self.error_count(),
            frequencies: self.frequency_report(),
        }
    }

    /// Empties the record store and the frequency index together.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.errors.clear();
        debug!("cleared all log data");
    }

    /// Replaces the current contents with [`SAMPLE_LOGS`].
    pub fn load_sample_data(&mut self) {
        self.clear_all();
        for (timestamp, level, message) in SAMPLE_LOGS {
            self.add_log(timestamp, level, message);
        }
    }
}
