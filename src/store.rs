use crate::record::LogRecord;

/// Ordered, append-only collection of log records.
///
/// Records are kept and traversed in insertion order (oldest first).
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<LogRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    /// A fresh traversal over every live record. Each call is independent.
    pub fn traverse(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}
