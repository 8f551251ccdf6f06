pub mod analyzer;
pub mod config;
pub mod error;
pub mod frequency;
pub mod matcher;
pub mod record;
pub mod shell;
pub mod store;
pub mod theme;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use analyzer::{LogAnalyzer, Report};
pub use config::Config;
pub use frequency::{FrequencyEntry, FrequencyIndex};
pub use matcher::Pattern;
pub use record::LogRecord;
pub use store::RecordStore;
