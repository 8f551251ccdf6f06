use crate::analyzer::LogAnalyzer;
use crate::shell::{Shell, ShellOptions};
use crate::theme::Theme;
use std::io::Cursor;

mod properties;

// Test utilities and helpers
pub(crate) struct TestUtils;

impl TestUtils {
    /// Six records: "Failed to connect to database" three times and
    /// "File not found: config.xml" twice under ERROR, plus one INFO.
    pub fn create_scenario_analyzer() -> LogAnalyzer {
        let mut analyzer = LogAnalyzer::new();
        analyzer.add_log("2024-01-15 08:10:45", "ERROR", "Failed to connect to database");
        analyzer.add_log("2024-01-15 08:15:12", "INFO", "User authentication successful");
        analyzer.add_log("2024-01-15 08:20:30", "ERROR", "Failed to connect to database");
        analyzer.add_log("2024-01-15 08:30:15", "ERROR", "File not found: config.xml");
        analyzer.add_log("2024-01-15 08:45:55", "ERROR", "Failed to connect to database");
        analyzer.add_log("2024-01-15 09:05:12", "ERROR", "File not found: config.xml");
        analyzer
    }

    pub fn plain_options() -> ShellOptions {
        ShellOptions {
            theme: Theme::plain(),
            case_sensitive: true,
            pause_after_action: false,
        }
    }

    /// Feeds `input` to a shell over `analyzer` and returns everything written.
    pub fn run_shell(analyzer: &mut LogAnalyzer, input: &str, options: ShellOptions) -> String {
        let mut output = Vec::new();
        Shell::new(analyzer, Cursor::new(input.as_bytes()), &mut output, options)
            .run()
            .expect("shell run over in-memory buffers");
        String::from_utf8(output).expect("shell output is UTF-8")
    }
}
