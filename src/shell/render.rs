//! Text rendering for the interactive shell. Every function returns the full
//! block of output so the shell loop only has to write it.

use crate::frequency::FrequencyEntry;
use crate::record::LogRecord;
use crate::theme::Theme;

const RULE: &str = "========================================";

pub fn menu(theme: &Theme, case_sensitive: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("    {}\n", theme.header.paint("Smart Log Analyzer")));
    out.push_str(RULE);
    out.push('\n');
    for item in super::menu::MenuChoice::ALL {
        out.push_str(&format!("{}. {}", item.number(), item.label()));
        if *item == super::menu::MenuChoice::ToggleCase {
            out.push_str(&format!(
                " (currently: {})",
                if case_sensitive { "ON" } else { "OFF" }
            ));
        }
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Enter your choice: ");
    out
}

/// Splits `message` into alternating plain/highlighted segments. Overlapping
/// matches are merged into one highlighted span.
fn highlight(message: &str, positions: &[usize], len: usize, theme: &Theme) -> String {
    if positions.is_empty() || len == 0 {
        return message.to_string();
    }

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for &start in positions {
        let end = start + len;
        match spans.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => spans.push((start, end)),
        }
    }

    let mut out = String::new();
    let mut cursor = 0;
    for (start, end) in spans {
        let (Some(before), Some(matched)) = (message.get(cursor..start), message.get(start..end))
        else {
            return message.to_string();
        };
        out.push_str(before);
        out.push_str(&theme.highlight.paint(matched));
        cursor = end;
    }
    out.push_str(message.get(cursor..).unwrap_or_default());
    out
}

/// `[index] timestamp [LEVEL] message`, with optional keyword highlighting.
pub fn log_line(
    index: usize,
    record: &LogRecord,
    theme: &Theme,
    highlights: &[usize],
    keyword_len: usize,
) -> String {
    format!(
        "[{}] {} [{}] {}\n",
        index,
        theme.timestamp.paint(record.timestamp()),
        theme.for_level(record.level()).paint(record.level()),
        highlight(record.message(), highlights, keyword_len, theme)
    )
}

pub fn all_logs<'a>(records: impl IntoIterator<Item = &'a LogRecord>, theme: &Theme) -> String {
    let mut body = String::new();
    let mut total = 0;
    for (i, record) in records.into_iter().enumerate() {
        body.push_str(&log_line(i + 1, record, theme, &[], 0));
        total += 1;
    }

    if total == 0 {
        return "No log entries found.\n".to_string();
    }

    format!(
        "\n{}\n{}\nTotal entries: {}\n",
        theme.header.paint("=== All Log Entries ==="),
        body,
        total
    )
}

pub fn frequency_report(entries: &[FrequencyEntry], total_distinct: usize, theme: &Theme) -> String {
    let mut out = format!(
        "\n{}\n\n{}\n",
        theme.header.paint("=== ERROR Frequency Analysis ==="),
        theme.header.paint("=== Hash Table Entries ===")
    );

    if entries.is_empty() {
        out.push_str("No entries found.\n");
        return out;
    }

    for entry in entries {
        out.push_str(&format!("Key: \"{}\" -> Count: {}\n", entry.key, entry.count));
    }
    out.push_str(&format!("\nTotal unique entries: {}\n", total_distinct));
    out
}

pub fn keyword_count(keyword: &str, count: usize) -> String {
    format!(
        "\nKeyword '{}' found {} time(s) in log messages.\n",
        keyword, count
    )
}

/// Matching records, each paired with its position in the full listing and
/// the byte offsets of its keyword matches.
pub fn matching_logs(
    keyword: &str,
    matches: &[(usize, &LogRecord, Vec<usize>)],
    theme: &Theme,
) -> String {
    if keyword.is_empty() {
        return "Invalid keyword.\n".to_string();
    }

    let mut out = format!(
        "\n{}\n",
        theme
            .header
            .paint(&format!("=== Logs containing \"{}\" ===", keyword))
    );

    if matches.is_empty() {
        out.push_str("No logs found containing the keyword.\n");
        return out;
    }

    for (index, record, positions) in matches {
        out.push_str(&log_line(*index, record, theme, positions, keyword.len()));
    }
    out.push_str(&format!("\nTotal matching logs: {}\n", matches.len()));
    out
}

pub fn statistics(total_logs: usize, unique_errors: usize, theme: &Theme) -> String {
    format!(
        "\n{}\nTotal Logs: {}\nUnique Errors: {}\n",
        theme.header.paint("=== Statistics ==="),
        total_logs,
        unique_errors
    )
}
