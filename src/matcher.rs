//! Knuth-Morris-Pratt substring matching.
//!
//! Every position at which the pattern occurs is reported, including
//! occurrences that overlap a previous match ("aa" occurs twice in "aaa").
//! After a full match the scan falls back through the failure table instead of
//! skipping the matched bytes, so the text is read exactly once.
//!
//! Case-insensitive matching lowercases ASCII letters in private copies of
//! both inputs. All other bytes, including non-ASCII UTF-8 sequences, compare
//! verbatim.

use std::borrow::Cow;
use std::ops::ControlFlow;

/// Builds the prefix (failure) table: `failure[i]` is the length of the
/// longest proper prefix of `pattern[..=i]` that is also a suffix of it.
pub fn failure_function(pattern: &[u8]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut j = 0;

    for i in 1..pattern.len() {
        while j > 0 && pattern[i] != pattern[j] {
            j = failure[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
        }
        failure[i] = j;
    }

    failure
}

/// A pattern with its failure table built once, reusable across many texts.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    failure: Vec<usize>,
    case_sensitive: bool,
}

impl Pattern {
    pub fn new(pattern: &str, case_sensitive: bool) -> Self {
        let bytes = if case_sensitive {
            pattern.as_bytes().to_vec()
        } else {
            pattern.as_bytes().to_ascii_lowercase()
        };
        let failure = failure_function(&bytes);

        Self {
            bytes,
            failure,
            case_sensitive,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of (possibly overlapping) occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        let mut count = 0;
        self.scan(text, |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    /// Byte offsets of every occurrence in `text`, ascending.
    pub fn positions(&self, text: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        self.scan(text, |start| {
            positions.push(start);
            ControlFlow::Continue(())
        });
        positions
    }

    /// Stops at the first occurrence.
    pub fn is_match(&self, text: &str) -> bool {
        let mut found = false;
        self.scan(text, |_| {
            found = true;
            ControlFlow::Break(())
        });
        found
    }

    /// Reports each match start to `on_match`; a `Break` ends the scan.
    fn scan(&self, text: &str, mut on_match: impl FnMut(usize) -> ControlFlow<()>) {
        let pattern_len = self.bytes.len();
        if pattern_len == 0 || pattern_len > text.len() {
            return;
        }

        let text: Cow<'_, [u8]> = if self.case_sensitive {
            Cow::Borrowed(text.as_bytes())
        } else {
            Cow::Owned(text.as_bytes().to_ascii_lowercase())
        };

        let mut j = 0;
        for (i, &byte) in text.iter().enumerate() {
            while j > 0 && byte != self.bytes[j] {
                j = self.failure[j - 1];
            }
            if byte == self.bytes[j] {
                j += 1;
            }
            if j == pattern_len {
                if on_match(i + 1 - pattern_len).is_break() {
                    return;
                }
                j = self.failure[j - 1];
            }
        }
    }
}

/// Case-sensitive occurrence count. Returns 0 for an empty pattern or one
/// longer than the text.
pub fn count(text: &str, pattern: &str) -> usize {
    Pattern::new(pattern, true).count(text)
}

/// ASCII case-insensitive occurrence count. Neither input is modified.
pub fn count_ignore_case(text: &str, pattern: &str) -> usize {
    Pattern::new(pattern, false).count(text)
}

pub fn positions(text: &str, pattern: &str) -> Vec<usize> {
    Pattern::new(pattern, true).positions(text)
}

pub fn positions_ignore_case(text: &str, pattern: &str) -> Vec<usize> {
    Pattern::new(pattern, false).positions(text)
}
