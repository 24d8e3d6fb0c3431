//! Small string helpers shared by the digest stages and the batch driver

use regex::Regex;
use std::sync::LazyLock;

/// One or more consecutive line breaks (LF or CRLF).
pub static LINE_BREAKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n)+").expect("static regex compile"));

/// Split text into lines, collapsing runs of line breaks into one split point.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAKS_RE.split(text)
}

/// Hard-truncate to at most `max_bytes` bytes without cutting a UTF-8 sequence.
#[must_use]
pub fn truncate_at_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Render user content for logs; full text only with the `debug-logs` feature.
#[must_use]
pub fn loggable(text: &str) -> String {
    #[cfg(feature = "debug-logs")]
    {
        text.to_string()
    }
    #[cfg(not(feature = "debug-logs"))]
    {
        format!(
            "[... {} bytes masked, enable debug-logs feature to view ...]",
            text.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_collapses_blank_runs() {
        let lines: Vec<&str> = split_lines("a\n\n\nb\r\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // "é" is two bytes
        assert_eq!(truncate_at_char_boundary("héllo", 2), "h");
        assert_eq!(truncate_at_char_boundary("héllo", 3), "hé");
        assert_eq!(truncate_at_char_boundary("abc", 10), "abc");
        assert_eq!(truncate_at_char_boundary("📧", 3), "");
    }
}
