use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::utils::text::split_lines;

/// Footer phrases that mark a whole line as noise.
pub const BOILERPLATE_PHRASES: [&str; 5] = [
    "unsubscribe",
    "manage preferences",
    "view in browser",
    "privacy policy",
    "terms of service",
];

static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = BOILERPLATE_PHRASES.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!("(?i){}", alternatives.join("|"))).expect("static regex compile")
});

/// Returns whether a single line contains any boilerplate phrase (case-insensitive).
#[must_use]
pub fn is_boilerplate_line(line: &str) -> bool {
    BOILERPLATE_RE.is_match(line)
}

/// Drop legal/unsubscribe lines and rejoin the survivors with single newlines.
///
/// Runs of line breaks collapse to one split point, so blank lines do not
/// survive as empty entries between content lines.
#[must_use]
pub fn filter_boilerplate(text: &str) -> String {
    let mut dropped = 0usize;
    let kept: Vec<&str> = split_lines(text)
        .filter(|line| {
            let noise = is_boilerplate_line(line);
            if noise {
                dropped += 1;
            }
            !noise
        })
        .collect();

    if dropped > 0 {
        debug!(lines_dropped = dropped, "Filtered boilerplate lines");
    }

    kept.join("\n")
}
