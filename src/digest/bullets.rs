use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::utils::text::split_lines;

/// Upper bound on bullets in a digest.
pub const MAX_BULLETS: usize = 2;

const BULLET_MARKERS: [char; 2] = ['-', '•'];

static FRAGMENT_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;•]").expect("static regex compile"));

/// Pull up to two supporting facts out of the summary text.
///
/// Marker lines (`-` or `•`) win. Only when there are none does the text get
/// split on `;`/`•`, skipping the first fragment since it normally restates
/// the headline.
#[must_use]
pub fn extract_bullets(text: &str) -> Vec<String> {
    let marked = marked_bullets(text);
    if !marked.is_empty() {
        return marked;
    }

    let fallback = fragment_bullets(text);
    if !fallback.is_empty() {
        debug!(count = fallback.len(), "Bullets taken from fragment fallback");
    }
    fallback
}

fn marked_bullets(text: &str) -> Vec<String> {
    split_lines(text)
        .filter_map(|line| strip_marker(line.trim()))
        .take(MAX_BULLETS)
        .map(str::to_string)
        .collect()
}

/// Strip a leading bullet marker plus at most one space; `None` for
/// unmarked lines and for markers with nothing after them.
fn strip_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(BULLET_MARKERS)?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    (!rest.is_empty()).then_some(rest)
}

fn fragment_bullets(text: &str) -> Vec<String> {
    FRAGMENT_SEPARATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .skip(1)
        .take(MAX_BULLETS)
        .map(str::to_string)
        .collect()
}
