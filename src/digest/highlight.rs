use crate::core::models::Segment;
use crate::digest::tokens::AMOUNT_RE;

/// Split the headline into alternating plain and amount segments.
///
/// Uses the same leftmost-first scan as amount extraction, so a match is
/// never split across segments. Concatenating the segments gives back the
/// headline exactly. A headline with no amounts (including the empty
/// headline) becomes a single plain segment.
#[must_use]
pub fn highlight_amounts(headline: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut last_end = 0usize;

    for m in AMOUNT_RE.find_iter(headline) {
        if m.start() > last_end {
            segments.push(Segment::Plain(headline[last_end..m.start()].to_string()));
        }
        segments.push(Segment::Amount(m.as_str().to_string()));
        last_end = m.end();
    }

    if last_end < headline.len() || segments.is_empty() {
        segments.push(Segment::Plain(headline[last_end..].to_string()));
    }

    segments
}
