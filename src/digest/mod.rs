//! Readable-summary pipeline
//!
//! Stages run strictly downstream:
//! 1. [`boilerplate`] drops footer/legal lines (its output becomes `raw_text`)
//! 2. [`emoji`] keeps the first emoji only
//! 3. [`headline`] and [`bullets`] read the deduplicated text
//! 4. [`tokens`] scans the deduplicated text and the sender address
//! 5. [`highlight`] splits the headline into plain/amount segments
//!
//! Every stage is a pure function over strings. Any input, including the
//! empty string, yields a valid [`ReadableSummary`].

pub mod boilerplate;
pub mod bullets;
pub mod emoji;
pub mod headline;
pub mod highlight;
pub mod tokens;

pub use boilerplate::filter_boilerplate;
pub use bullets::extract_bullets;
pub use emoji::{EmojiDedup, dedupe_emoji};
pub use headline::extract_headline;
pub use highlight::highlight_amounts;
pub use tokens::{extract_amounts, extract_dates, extract_tokens, sender_domain};

use tracing::{debug, info};

use crate::core::config::DigestConfig;
use crate::core::models::{ReadableSummary, SummaryRequest};
use crate::utils::text::{loggable, truncate_at_char_boundary};

/// Run the full pipeline on one summary. `None` is treated as empty text.
#[must_use]
pub fn build_readable_summary(summary: Option<&str>, sender_email: &str) -> ReadableSummary {
    let raw_text = filter_boilerplate(summary.unwrap_or_default());
    let EmojiDedup { text, first_emoji } = dedupe_emoji(&raw_text);

    let headline = extract_headline(&text);
    let bullets = extract_bullets(&text);
    let tokens = extract_tokens(&text, sender_email);
    let segments = highlight_amounts(headline);

    debug!(
        headline = %loggable(headline),
        segments = segments.len(),
        bullets = bullets.len(),
        "Built readable summary"
    );

    ReadableSummary {
        segments,
        bullets,
        raw_text,
        tokens,
        lead_emoji: first_emoji,
    }
}

/// Convenience wrapper over [`build_readable_summary`] for non-optional text.
#[must_use]
pub fn summarize(summary: &str, sender_email: &str) -> ReadableSummary {
    build_readable_summary(Some(summary), sender_email)
}

/// Digest each request in order, applying the configured input cap.
#[must_use]
pub fn summarize_batch(items: &[SummaryRequest], config: &DigestConfig) -> Vec<ReadableSummary> {
    let results: Vec<ReadableSummary> = items
        .iter()
        .map(|item| summarize_request(item, config))
        .collect();

    info!(items = results.len(), "Summarized batch");
    results
}

/// Digest one request, truncating oversized summaries first.
#[must_use]
pub fn summarize_request(item: &SummaryRequest, config: &DigestConfig) -> ReadableSummary {
    let summary = item.summary.as_deref().map(|text| match config.max_input_bytes {
        Some(max) if text.len() > max => {
            debug!(len = text.len(), max, "Truncating oversized summary");
            truncate_at_char_boundary(text, max)
        }
        _ => text,
    });

    build_readable_summary(summary, &item.sender_email)
}
