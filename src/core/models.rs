use serde::{Deserialize, Serialize};

/// One item of batch input: the upstream AI summary and who sent the email.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub sender_email: String,
}

/// A contiguous span of the headline, tagged for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Amount(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Amount(text) => text,
        }
    }

    #[must_use]
    pub fn is_amount(&self) -> bool {
        matches!(self, Segment::Amount(_))
    }
}

/// Facts pulled out of the summary for filtering and search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenSet {
    /// Currency amounts in order of appearance, duplicates kept
    pub amounts: Vec<String>,
    /// Date and time phrases in order of appearance, duplicates kept
    pub dates: Vec<String>,
    /// Lower-cased sender domain, empty when the address has no `@`
    pub domain: String,
}

/// The digest produced for one `(summary, sender)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableSummary {
    pub segments: Vec<Segment>,
    pub bullets: Vec<String>,
    /// Summary text after boilerplate removal, before any other transform
    pub raw_text: String,
    pub tokens: TokenSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_emoji: Option<String>,
}

impl ReadableSummary {
    /// Reassemble the headline from its segments.
    #[must_use]
    pub fn headline(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Whether there was anything left to summarize after boilerplate removal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }
}
