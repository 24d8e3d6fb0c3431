//! Inbox TLDR - turns AI-generated email summaries into compact, renderable digests.
//!
//! Given the raw summary text for one email and the sender's address, the
//! readable-summary pipeline produces:
//! 1. A one-sentence headline, split into plain and monetary-amount segments
//! 2. Up to two supporting bullets
//! 3. Tagged tokens for amounts, dates/times and the sender domain
//!
//! # Architecture
//!
//! The pipeline is a chain of pure string transforms (see [`digest`]):
//! boilerplate filter, emoji dedupe, headline and bullet extraction,
//! token extraction, and amount highlighting. It performs no I/O; the
//! `tldr-digest` binary wraps it for JSON Lines batch processing.
//!
//! # Example
//!
//! ```
//! use inbox_tldr::digest::summarize;
//! use inbox_tldr::core::models::Segment;
//!
//! let summary = summarize(
//!     "Invoice due $250.00 tomorrow.\n- Pay via portal\nUnsubscribe here",
//!     "billing@Acme.com",
//! );
//!
//! assert_eq!(summary.headline(), "Invoice due $250.00 tomorrow.");
//! assert_eq!(summary.segments[1], Segment::Amount("$250.00".to_string()));
//! assert_eq!(summary.bullets, vec!["Pay via portal".to_string()]);
//! assert_eq!(summary.tokens.domain, "acme.com");
//! ```

// Module declarations
pub mod core;
pub mod digest;
pub mod errors;
pub mod utils;

pub use crate::core::config::{DigestConfig, LogFormat};
pub use crate::core::models::{ReadableSummary, Segment, SummaryRequest, TokenSet};
pub use errors::DigestError;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// log shippers. Calling it more than once is harmless: later calls leave the
/// first subscriber in place.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your program
/// inbox_tldr::setup_logging();
/// ```
pub fn setup_logging() {
    setup_logging_with(LogFormat::Json);
}

/// Configure logging with an explicit output format.
///
/// The level filter is taken from `RUST_LOG` and defaults to `info`.
pub fn setup_logging_with(format: LogFormat) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a global subscriber may already be installed (tests, embedding hosts)
    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_target(true))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}
