// Batch entry point: JSON Lines of summary requests on stdin, one readable
// summary per line on stdout.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use inbox_tldr::core::config::DigestConfig;
use inbox_tldr::core::models::SummaryRequest;
use inbox_tldr::digest::summarize_request;
use inbox_tldr::errors::DigestError;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let config = DigestConfig::from_env()?;
    inbox_tldr::setup_logging_with(config.log_format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let (processed, skipped) = run(stdin.lock(), &mut out, &config)?;
    out.flush().context("Failed to flush stdout")?;

    info!(processed, skipped, "Digest batch complete");
    Ok(())
}

fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &DigestConfig,
) -> Result<(usize, usize), DigestError> {
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request: SummaryRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) if config.skip_invalid => {
                warn!(line = idx + 1, "Skipping malformed summary request: {}", e);
                skipped += 1;
                continue;
            }
            Err(e) => {
                error!(line = idx + 1, "Malformed summary request: {}", e);
                return Err(e.into());
            }
        };

        let summary = summarize_request(&request, config);
        let json = serde_json::to_string(&summary)
            .map_err(|e| DigestError::SerializationError(e.to_string()))?;
        writeln!(out, "{}", json)?;
        processed += 1;
    }

    Ok((processed, skipped))
}
