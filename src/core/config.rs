use std::env;

use crate::errors::DigestError;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestConfig {
    pub log_format: LogFormat,
    pub max_input_bytes: Option<usize>,
    pub skip_invalid: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            max_input_bytes: None,
            skip_invalid: true,
        }
    }
}

impl DigestConfig {
    pub fn from_env() -> Result<Self, DigestError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_format = match lookup("TLDR_LOG_FORMAT") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                other => {
                    return Err(DigestError::ConfigError(format!(
                        "TLDR_LOG_FORMAT: unknown format '{}'",
                        other
                    )));
                }
            },
            None => defaults.log_format,
        };

        let max_input_bytes = match lookup("TLDR_MAX_INPUT_BYTES") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<usize>()
                    .map_err(|e| DigestError::ConfigError(format!("TLDR_MAX_INPUT_BYTES: {}", e)))?,
            ),
            None => defaults.max_input_bytes,
        };

        let skip_invalid = match lookup("TLDR_SKIP_INVALID") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| DigestError::ConfigError(format!("TLDR_SKIP_INVALID: '{}'", raw)))?,
            None => defaults.skip_invalid,
        };

        Ok(Self {
            log_format,
            max_input_bytes,
            skip_invalid,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
