use thiserror::Error;

/// Errors raised around the digest pipeline: configuration, batch I/O and
/// input decoding. The pipeline itself is total and never produces one.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse summary request: {0}")]
    ParseError(String),

    #[error("Failed to read or write batch data: {0}")]
    IoError(String),

    #[error("Failed to serialize readable summary: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for DigestError {
    fn from(error: std::io::Error) -> Self {
        DigestError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            DigestError::IoError(error.to_string())
        } else {
            DigestError::ParseError(error.to_string())
        }
    }
}
