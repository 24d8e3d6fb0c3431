use std::error::Error;
use inbox_tldr::errors::DigestError;

#[test]
fn test_digest_error_implements_error_trait() {
    // Verify DigestError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = DigestError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_digest_error_display() {
    let error = DigestError::ConfigError("TLDR_LOG_FORMAT: unknown format 'xml'".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: TLDR_LOG_FORMAT: unknown format 'xml'"
    );

    let error = DigestError::IoError("broken pipe".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to read or write batch data: broken pipe"
    );

    let error = DigestError::SerializationError("bad float".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to serialize readable summary: bad float"
    );
}

#[test]
fn test_digest_error_from_conversions() {
    // Malformed JSON maps to ParseError
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    match DigestError::from(json_err) {
        DigestError::ParseError(msg) => assert!(!msg.is_empty()),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
    match DigestError::from(io_err) {
        DigestError::IoError(msg) => assert!(msg.contains("stdin closed")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}
