//! Error types for job folder encoding/decoding and validation.

use thiserror::Error;

/// Error while parsing tag/length/value elements.
///
/// These are the element-level causes. Callers decoding a whole record see
/// them wrapped in a [`RecordDecodeError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("multi-byte type {type_byte:#04x} is not supported")]
    MultiByteType { type_byte: u8 },

    #[error("invalid length encoding in {context}: {reason}")]
    InvalidLength {
        context: &'static str,
        reason: &'static str,
    },

    #[error("length of {num_bytes} bytes in {context} cannot be represented")]
    LengthTooLarge {
        context: &'static str,
        num_bytes: usize,
    },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{count} trailing bytes after {context}")]
    TrailingBytes { context: &'static str, count: usize },

    #[error("{field}: expected element type {expected:#04x}, found {found:#04x}")]
    UnexpectedType {
        field: &'static str,
        expected: u8,
        found: u8,
    },

    #[error("boolean {field} has content length {len} (expected 1)")]
    InvalidBoolLength { field: &'static str, len: usize },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("tag {tag:?} in {record} has no value element")]
    DanglingTag { record: &'static str, tag: String },
}

/// Uniform failure to decode a complete record.
///
/// Carries a description of the input bytes and the underlying cause. A
/// record is either decoded completely or this error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to decode {record} from {input}: {source}")]
pub struct RecordDecodeError {
    /// Kind of record being decoded ("job folder", "permission").
    pub record: &'static str,
    /// Short description of the input (length and hex preview).
    pub input: String,
    /// Element-level cause.
    #[source]
    pub source: DecodeError,
}

impl RecordDecodeError {
    /// Number of leading bytes shown in [`RecordDecodeError::input`].
    pub const PREVIEW_LEN: usize = 16;

    /// Wraps an element-level error with a description of `input`.
    pub fn new(record: &'static str, input: &[u8], source: DecodeError) -> Self {
        Self {
            record,
            input: describe_input(input),
            source,
        }
    }
}

fn describe_input(input: &[u8]) -> String {
    let shown = input.len().min(RecordDecodeError::PREVIEW_LEN);
    let mut preview = String::with_capacity(shown * 2 + 3);
    for byte in &input[..shown] {
        preview.push_str(&format!("{byte:02x}"));
    }
    if input.len() > shown {
        preview.push_str("...");
    }
    format!("{} bytes [{}]", input.len(), preview)
}

/// Error during record validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("folder name is empty")]
    EmptyName,

    #[error("{collection} is not in ascending order at {value:?}")]
    Unsorted {
        collection: &'static str,
        value: String,
    },

    #[error("{collection} contains {value:?} more than once")]
    DuplicateEntry {
        collection: &'static str,
        value: String,
    },

    #[error("permission {name:?} is defined more than once")]
    DuplicatePermission { name: String },

    #[error("folder {name:?} references itself as {relation}")]
    SelfReference {
        name: String,
        relation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_description_short() {
        let err = RecordDecodeError::new(
            "job folder",
            &[0x30, 0x01],
            DecodeError::UnexpectedEof { context: "element" },
        );
        assert_eq!(err.input, "2 bytes [3001]");
        assert_eq!(
            err.to_string(),
            "unable to decode job folder from 2 bytes [3001]: unexpected end of input while reading element"
        );
    }

    #[test]
    fn test_input_description_truncated() {
        let data = [0xAAu8; 40];
        let err = RecordDecodeError::new(
            "permission",
            &data,
            DecodeError::TrailingBytes { context: "permission", count: 1 },
        );
        assert!(err.input.starts_with("40 bytes [aaaa"));
        assert!(err.input.ends_with("...]"));
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error as _;

        let err = RecordDecodeError::new("job folder", &[], DecodeError::InvalidUtf8 { field: "name" });
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("invalid UTF-8 in name"));
    }
}
