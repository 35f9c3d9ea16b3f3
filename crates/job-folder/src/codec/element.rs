//! Typed elements on top of the primitive framing.
//!
//! Decoding is lazy: a [`RawElement`] borrows its content bytes and is only
//! interpreted once the caller knows which shape to expect. Values paired
//! with unknown tags are therefore never parsed beyond their framing.

use crate::codec::primitives::{Reader, Writer};
use crate::error::DecodeError;
use crate::limits::{BOOLEAN_FALSE, BOOLEAN_TRUE, TYPE_BOOLEAN, TYPE_OCTET_STRING, TYPE_SEQUENCE};

/// One framed element whose content has not been interpreted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawElement<'a> {
    type_byte: u8,
    value: &'a [u8],
}

impl<'a> RawElement<'a> {
    pub(crate) fn new(type_byte: u8, value: &'a [u8]) -> Self {
        Self { type_byte, value }
    }

    /// Returns the element's type byte.
    pub fn type_byte(&self) -> u8 {
        self.type_byte
    }

    /// Returns the element's content bytes.
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    fn expect_type(&self, expected: u8, field: &'static str) -> Result<(), DecodeError> {
        if self.type_byte != expected {
            return Err(DecodeError::UnexpectedType {
                field,
                expected,
                found: self.type_byte,
            });
        }
        Ok(())
    }

    /// Interprets the element as a boolean. Any non-zero content byte is true.
    pub fn as_bool(&self, field: &'static str) -> Result<bool, DecodeError> {
        self.expect_type(TYPE_BOOLEAN, field)?;
        match self.value {
            [byte] => Ok(*byte != BOOLEAN_FALSE),
            _ => Err(DecodeError::InvalidBoolLength {
                field,
                len: self.value.len(),
            }),
        }
    }

    /// Interprets the element as a UTF-8 octet string.
    pub fn as_str(&self, field: &'static str) -> Result<&'a str, DecodeError> {
        self.expect_type(TYPE_OCTET_STRING, field)?;
        std::str::from_utf8(self.value).map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Interprets the element as a sequence and splits out its children.
    pub fn as_sequence(
        &self,
        max_len: usize,
        field: &'static str,
    ) -> Result<Vec<RawElement<'a>>, DecodeError> {
        self.expect_type(TYPE_SEQUENCE, field)?;
        let mut reader = Reader::new(self.value);
        let mut elements = Vec::new();
        while !reader.is_empty() {
            if elements.len() >= max_len {
                return Err(DecodeError::LengthExceedsLimit {
                    field,
                    len: elements.len() + 1,
                    max: max_len,
                });
            }
            elements.push(reader.read_element(field)?);
        }
        Ok(elements)
    }

    /// Interprets the element as a sequence of strings.
    pub fn as_string_list(
        &self,
        max_len: usize,
        field: &'static str,
    ) -> Result<Vec<String>, DecodeError> {
        self.as_sequence(max_len, field)?
            .iter()
            .map(|e| e.as_str(field).map(str::to_owned))
            .collect()
    }
}

/// Parses a buffer that must hold exactly one element.
pub fn read_single_element<'a>(
    input: &'a [u8],
    context: &'static str,
) -> Result<RawElement<'a>, DecodeError> {
    let mut reader = Reader::new(input);
    let element = reader.read_element(context)?;
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            context,
            count: reader.remaining_len(),
        });
    }
    Ok(element)
}

/// Groups a record's elements into (tag name, value) pairs.
///
/// Every even element must be an octet string naming the tag. An odd
/// element count leaves a dangling tag and fails.
pub fn read_pairs<'a>(
    elements: &[RawElement<'a>],
    record: &'static str,
) -> Result<Vec<(&'a str, RawElement<'a>)>, DecodeError> {
    let mut pairs = Vec::with_capacity(elements.len() / 2);
    for chunk in elements.chunks(2) {
        let tag = chunk[0].as_str("tag")?;
        match chunk.get(1) {
            Some(value) => pairs.push((tag, *value)),
            None => {
                return Err(DecodeError::DanglingTag {
                    record,
                    tag: tag.to_owned(),
                })
            }
        }
    }
    Ok(pairs)
}

/// Typed element writers.
impl Writer {
    /// Writes a boolean element.
    pub fn write_bool(&mut self, value: bool) {
        let byte = if value { BOOLEAN_TRUE } else { BOOLEAN_FALSE };
        self.write_element(TYPE_BOOLEAN, &[byte]);
    }

    /// Writes an octet string element holding UTF-8 text.
    pub fn write_str(&mut self, value: &str) {
        self.write_element(TYPE_OCTET_STRING, value.as_bytes());
    }

    /// Writes an optional string; absence is written as an empty string.
    pub fn write_opt_str(&mut self, value: Option<&str>) {
        self.write_str(value.unwrap_or(""));
    }

    /// Writes a sequence element whose children are produced by `body`.
    pub fn write_sequence(&mut self, body: impl FnOnce(&mut Writer)) {
        self.write_constructed(TYPE_SEQUENCE, body);
    }

    /// Writes a sequence of string elements, in the given order.
    pub fn write_string_list<S: AsRef<str>>(&mut self, values: &[S]) {
        self.write_sequence(|w| {
            for value in values {
                w.write_str(value.as_ref());
            }
        });
    }
}
