//! Primitive encoding/decoding for the element format.
//!
//! Implements type bytes, BER-style definite lengths and element framing.

use crate::codec::element::RawElement;
use crate::error::DecodeError;
use crate::limits::{MAX_ELEMENT_LENGTH, MAX_LENGTH_BYTES, MULTI_BYTE_TYPE_MASK};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a single-byte element type.
    #[inline]
    pub fn read_type(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let type_byte = self.read_byte(context)?;
        if type_byte & MULTI_BYTE_TYPE_MASK == MULTI_BYTE_TYPE_MASK {
            return Err(DecodeError::MultiByteType { type_byte });
        }
        Ok(type_byte)
    }

    /// Reads a definite length.
    ///
    /// Short form is a single byte below 0x80. Long form is `0x80 | n`
    /// followed by `n` big-endian bytes, at most [`MAX_LENGTH_BYTES`].
    /// A lone `0x80` reads as 128, which older encoders produced. Lengths
    /// above [`MAX_ELEMENT_LENGTH`] are rejected.
    pub fn read_length(&mut self, context: &'static str) -> Result<usize, DecodeError> {
        let first = self.read_byte(context)?;
        if first & 0x80 == 0 {
            return Ok(first as usize);
        }

        let num_bytes = (first & 0x7F) as usize;
        if num_bytes == 0 {
            return Ok(128);
        }
        if num_bytes > MAX_LENGTH_BYTES {
            return Err(DecodeError::LengthTooLarge { context, num_bytes });
        }

        let bytes = self.read_bytes(num_bytes, context)?;
        let len = bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64);
        if len > MAX_ELEMENT_LENGTH {
            return Err(DecodeError::InvalidLength {
                context,
                reason: "length does not fit in 31 bits",
            });
        }
        usize::try_from(len).map_err(|_| DecodeError::LengthTooLarge { context, num_bytes })
    }

    /// Reads one complete element, borrowing its content.
    pub fn read_element(&mut self, context: &'static str) -> Result<RawElement<'a>, DecodeError> {
        let type_byte = self.read_type(context)?;
        let len = self.read_length(context)?;
        let value = self.read_bytes(len, context)?;
        Ok(RawElement::new(type_byte, value))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a definite length in its minimal form.
    #[inline]
    pub fn write_length(&mut self, len: usize) {
        if len < 0x80 {
            self.buf.push(len as u8);
            return;
        }
        let be = (len as u64).to_be_bytes();
        let skip = be.iter().take_while(|b| **b == 0).count();
        self.buf.push(0x80 | (be.len() - skip) as u8);
        self.buf.extend_from_slice(&be[skip..]);
    }

    /// Writes a complete element: type, length, content.
    pub fn write_element(&mut self, type_byte: u8, value: &[u8]) {
        self.buf.push(type_byte);
        self.write_length(value.len());
        self.buf.extend_from_slice(value);
    }

    /// Writes a constructed element whose content is produced by `body`.
    pub fn write_constructed(&mut self, type_byte: u8, body: impl FnOnce(&mut Writer)) {
        let mut inner = Writer::new();
        body(&mut inner);
        self.write_element(type_byte, inner.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_roundtrip() {
        let test_values = [0usize, 1, 127, 128, 255, 256, 65535, 65536, 0x00FF_FFFF, 0x0100_0000];

        for v in test_values {
            let mut writer = Writer::new();
            writer.write_length(v);

            let mut reader = Reader::new(writer.as_bytes());
            let decoded = reader.read_length("test").unwrap();
            assert_eq!(v, decoded, "failed for {}", v);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_length_forms() {
        let mut writer = Writer::new();
        writer.write_length(127);
        assert_eq!(writer.as_bytes(), &[0x7F]);

        let mut writer = Writer::new();
        writer.write_length(128);
        assert_eq!(writer.as_bytes(), &[0x81, 0x80]);

        let mut writer = Writer::new();
        writer.write_length(0x1234);
        assert_eq!(writer.as_bytes(), &[0x82, 0x12, 0x34]);

        let mut writer = Writer::new();
        writer.write_length(0x0001_0000);
        assert_eq!(writer.as_bytes(), &[0x83, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_lone_0x80_is_128() {
        let data = [0x80u8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_length("test").unwrap(), 128);
    }

    #[test]
    fn test_length_too_many_bytes() {
        let data = [0x85u8, 0, 0, 0, 0, 1];
        let mut reader = Reader::new(&data);
        let result = reader.read_length("test");
        assert!(matches!(result, Err(DecodeError::LengthTooLarge { num_bytes: 5, .. })));
    }

    #[test]
    fn test_length_top_bit_rejected() {
        let data = [0x84u8, 0x80, 0x00, 0x00, 0x00];
        let mut reader = Reader::new(&data);
        let result = reader.read_length("test");
        assert!(matches!(result, Err(DecodeError::InvalidLength { context: "test", .. })));

        let data = [0x84u8, 0x7F, 0xFF, 0xFF, 0xFF];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_length("test").unwrap(), 0x7FFF_FFFF);
    }

    #[test]
    fn test_length_truncated() {
        let data = [0x82u8, 0x01];
        let mut reader = Reader::new(&data);
        let result = reader.read_length("test");
        assert!(matches!(result, Err(DecodeError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_multi_byte_type_rejected() {
        let data = [0x1Fu8, 0x00];
        let mut reader = Reader::new(&data);
        let result = reader.read_element("test");
        assert!(matches!(result, Err(DecodeError::MultiByteType { type_byte: 0x1F })));
    }

    #[test]
    fn test_element_roundtrip() {
        let mut writer = Writer::new();
        writer.write_element(0x04, b"hello");
        assert_eq!(writer.as_bytes(), &[0x04, 0x05, b'h', b'e', b'l', b'l', b'o']);

        let mut reader = Reader::new(writer.as_bytes());
        let element = reader.read_element("test").unwrap();
        assert_eq!(element.type_byte(), 0x04);
        assert_eq!(element.value(), b"hello");
    }

    #[test]
    fn test_constructed_element() {
        let mut writer = Writer::new();
        writer.write_constructed(0x30, |w| {
            w.write_element(0x01, &[0xFF]);
            w.write_element(0x04, b"");
        });
        assert_eq!(writer.as_bytes(), &[0x30, 0x05, 0x01, 0x01, 0xFF, 0x04, 0x00]);
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0x04u8, 0x05, b'a'];
        let mut reader = Reader::new(&data);
        let result = reader.read_element("test");
        assert!(matches!(result, Err(DecodeError::UnexpectedEof { .. })));
    }
}
