//! Decoding limits and wire constants.

/// Universal type byte for a boolean element.
pub const TYPE_BOOLEAN: u8 = 0x01;

/// Universal type byte for an octet string element.
pub const TYPE_OCTET_STRING: u8 = 0x04;

/// Universal type byte for a sequence element.
pub const TYPE_SEQUENCE: u8 = 0x30;

/// Low five bits of a type byte that announce a multi-byte type.
pub const MULTI_BYTE_TYPE_MASK: u8 = 0x1F;

/// Content byte written for a true boolean.
pub const BOOLEAN_TRUE: u8 = 0xFF;

/// Content byte written for a false boolean.
pub const BOOLEAN_FALSE: u8 = 0x00;

/// Maximum number of bytes in a long-form length.
pub const MAX_LENGTH_BYTES: usize = 4;

/// Largest content length a long-form length may declare. Lengths are
/// signed 32-bit on the wire, so the top bit of a 4-byte length is never set.
pub const MAX_ELEMENT_LENGTH: u64 = 0x7FFF_FFFF;

/// Maximum size of one encoded record (16 MiB).
pub const MAX_RECORD_SIZE: usize = 16 * 1024 * 1024;

/// Maximum number of entries in one decoded collection.
pub const MAX_COLLECTION_LEN: usize = 1_000_000;
