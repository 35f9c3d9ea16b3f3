//! Permission encoding/decoding.
//!
//! A permission is a sequence of three name/value pairs: `name`, `users`,
//! `groups`. It appears on its own or nested in a folder's `permissions`.

use tracing::debug;

use crate::codec::element::{read_pairs, read_single_element, RawElement};
use crate::codec::folder::DecodeOptions;
use crate::codec::primitives::Writer;
use crate::error::{DecodeError, RecordDecodeError};
use crate::model::Permission;

const PERMISSION_RECORD: &str = "permission";

const TAG_NAME: &str = "name";
const TAG_USERS: &str = "users";
const TAG_GROUPS: &str = "groups";

// =============================================================================
// ENCODING
// =============================================================================

/// Writes a permission as a sequence element.
pub fn write_permission(writer: &mut Writer, permission: &Permission) {
    writer.write_sequence(|w| {
        w.write_str(TAG_NAME);
        w.write_str(permission.name());
        w.write_str(TAG_USERS);
        w.write_string_list(permission.user_names());
        w.write_str(TAG_GROUPS);
        w.write_string_list(permission.group_names());
    });
}

/// Encodes a standalone permission.
pub fn encode_permission(permission: &Permission) -> Vec<u8> {
    let mut writer = Writer::new();
    write_permission(&mut writer, permission);
    writer.into_bytes()
}

// =============================================================================
// DECODING
// =============================================================================

/// Reads a permission from an element that must be a sequence.
///
/// Pairs may come in any order; unknown tags are skipped and missing ones
/// leave their field empty.
pub fn read_permission(
    element: &RawElement<'_>,
    options: &DecodeOptions,
) -> Result<Permission, DecodeError> {
    let elements = element.as_sequence(options.max_collection_len, PERMISSION_RECORD)?;

    let mut name = String::new();
    let mut users = Vec::new();
    let mut groups = Vec::new();

    for (tag, value) in read_pairs(&elements, PERMISSION_RECORD)? {
        match tag {
            TAG_NAME => name = value.as_str(TAG_NAME)?.to_owned(),
            TAG_USERS => users = value.as_string_list(options.max_collection_len, TAG_USERS)?,
            TAG_GROUPS => groups = value.as_string_list(options.max_collection_len, TAG_GROUPS)?,
            unknown => debug!(tag = unknown, "ignoring unknown permission tag"),
        }
    }

    Ok(Permission::new(name, users, groups))
}

/// Decodes a standalone permission.
pub fn decode_permission(input: &[u8]) -> Result<Permission, RecordDecodeError> {
    let options = DecodeOptions::default();
    read_single_element(input, PERMISSION_RECORD)
        .and_then(|element| read_permission(&element, &options))
        .map_err(|source| RecordDecodeError::new(PERMISSION_RECORD, input, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn test_permission_roundtrip() {
        let perm = Permission::new("view_job", ["alice", "bob"], ["qa"]);
        let decoded = decode_permission(&encode_permission(&perm)).unwrap();
        assert_eq!(perm, decoded);
        assert!(decoded.applies_to_user(&User::new("bob")));
    }

    #[test]
    fn test_permission_wire_layout() {
        let perm = Permission::new("p", ["u"], Vec::<String>::new());
        let bytes = encode_permission(&perm);
        let expected: &[u8] = &[
            0x30, 0x1F,
            0x04, 0x04, b'n', b'a', b'm', b'e',
            0x04, 0x01, b'p',
            0x04, 0x05, b'u', b's', b'e', b'r', b's',
            0x30, 0x03, 0x04, 0x01, b'u',
            0x04, 0x06, b'g', b'r', b'o', b'u', b'p', b's',
            0x30, 0x00,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_permission_permuted_and_partial() {
        let mut writer = Writer::new();
        writer.write_sequence(|w| {
            w.write_str(TAG_GROUPS);
            w.write_string_list(&["ops"]);
            w.write_str("future_field");
            w.write_bool(true);
            w.write_str(TAG_NAME);
            w.write_str("edit");
        });
        let decoded = decode_permission(writer.as_bytes()).unwrap();
        assert_eq!(decoded.name(), "edit");
        assert!(decoded.user_names().is_empty());
        assert_eq!(decoded.group_names(), ["ops"]);
    }

    #[test]
    fn test_permission_dangling_tag() {
        let mut writer = Writer::new();
        writer.write_sequence(|w| {
            w.write_str(TAG_NAME);
            w.write_str("p");
            w.write_str(TAG_USERS);
        });
        let err = decode_permission(writer.as_bytes()).unwrap_err();
        assert_eq!(err.record, "permission");
        assert!(matches!(err.source, DecodeError::DanglingTag { .. }));
    }

    #[test]
    fn test_permission_not_a_sequence() {
        let mut writer = Writer::new();
        writer.write_str("name");
        let err = decode_permission(writer.as_bytes()).unwrap_err();
        assert!(matches!(err.source, DecodeError::UnexpectedType { .. }));
    }
}
