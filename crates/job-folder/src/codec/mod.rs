//! Binary encoding/decoding for job folders.
//!
//! Records are tag/length/value elements: primitives frame them, elements
//! give them types, and the folder and permission codecs map records onto
//! sequences of named pairs.

pub mod element;
pub mod folder;
pub mod permission;
pub mod primitives;


pub use element::{read_pairs, read_single_element, RawElement};
pub use folder::{decode_folder, decode_folder_with_options, encode_folder, DecodeOptions, FolderTag};
pub use permission::{decode_permission, encode_permission, read_permission, write_permission};
pub use primitives::{Reader, Writer};
