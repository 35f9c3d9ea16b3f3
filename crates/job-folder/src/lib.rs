//! Job folders: metadata records for grouping units of work in a distributed
//! job-tracking system, and their self-describing binary encoding.
//!
//! # Overview
//!
//! A [`JobFolder`] groups job identifiers, optimizing-job identifiers,
//! uploaded file names and child folders, and carries [`Permission`]s plus
//! visibility flags. Folders reference each other, their jobs and their
//! files by name only; resolving those names is up to the store holding
//! the records.
//!
//! # Quick Start
//!
//! ```rust
//! use job_folder::{decode_folder, encode_folder, JobFolder, Permission, User};
//!
//! let mut folder = JobFolder::new("batch1");
//! folder.set_child_names(["b", "a"]);
//! folder.add_job_id("20240101120000-0001");
//! folder.set_permission(Permission::new("view_job", ["alice"], ["qa"]));
//!
//! let bytes = encode_folder(&folder);
//! let decoded = decode_folder(&bytes).unwrap();
//!
//! assert_eq!(decoded.child_names(), ["a", "b"]);
//! assert!(decoded.user_has_permission(&User::new("alice"), "view_job"));
//! assert_eq!(folder, decoded);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Folder, permission and user types
//! - [`codec`]: Element framing and record encoding/decoding
//! - [`validate`]: Invariant checks for records from other processes
//! - [`error`]: Error types
//! - [`limits`]: Wire constants and decoding limits
//!
//! # Wire Format
//!
//! A folder is one sequence element (`0x30`) holding ten name/value pairs.
//! Names are octet strings (`0x04`); values are booleans (`0x01`), octet
//! strings, or sequences of octet strings. Lengths use the BER definite
//! form. Decoders accept the pairs in any order and skip unknown names, so
//! records written by newer code stay readable.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_folder, decode_folder_with_options, decode_permission, encode_folder, encode_permission,
    DecodeOptions, FolderTag,
};
pub use error::{DecodeError, RecordDecodeError, ValidationError};
pub use model::{JobFolder, JobFolderBuilder, Permission, User};
pub use validate::validate_folder;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
