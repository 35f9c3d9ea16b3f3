//! Data model types for job folders.
//!
//! This module contains the core record types:
//! - Folders (named groupings of job, file and child folder identifiers)
//! - Permissions (named grants to users and groups)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod folder;
pub(crate) mod names;
pub mod permission;

pub use builder::JobFolderBuilder;
pub use folder::JobFolder;
pub use permission::{Permission, User};
