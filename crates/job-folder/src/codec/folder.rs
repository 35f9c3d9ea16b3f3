//! Job folder encoding/decoding.
//!
//! A folder is one outer sequence holding name/value pairs in a fixed order.
//! Decoding accepts the pairs in any order, ignores unknown tags and keeps
//! defaults for missing ones.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::codec::element::{read_pairs, read_single_element};
use crate::codec::permission::{read_permission, write_permission};
use crate::codec::primitives::Writer;
use crate::error::{DecodeError, RecordDecodeError};
use crate::limits::{MAX_COLLECTION_LEN, MAX_RECORD_SIZE};
use crate::model::{JobFolder, JobFolderBuilder};

const FOLDER_RECORD: &str = "job folder";

/// The named fields of an encoded folder, in encode order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderTag {
    Name,
    DisplayInReadOnly,
    IsVirtual,
    Parent,
    Children,
    Description,
    Jobs,
    OptimizingJobs,
    Files,
    Permissions,
}

impl FolderTag {
    /// All tags in the order they are encoded.
    pub const ALL: [FolderTag; 10] = [
        FolderTag::Name,
        FolderTag::DisplayInReadOnly,
        FolderTag::IsVirtual,
        FolderTag::Parent,
        FolderTag::Children,
        FolderTag::Description,
        FolderTag::Jobs,
        FolderTag::OptimizingJobs,
        FolderTag::Files,
        FolderTag::Permissions,
    ];

    /// Returns the tag's wire name.
    pub fn name(self) -> &'static str {
        match self {
            FolderTag::Name => "name",
            FolderTag::DisplayInReadOnly => "display_in_read_only",
            FolderTag::IsVirtual => "is_virtual",
            FolderTag::Parent => "parent",
            FolderTag::Children => "children",
            FolderTag::Description => "description",
            FolderTag::Jobs => "jobs",
            FolderTag::OptimizingJobs => "optimizing_jobs",
            FolderTag::Files => "files",
            FolderTag::Permissions => "permissions",
        }
    }

    /// Looks up a tag by wire name.
    pub fn from_name(name: &str) -> Option<FolderTag> {
        FOLDER_TAGS.get(name).copied()
    }
}

lazy_static! {
    static ref FOLDER_TAGS: FxHashMap<&'static str, FolderTag> =
        FolderTag::ALL.iter().map(|tag| (tag.name(), *tag)).collect();
}

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Largest accepted input, in bytes.
    pub max_record_size: usize,
    /// Largest accepted element count in any one sequence.
    pub max_collection_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_record_size: MAX_RECORD_SIZE,
            max_collection_len: MAX_COLLECTION_LEN,
        }
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writes one tag and its value.
pub(crate) fn write_field(writer: &mut Writer, folder: &JobFolder, tag: FolderTag) {
    writer.write_str(tag.name());
    match tag {
        FolderTag::Name => writer.write_str(&folder.name),
        FolderTag::DisplayInReadOnly => writer.write_bool(folder.display_in_read_only),
        FolderTag::IsVirtual => writer.write_bool(folder.is_virtual),
        FolderTag::Parent => writer.write_opt_str(folder.parent_name.as_deref()),
        FolderTag::Children => writer.write_string_list(&folder.child_names),
        FolderTag::Description => writer.write_opt_str(folder.description.as_deref()),
        FolderTag::Jobs => writer.write_string_list(&folder.job_ids),
        FolderTag::OptimizingJobs => writer.write_string_list(&folder.optimizing_job_ids),
        FolderTag::Files => writer.write_string_list(&folder.file_names),
        FolderTag::Permissions => writer.write_sequence(|w| {
            for permission in &folder.permissions {
                write_permission(w, permission);
            }
        }),
    }
}

/// Encodes a folder.
///
/// Fields are written in [`FolderTag::ALL`] order; collections in their
/// stored order. Absent parent and description are written as empty strings.
pub fn encode_folder(folder: &JobFolder) -> Vec<u8> {
    let mut writer = Writer::with_capacity(256);
    writer.write_sequence(|w| {
        for tag in FolderTag::ALL {
            write_field(w, folder, tag);
        }
    });
    trace!(folder = %folder.name, size = writer.len(), "encoded job folder");
    writer.into_bytes()
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a folder with default options.
pub fn decode_folder(input: &[u8]) -> Result<JobFolder, RecordDecodeError> {
    decode_folder_with_options(input, &DecodeOptions::default())
}

/// Decodes a folder.
///
/// Any failure, whether framing, a value of the wrong shape or a dangling
/// tag, is reported as one [`RecordDecodeError`].
pub fn decode_folder_with_options(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<JobFolder, RecordDecodeError> {
    read_folder(input, options).map_err(|source| {
        debug!(len = input.len(), error = %source, "failed to decode job folder");
        RecordDecodeError::new(FOLDER_RECORD, input, source)
    })
}

fn read_folder(input: &[u8], options: &DecodeOptions) -> Result<JobFolder, DecodeError> {
    if input.len() > options.max_record_size {
        return Err(DecodeError::LengthExceedsLimit {
            field: FOLDER_RECORD,
            len: input.len(),
            max: options.max_record_size,
        });
    }

    let outer = read_single_element(input, FOLDER_RECORD)?;
    let elements = outer.as_sequence(options.max_collection_len, FOLDER_RECORD)?;

    let mut name = None;
    let mut display_in_read_only = false;
    let mut is_virtual = false;
    let mut parent_name = None;
    let mut child_names = Vec::new();
    let mut description = None;
    let mut job_ids = Vec::new();
    let mut optimizing_job_ids = Vec::new();
    let mut file_names = Vec::new();
    let mut permissions = Vec::new();

    let max = options.max_collection_len;
    for (tag_name, value) in read_pairs(&elements, FOLDER_RECORD)? {
        let Some(tag) = FolderTag::from_name(tag_name) else {
            debug!(tag = tag_name, "ignoring unknown job folder tag");
            continue;
        };
        let field = tag.name();
        match tag {
            FolderTag::Name => name = Some(value.as_str(field)?.to_owned()),
            FolderTag::DisplayInReadOnly => display_in_read_only = value.as_bool(field)?,
            FolderTag::IsVirtual => is_virtual = value.as_bool(field)?,
            FolderTag::Parent => parent_name = Some(value.as_str(field)?.to_owned()),
            FolderTag::Children => child_names = value.as_string_list(max, field)?,
            FolderTag::Description => description = Some(value.as_str(field)?.to_owned()),
            FolderTag::Jobs => job_ids = value.as_string_list(max, field)?,
            FolderTag::OptimizingJobs => optimizing_job_ids = value.as_string_list(max, field)?,
            FolderTag::Files => file_names = value.as_string_list(max, field)?,
            FolderTag::Permissions => {
                permissions = value
                    .as_sequence(max, field)?
                    .iter()
                    .map(|element| read_permission(element, options))
                    .collect::<Result<Vec<_>, _>>()?;
            }
        }
    }

    Ok(JobFolderBuilder::new(name.unwrap_or_default())
        .display_in_read_only(display_in_read_only)
        .virtual_folder(is_virtual)
        .parent_name(parent_name)
        .child_names(child_names)
        .description_opt(description)
        .job_ids(job_ids)
        .optimizing_job_ids(optimizing_job_ids)
        .file_names(file_names)
        .permissions(permissions)
        .build())
}
