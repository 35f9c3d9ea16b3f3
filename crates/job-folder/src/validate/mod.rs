//! Invariant checks for a single folder record.
//!
//! Mutators keep a folder valid, but records received from another process
//! are built as decoded and may not be. These checks cover one record only;
//! references to other folders are not resolved.

use rustc_hash::FxHashSet;

use crate::error::ValidationError;
use crate::model::JobFolder;

/// Validates a folder against its record invariants.
///
/// Checks, in order:
/// - the name is non-empty
/// - the folder is not its own parent or child
/// - children, jobs and optimizing jobs are strictly ascending
/// - file names contain no duplicates
/// - permission names are unique
pub fn validate_folder(folder: &JobFolder) -> Result<(), ValidationError> {
    if folder.name().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if folder.parent_name() == Some(folder.name()) {
        return Err(ValidationError::SelfReference {
            name: folder.name().to_owned(),
            relation: "parent",
        });
    }
    if folder.contains_child_name(folder.name()) {
        return Err(ValidationError::SelfReference {
            name: folder.name().to_owned(),
            relation: "child",
        });
    }

    validate_strictly_ascending("children", folder.child_names())?;
    validate_strictly_ascending("jobs", folder.job_ids())?;
    validate_strictly_ascending("optimizing_jobs", folder.optimizing_job_ids())?;
    validate_unique("files", folder.file_names().iter().map(String::as_str))?;

    let mut seen = FxHashSet::default();
    for permission in folder.permissions() {
        if !seen.insert(permission.name()) {
            return Err(ValidationError::DuplicatePermission {
                name: permission.name().to_owned(),
            });
        }
    }

    Ok(())
}

fn validate_strictly_ascending(
    collection: &'static str,
    values: &[String],
) -> Result<(), ValidationError> {
    for pair in values.windows(2) {
        if pair[0] == pair[1] {
            return Err(ValidationError::DuplicateEntry {
                collection,
                value: pair[1].clone(),
            });
        }
        if pair[0] > pair[1] {
            return Err(ValidationError::Unsorted {
                collection,
                value: pair[1].clone(),
            });
        }
    }
    Ok(())
}

fn validate_unique<'a>(
    collection: &'static str,
    values: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = FxHashSet::default();
    for value in values {
        if !seen.insert(value) {
            return Err(ValidationError::DuplicateEntry {
                collection,
                value: value.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JobFolderBuilder, Permission};

    #[test]
    fn test_mutated_folder_is_valid() {
        let mut folder = JobFolder::new("f");
        folder.set_child_names(["c", "a", "b"]);
        folder.add_job_id("j2");
        folder.add_job_id("j1");
        folder.set_file_names(["z", "a"]);
        folder.set_permission(Permission::named("view"));
        assert_eq!(validate_folder(&folder), Ok(()));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_folder(&JobFolder::new("")), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_unsorted_jobs() {
        let folder = JobFolderBuilder::new("f").job_ids(["j2", "j1"]).build();
        assert_eq!(
            validate_folder(&folder),
            Err(ValidationError::Unsorted {
                collection: "jobs",
                value: "j1".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_children() {
        let folder = JobFolderBuilder::new("f").child_names(["a", "a"]).build();
        assert!(matches!(
            validate_folder(&folder),
            Err(ValidationError::DuplicateEntry { collection: "children", .. })
        ));
    }

    #[test]
    fn test_duplicate_files() {
        let folder = JobFolderBuilder::new("f").file_names(["x", "y", "x"]).build();
        assert!(matches!(
            validate_folder(&folder),
            Err(ValidationError::DuplicateEntry { collection: "files", .. })
        ));
    }

    #[test]
    fn test_duplicate_permission_names() {
        let folder = JobFolderBuilder::new("f")
            .permissions([Permission::named("view"), Permission::named("view")])
            .build();
        assert_eq!(
            validate_folder(&folder),
            Err(ValidationError::DuplicatePermission {
                name: "view".to_string(),
            })
        );
    }

    #[test]
    fn test_self_reference() {
        let folder = JobFolderBuilder::new("f").parent("f").build();
        assert!(matches!(
            validate_folder(&folder),
            Err(ValidationError::SelfReference { relation: "parent", .. })
        ));

        let mut folder = JobFolder::new("f");
        folder.add_child_name("f");
        assert!(matches!(
            validate_folder(&folder),
            Err(ValidationError::SelfReference { relation: "child", .. })
        ));
    }
}
