//! Builder API for fully populated folder construction.
//!
//! # Example
//!
//! ```rust
//! use job_folder::{JobFolderBuilder, Permission};
//!
//! let folder = JobFolderBuilder::new("nightly")
//!     .parent("load-tests")
//!     .description("Nightly regression runs")
//!     .job_ids(["20240101000000-0001", "20240102000000-0001"])
//!     .file_names(["ldif/users.ldif"])
//!     .permission(Permission::new("view_job", ["alice"], ["qa"]))
//!     .build();
//!
//! assert_eq!(folder.parent_name(), Some("load-tests"));
//! ```
//!
//! Collections are stored exactly as given, the same way a decoded record
//! keeps its wire order. Use the folder's `set_*` mutators to get sorted
//! collections.

use crate::model::folder::{non_empty, JobFolder};
use crate::model::names;
use crate::model::permission::Permission;

/// Builder for constructing a [`JobFolder`].
#[derive(Debug, Clone, Default)]
pub struct JobFolderBuilder {
    folder: JobFolder,
}

impl JobFolderBuilder {
    /// Creates a builder for a folder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            folder: JobFolder::new(name),
        }
    }

    /// Sets whether the folder is shown in read-only mode.
    pub fn display_in_read_only(mut self, display_in_read_only: bool) -> Self {
        self.folder.display_in_read_only = display_in_read_only;
        self
    }

    /// Marks the folder as virtual.
    pub fn virtual_folder(mut self, is_virtual: bool) -> Self {
        self.folder.is_virtual = is_virtual;
        self
    }

    /// Sets the parent folder name.
    pub fn parent(self, parent_name: impl Into<String>) -> Self {
        self.parent_name(Some(parent_name.into()))
    }

    /// Sets or clears the parent folder name. An empty name clears it.
    pub fn parent_name(mut self, parent_name: Option<String>) -> Self {
        self.folder.parent_name = non_empty(parent_name);
        self
    }

    /// Sets the description.
    pub fn description(self, description: impl Into<String>) -> Self {
        self.description_opt(Some(description.into()))
    }

    /// Sets or clears the description. An empty description clears it.
    pub fn description_opt(mut self, description: Option<String>) -> Self {
        self.folder.description = non_empty(description);
        self
    }

    /// Sets the child folder names, as given.
    pub fn child_names(mut self, child_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.folder.child_names = names::collected(child_names);
        self
    }

    /// Sets the job identifiers, as given.
    pub fn job_ids(mut self, job_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.folder.job_ids = names::collected(job_ids);
        self
    }

    /// Sets the optimizing job identifiers, as given.
    pub fn optimizing_job_ids(
        mut self,
        optimizing_job_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.folder.optimizing_job_ids = names::collected(optimizing_job_ids);
        self
    }

    /// Sets the uploaded file names, as given.
    pub fn file_names(mut self, file_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.folder.file_names = names::collected(file_names);
        self
    }

    /// Replaces all permissions.
    pub fn permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.folder.permissions = permissions.into_iter().collect();
        self
    }

    /// Adds a permission, replacing an earlier one with the same name.
    pub fn permission(mut self, permission: Permission) -> Self {
        self.folder.set_permission(permission);
        self
    }

    /// Builds the folder.
    pub fn build(self) -> JobFolder {
        self.folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_populates_all_fields() {
        let folder = JobFolderBuilder::new("batch1")
            .display_in_read_only(true)
            .virtual_folder(true)
            .parent("root")
            .description("desc")
            .child_names(["c2", "c1"])
            .job_ids(["j1"])
            .optimizing_job_ids(["o1"])
            .file_names(["f.txt"])
            .permission(Permission::named("view"))
            .build();

        assert_eq!(folder.name(), "batch1");
        assert!(folder.display_in_read_only());
        assert!(folder.is_virtual());
        assert_eq!(folder.parent_name(), Some("root"));
        assert_eq!(folder.description(), Some("desc"));
        assert_eq!(folder.child_names(), ["c2", "c1"]);
        assert_eq!(folder.job_ids(), ["j1"]);
        assert_eq!(folder.optimizing_job_ids(), ["o1"]);
        assert_eq!(folder.file_names(), ["f.txt"]);
        assert_eq!(folder.permissions().len(), 1);
    }

    #[test]
    fn test_builder_empty_strings_are_absent() {
        let folder = JobFolderBuilder::new("f")
            .parent("")
            .description_opt(Some(String::new()))
            .build();
        assert!(folder.is_top_level());
        assert_eq!(folder.description(), None);
    }

    #[test]
    fn test_builder_permission_upsert() {
        let folder = JobFolderBuilder::new("f")
            .permission(Permission::new("view", ["a"], Vec::<String>::new()))
            .permission(Permission::new("view", ["b"], Vec::<String>::new()))
            .build();
        assert_eq!(folder.permissions().len(), 1);
        assert_eq!(folder.permissions()[0].user_names(), ["b"]);
    }
}
