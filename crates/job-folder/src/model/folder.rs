//! The job folder record.
//!
//! A folder groups jobs, optimizing jobs, uploaded files and child folders,
//! all referenced by name. Parent and child folders are resolved by an
//! external store; nothing here owns another folder.

use crate::model::names;
use crate::model::permission::{Permission, User};

/// A named, hierarchical grouping of job and file identifiers.
///
/// Collections are never absent. `child_names`, `job_ids` and
/// `optimizing_job_ids` stay sorted and free of repeats through every
/// mutator. `file_names` is
/// sorted by [`JobFolder::add_file_name`] but kept in caller order by
/// [`JobFolder::set_file_names`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFolder {
    pub(crate) name: String,
    pub(crate) display_in_read_only: bool,
    pub(crate) is_virtual: bool,
    pub(crate) parent_name: Option<String>,
    pub(crate) child_names: Vec<String>,
    pub(crate) description: Option<String>,
    pub(crate) job_ids: Vec<String>,
    pub(crate) optimizing_job_ids: Vec<String>,
    pub(crate) file_names: Vec<String>,
    pub(crate) permissions: Vec<Permission>,
}

/// Empty strings are stored as absent so they survive the wire round trip.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl JobFolder {
    /// Creates an empty top-level folder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The folder's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the folder is shown in restricted read-only mode.
    pub fn display_in_read_only(&self) -> bool {
        self.display_in_read_only
    }

    /// Sets whether the folder is shown in read-only mode.
    pub fn set_display_in_read_only(&mut self, display_in_read_only: bool) {
        self.display_in_read_only = display_in_read_only;
    }

    /// Virtual folders are a classification only.
    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    /// Name of the parent folder, if any.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    /// Returns true if the folder has no parent.
    pub fn is_top_level(&self) -> bool {
        self.parent_name.is_none()
    }

    /// Free-text description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets or clears the description. An empty description clears it.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = non_empty(description);
    }

    // =========================================================================
    // Child folders
    // =========================================================================

    /// Names of the direct child folders.
    pub fn child_names(&self) -> &[String] {
        &self.child_names
    }

    /// Returns true if `child_name` is a direct child.
    pub fn contains_child_name(&self, child_name: &str) -> bool {
        names::contains(&self.child_names, child_name)
    }

    /// Replaces the child list, sorted ascending without repeats.
    pub fn set_child_names(&mut self, child_names: impl IntoIterator<Item = impl Into<String>>) {
        self.child_names = names::sorted(child_names);
    }

    /// Adds a child folder name, keeping the list sorted. No-op if present.
    pub fn add_child_name(&mut self, child_name: impl Into<String>) {
        names::insert_sorted(&mut self.child_names, child_name);
    }

    /// Removes a child folder name. No-op if absent.
    pub fn remove_child_name(&mut self, child_name: &str) {
        names::remove_first(&mut self.child_names, child_name);
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    /// Identifiers of the jobs in this folder.
    pub fn job_ids(&self) -> &[String] {
        &self.job_ids
    }

    /// Returns true if the folder holds `job_id`.
    pub fn contains_job_id(&self, job_id: &str) -> bool {
        names::contains(&self.job_ids, job_id)
    }

    /// Replaces the job list, sorted ascending without repeats.
    pub fn set_job_ids(&mut self, job_ids: impl IntoIterator<Item = impl Into<String>>) {
        self.job_ids = names::sorted(job_ids);
    }

    /// Adds a job, keeping the list sorted. No-op if present.
    pub fn add_job_id(&mut self, job_id: impl Into<String>) {
        names::insert_sorted(&mut self.job_ids, job_id);
    }

    /// Removes a job. No-op if absent.
    pub fn remove_job_id(&mut self, job_id: &str) {
        names::remove_first(&mut self.job_ids, job_id);
    }

    // =========================================================================
    // Optimizing jobs
    // =========================================================================

    /// Identifiers of the optimizing jobs in this folder.
    pub fn optimizing_job_ids(&self) -> &[String] {
        &self.optimizing_job_ids
    }

    /// Returns true if the folder holds `optimizing_job_id`.
    pub fn contains_optimizing_job_id(&self, optimizing_job_id: &str) -> bool {
        names::contains(&self.optimizing_job_ids, optimizing_job_id)
    }

    /// Replaces the optimizing job list, sorted ascending without repeats.
    pub fn set_optimizing_job_ids(
        &mut self,
        optimizing_job_ids: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.optimizing_job_ids = names::sorted(optimizing_job_ids);
    }

    /// Adds an optimizing job, keeping the list sorted. No-op if present.
    pub fn add_optimizing_job_id(&mut self, optimizing_job_id: impl Into<String>) {
        names::insert_sorted(&mut self.optimizing_job_ids, optimizing_job_id);
    }

    /// Removes an optimizing job. No-op if absent.
    pub fn remove_optimizing_job_id(&mut self, optimizing_job_id: &str) {
        names::remove_first(&mut self.optimizing_job_ids, optimizing_job_id);
    }

    // =========================================================================
    // Uploaded files
    // =========================================================================

    /// Names of the files uploaded into this folder.
    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    /// Returns true if the folder holds `file_name`.
    pub fn contains_file_name(&self, file_name: &str) -> bool {
        names::contains(&self.file_names, file_name)
    }

    /// Replaces the file list. Unlike the other collections, the given order
    /// is kept as is.
    pub fn set_file_names(&mut self, file_names: impl IntoIterator<Item = impl Into<String>>) {
        self.file_names = names::collected(file_names);
    }

    /// Adds a file name; the whole list is then sorted ascending.
    pub fn add_file_name(&mut self, file_name: impl Into<String>) {
        names::insert_sorted(&mut self.file_names, file_name);
    }

    /// Removes the first matching file name. No-op if absent.
    pub fn remove_file_name(&mut self, file_name: &str) {
        names::remove_first(&mut self.file_names, file_name);
    }

    // =========================================================================
    // Permissions
    // =========================================================================

    /// Permissions defined on this folder, in insertion order.
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// Looks up a permission by name.
    pub fn permission(&self, name: &str) -> Option<&Permission> {
        self.permissions.iter().find(|p| p.name() == name)
    }

    /// Replaces all permissions, keeping the given order.
    pub fn set_permissions(&mut self, permissions: impl IntoIterator<Item = Permission>) {
        self.permissions = permissions.into_iter().collect();
    }

    /// Replaces the permission with the same name in place, or appends it.
    pub fn set_permission(&mut self, permission: Permission) {
        match self.permissions.iter_mut().find(|p| p.name() == permission.name()) {
            Some(existing) => *existing = permission,
            None => self.permissions.push(permission),
        }
    }

    /// Removes the permission with the given name. No-op if absent.
    pub fn remove_permission(&mut self, name: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p.name() == name) {
            self.permissions.remove(pos);
        }
    }

    /// Checks whether `user` holds the named permission on this folder.
    ///
    /// Returns false when the folder defines no permission with that name.
    pub fn user_has_permission(&self, user: &User, permission_name: &str) -> bool {
        self.permission(permission_name)
            .is_some_and(|p| p.applies_to_user(user))
    }
}
