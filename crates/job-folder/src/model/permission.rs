//! Access-control entries attached to folders.

use crate::model::names;

/// A user as seen by permission checks: a name plus group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    /// The user's login name.
    pub name: String,
    /// Names of the groups the user belongs to.
    pub group_names: Vec<String>,
}

impl User {
    /// Creates a user with no group memberships.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_names: Vec::new(),
        }
    }

    /// Adds a group membership.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_names.push(group.into());
        self
    }
}

/// A named permission granted to a set of users and groups.
///
/// Folders keep at most one permission per name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Permission {
    name: String,
    user_names: Vec<String>,
    group_names: Vec<String>,
}

impl Permission {
    /// Creates a permission. The lists are stored as given.
    pub fn new(
        name: impl Into<String>,
        user_names: impl IntoIterator<Item = impl Into<String>>,
        group_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            user_names: names::collected(user_names),
            group_names: names::collected(group_names),
        }
    }

    /// Creates a permission granted to nobody.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_names: Vec::new(),
            group_names: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_names(&self) -> &[String] {
        &self.user_names
    }

    pub fn group_names(&self) -> &[String] {
        &self.group_names
    }

    /// Replaces the user list, sorted ascending without repeats.
    pub fn set_user_names(&mut self, user_names: impl IntoIterator<Item = impl Into<String>>) {
        self.user_names = names::sorted(user_names);
    }

    /// Adds a user name, keeping the list sorted. No-op if present.
    pub fn add_user_name(&mut self, user_name: impl Into<String>) {
        names::insert_sorted(&mut self.user_names, user_name);
    }

    /// Removes the first matching user name.
    pub fn remove_user_name(&mut self, user_name: &str) {
        names::remove_first(&mut self.user_names, user_name);
    }

    /// Replaces the group list, sorted ascending without repeats.
    pub fn set_group_names(&mut self, group_names: impl IntoIterator<Item = impl Into<String>>) {
        self.group_names = names::sorted(group_names);
    }

    /// Adds a group name, keeping the list sorted. No-op if present.
    pub fn add_group_name(&mut self, group_name: impl Into<String>) {
        names::insert_sorted(&mut self.group_names, group_name);
    }

    /// Removes the first matching group name.
    pub fn remove_group_name(&mut self, group_name: &str) {
        names::remove_first(&mut self.group_names, group_name);
    }

    /// Returns true if the user is listed directly or through any group.
    pub fn applies_to_user(&self, user: &User) -> bool {
        if names::contains(&self.user_names, &user.name) {
            return true;
        }
        user.group_names
            .iter()
            .any(|group| names::contains(&self.group_names, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_to_listed_user() {
        let perm = Permission::new("view_job", ["alice"], Vec::<String>::new());
        assert!(perm.applies_to_user(&User::new("alice")));
        assert!(!perm.applies_to_user(&User::new("bob")));
    }

    #[test]
    fn test_applies_through_group() {
        let perm = Permission::new("schedule_job", Vec::<String>::new(), ["admins", "ops"]);
        let bob = User::new("bob").with_group("staff").with_group("ops");
        let carol = User::new("carol").with_group("staff");
        assert!(perm.applies_to_user(&bob));
        assert!(!perm.applies_to_user(&carol));
    }

    #[test]
    fn test_user_list_maintenance() {
        let mut perm = Permission::named("delete_job");
        perm.add_user_name("zed");
        perm.add_user_name("amy");
        perm.add_user_name("zed");
        assert_eq!(perm.user_names(), ["amy", "zed"]);

        perm.remove_user_name("amy");
        assert_eq!(perm.user_names(), ["zed"]);

        perm.set_user_names(["m", "c", "m"]);
        assert_eq!(perm.user_names(), ["c", "m"]);
    }

    #[test]
    fn test_group_list_maintenance() {
        let mut perm = Permission::named("view_job");
        perm.set_group_names(["qa", "dev"]);
        perm.add_group_name("ops");
        assert_eq!(perm.group_names(), ["dev", "ops", "qa"]);
        perm.remove_group_name("dev");
        assert_eq!(perm.group_names(), ["ops", "qa"]);
    }

    #[test]
    fn test_new_keeps_given_order() {
        let perm = Permission::new("p", ["b", "a"], ["y", "x"]);
        assert_eq!(perm.user_names(), ["b", "a"]);
        assert_eq!(perm.group_names(), ["y", "x"]);
    }
}
