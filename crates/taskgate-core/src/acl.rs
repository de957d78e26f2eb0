//! Access-control list: task identifier → allowed role set.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Mapping from task identifiers to the set of roles allowed to perform them.
///
/// Keys are opaque strings; the empty string is a valid key. An `Acl` is
/// mutable while it is being built and is treated as immutable once handed to
/// an [`Authorizer`](crate::Authorizer) — changing the rules means building a
/// new `Acl`.
///
/// Serializes transparently as a plain map, so an ACL can live in a JSON or
/// TOML config file:
///
/// ```
/// use taskgate_core::Acl;
///
/// let acl: Acl = serde_json::from_str(
///     r#"{ "/foo": ["registered"], "/bar": ["admin", "superuser"] }"#,
/// ).unwrap();
/// assert!(acl.contains("/foo"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acl {
    tasks: HashMap<String, HashSet<String>>,
}

impl Acl {
    /// Create an empty ACL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `roles` as allowed for `task`, replacing any previous entry.
    ///
    /// Builder-style, chainable:
    ///
    /// ```
    /// use taskgate_core::Acl;
    ///
    /// let acl = Acl::new()
    ///     .allow("/admin", ["admin"])
    ///     .allow("/reports", ["admin", "auditor"]);
    /// assert_eq!(acl.len(), 2);
    /// ```
    pub fn allow<T, I, R>(mut self, task: T, roles: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.insert(task, roles);
        self
    }

    /// In-place variant of [`allow`](Self::allow).
    pub fn insert<T, I, R>(&mut self, task: T, roles: I)
    where
        T: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.tasks
            .insert(task.into(), roles.into_iter().map(Into::into).collect());
    }

    /// Whether `task` has a registered entry.
    pub fn contains(&self, task: &str) -> bool {
        self.tasks.contains_key(task)
    }

    /// The allowed role set for `task`, if registered.
    pub fn roles(&self, task: &str) -> Option<&HashSet<String>> {
        self.tasks.get(task)
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over registered tasks and their allowed role sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.tasks.iter().map(|(task, roles)| (task.as_str(), roles))
    }
}

impl<T, I, R> FromIterator<(T, I)> for Acl
where
    T: Into<String>,
    I: IntoIterator<Item = R>,
    R: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut acl = Acl::new();
        for (task, roles) in iter {
            acl.insert(task, roles);
        }
        acl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_previous_entry() {
        let mut acl = Acl::new();
        acl.insert("/foo", ["admin", "superuser"]);
        acl.insert("/foo", ["registered"]);

        let roles = acl.roles("/foo").unwrap();
        assert_eq!(roles.len(), 1);
        assert!(roles.contains("registered"));
    }

    #[test]
    fn test_empty_string_is_a_valid_key() {
        let acl = Acl::new().allow("", ["anonymous"]);
        assert!(acl.contains(""));
        assert!(acl.roles("").unwrap().contains("anonymous"));
    }

    #[test]
    fn test_from_iterator() {
        let acl: Acl = [("/foo", vec!["admin"]), ("/bar", vec!["admin", "staff"])]
            .into_iter()
            .collect();
        assert_eq!(acl.len(), 2);
        assert!(acl.contains("/foo"));
        assert!(acl.contains("/bar"));
        assert!(!acl.contains("/baz"));
    }

    #[test]
    fn test_serde_round_trip() {
        let acl = Acl::new().allow("/foo", ["registered"]);
        let json = serde_json::to_string(&acl).unwrap();
        let parsed: Acl = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, acl);
    }
}
