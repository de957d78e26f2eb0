//! The authorization decision core.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::acl::Acl;
use crate::error::TaskNotFound;

/// Answers "is any of these roles allowed to perform this task?".
///
/// Owns an [`Acl`] and a default permission. The decision is a pure function
/// of the ACL, the default, the task and the presented roles; the only side
/// effect is one `tracing` info event per [`authorize`](Self::authorize)
/// call. With no subscriber installed those events are no-ops, so logging is
/// never required for correct operation.
///
/// Nothing is mutated after construction, so a single instance (typically
/// behind an `Arc`) can be shared across request-handling tasks without
/// locking.
#[derive(Debug, Clone)]
pub struct Authorizer {
    acl: Acl,
    default_permission: bool,
}

impl Authorizer {
    /// Create an authorizer from an ACL and the fallback decision for tasks
    /// the ACL does not register.
    pub fn new(acl: Acl, default_permission: bool) -> Self {
        Self {
            acl,
            default_permission,
        }
    }

    /// Decide whether any of `user_roles` is allowed to perform `task`.
    ///
    /// A registered task permits when the intersection of `user_roles` and
    /// its allowed set is non-empty; any overlap suffices, so role order and
    /// duplicates are irrelevant. An unregistered task yields the default
    /// permission. Never errors — absence of a match is a decision, not a
    /// failure.
    pub fn authorize<S: AsRef<str>>(&self, task: &str, user_roles: &[S]) -> bool {
        let permitted = match self.acl.roles(task) {
            Some(allowed) => user_roles.iter().any(|role| allowed.contains(role.as_ref())),
            None => self.default_permission,
        };

        info!(
            task,
            user_roles = %join_roles(user_roles),
            permitted = if permitted { "yes" } else { "no" },
            "authorize"
        );

        permitted
    }

    /// Whether `task` has a registered ACL entry. Pure, no logging.
    pub fn has(&self, task: &str) -> bool {
        self.acl.contains(task)
    }

    /// The registered role set for `task`.
    ///
    /// Fails with [`TaskNotFound`] when the task has no entry — unlike
    /// [`authorize`](Self::authorize), an explicit fetch does not fall back
    /// to the default permission.
    pub fn get(&self, task: &str) -> Result<&HashSet<String>, TaskNotFound> {
        self.acl.roles(task).ok_or_else(|| TaskNotFound {
            task: task.to_owned(),
        })
    }

    /// The configured fallback decision for unregistered tasks.
    pub fn default_permission(&self) -> bool {
        self.default_permission
    }

    /// Curry a role set into a `Fn(&str) -> bool` closure.
    ///
    /// The result matches the authorizer contract of
    /// `taskgate::AuthorizationLayer`, so a shared `Authorizer` plugs
    /// straight into the middleware:
    ///
    /// ```
    /// use std::sync::Arc;
    /// use taskgate_core::{Acl, Authorizer};
    ///
    /// let authorizer = Arc::new(Authorizer::new(
    ///     Acl::new().allow("/reports", ["auditor"]),
    ///     false,
    /// ));
    /// let can_access = authorizer.into_fn(vec!["auditor".into()]);
    ///
    /// assert!(can_access("/reports"));
    /// assert!(!can_access("/anything-else"));
    /// ```
    pub fn into_fn(self: Arc<Self>, user_roles: Vec<String>) -> impl Fn(&str) -> bool + Clone {
        move |task| self.authorize(task, &user_roles)
    }
}

fn join_roles<S: AsRef<str>>(roles: &[S]) -> String {
    roles
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
