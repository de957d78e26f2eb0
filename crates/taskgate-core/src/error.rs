use thiserror::Error;

/// Lookup miss raised by [`Authorizer::get`](crate::Authorizer::get).
///
/// Distinct from an authorization denial: an unregistered task still yields a
/// boolean decision via the default permission, but explicitly fetching its
/// role set is an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task {task:?} is not registered in the ACL")]
pub struct TaskNotFound {
    /// The task identifier that had no ACL entry.
    pub task: String,
}
