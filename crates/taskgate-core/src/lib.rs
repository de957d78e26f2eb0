//! # taskgate-core
//!
//! Framework-free authorization decision core for taskgate.
//!
//! This crate answers exactly one question: *is any of these roles allowed to
//! perform this task?* A task is an opaque string key (typically a route path
//! or a route template), roles are opaque string tokens supplied per call,
//! and the mapping between them is an [`Acl`] owned by an [`Authorizer`]
//! together with a default permission for unregistered tasks.
//!
//! Nothing here knows about HTTP; the `taskgate` crate layers the decision
//! into a request pipeline.
//!
//! # Example
//!
//! ```
//! use taskgate_core::{Acl, Authorizer};
//!
//! let acl = Acl::new()
//!     .allow("/foo", ["registered"])
//!     .allow("/bar", ["admin", "superuser"]);
//!
//! let authorizer = Authorizer::new(acl, false);
//!
//! assert!(authorizer.authorize("/bar", &["admin"]));
//! assert!(!authorizer.authorize("/foo", &["admin"]));
//! // Unregistered tasks fall back to the default permission.
//! assert!(!authorizer.authorize("/baz", &["admin"]));
//! ```

pub mod acl;
pub mod authorizer;
pub mod error;

// Re-export commonly used types at crate root
pub use acl::Acl;
pub use authorizer::Authorizer;
pub use error::TaskNotFound;
