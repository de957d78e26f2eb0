//! Authorization middleware for axum request pipelines.
//!
//! # Modules
//!
//! - [`layer`]: the tower [`Layer`](tower::Layer)/`Service` pair that gates
//!   requests on an authorization decision
//! - [`extract`]: strategies for deriving a task identifier from a request
//!
//! # Request flow
//!
//! 1. The configured [`TaskExtractor`] derives a task identifier from the
//!    request; a missing identifier degrades to the empty string with a
//!    warning, it never fails the request.
//! 2. The authorizer function decides `Fn(&str) -> bool`.
//! 3. Denied: respond immediately with the configured status (401 by
//!    default), empty body, inner handler never runs.
//! 4. Allowed: delegate to the inner handler and return its response
//!    unchanged.

pub mod extract;
pub mod layer;

pub use extract::{ExtractFn, RequestUri, RouteName, TaskExtractor, extract_fn};
pub use layer::{AuthorizationLayer, AuthorizationService};
