//! # taskgate
//!
//! Role-based authorization middleware for [axum](https://docs.rs/axum).
//!
//! taskgate gates a request pipeline on a single boolean question: *is the
//! caller's role set allowed to perform the task this request resolves to?*
//! A task is an opaque string key — the request URI or the matched route
//! template — looked up in an [`Acl`], with a default permission for tasks
//! the ACL does not register. Denied requests are answered with a bare
//! `401 Unauthorized` (configurable); allowed requests pass through to the
//! inner handler untouched.
//!
//! Authentication is explicitly out of scope: taskgate consumes an
//! already-resolved role set and never establishes identity.
//!
//! ## Architecture
//!
//! ```text
//! crates/taskgate-core/    # Acl, Authorizer, TaskNotFound (framework-free)
//! src/middleware/          # tower Layer/Service + task extractors
//! ```
//!
//! The decision core lives in [`taskgate_core`] and knows nothing about
//! HTTP; this crate threads it into a [`tower::Layer`] with a pluggable
//! [`TaskExtractor`] strategy.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::{routing::get, Router};
//! use taskgate::{Acl, AuthorizationLayer, Authorizer};
//!
//! let authorizer = Arc::new(Authorizer::new(
//!     Acl::new()
//!         .allow("/", ["registered", "admin"])
//!         .allow("/admin", ["admin"]),
//!     false,
//! ));
//!
//! // Role resolution is the application's business; here the whole service
//! // runs with one fixed role set.
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "hello" }))
//!     .route("/admin", get(|| async { "top secret" }))
//!     .layer(AuthorizationLayer::request_uri(
//!         authorizer.into_fn(vec!["registered".into()]),
//!     ));
//! ```
//!
//! The authorizer argument is any `Fn(&str) -> bool + Clone`, so per-request
//! role sources (sessions, token claims) are a closure away.
//!
//! ## Logging
//!
//! All decisions are emitted as structured [`tracing`] events: one info event
//! per authorization decision, a warn event when no task identifier could be
//! extracted, info events on the allow/deny branches of the middleware. With
//! no subscriber installed these are no-ops — logging is never required for
//! correct operation.

pub mod middleware;

pub use middleware::{
    AuthorizationLayer, AuthorizationService, ExtractFn, RequestUri, RouteName, TaskExtractor,
    extract_fn,
};

// Re-export the decision core for convenience
pub use taskgate_core;
pub use taskgate_core::{Acl, Authorizer, TaskNotFound};
