//! Task-identifier extraction strategies.
//!
//! How a request maps to a task identifier is the middleware's only
//! variation point, so it is a strategy trait rather than a type hierarchy.
//! Implement [`TaskExtractor`] to plug in a custom mapping (a header, a
//! request extension populated by an auth layer, ...).

use axum::extract::{MatchedPath, Request};
use tracing::info;

/// Derives the task identifier an authorizer will be asked about.
///
/// Returning `None` is a soft signal: the middleware logs a warning and
/// proceeds with the empty string as the task, so the decision falls through
/// the normal ACL/default-permission rules.
pub trait TaskExtractor {
    /// Derive a task identifier from `request`.
    fn extract(&self, request: &Request) -> Option<String>;
}

/// Wrap a closure as a [`TaskExtractor`], `tower::service_fn` style.
///
/// ```
/// use axum::extract::Request;
/// use taskgate::middleware::extract::extract_fn;
///
/// let from_header = extract_fn(|request: &Request| {
///     request
///         .headers()
///         .get("x-task")
///         .and_then(|value| value.to_str().ok())
///         .map(str::to_owned)
/// });
/// # let _ = from_header;
/// ```
pub fn extract_fn<F>(f: F) -> ExtractFn<F>
where
    F: Fn(&Request) -> Option<String>,
{
    ExtractFn(f)
}

/// A [`TaskExtractor`] backed by a closure. See [`extract_fn`].
#[derive(Debug, Clone, Copy)]
pub struct ExtractFn<F>(F);

impl<F> TaskExtractor for ExtractFn<F>
where
    F: Fn(&Request) -> Option<String>,
{
    fn extract(&self, request: &Request) -> Option<String> {
        (self.0)(request)
    }
}

/// Task identifier = the stringified request URI (path plus query).
///
/// `GET /reports?year=2026` resolves to the task `/reports?year=2026`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestUri;

impl TaskExtractor for RequestUri {
    fn extract(&self, request: &Request) -> Option<String> {
        Some(request.uri().to_string())
    }
}

/// Task identifier = the route template the router matched, read from the
/// [`MatchedPath`] extension axum attaches to routed requests.
///
/// `GET /users/42` on a `/users/{id}` route resolves to the task
/// `/users/{id}`. Requests that never went through an axum router (or hit a
/// fallback) carry no `MatchedPath`; those degrade to an absent task.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteName;

impl TaskExtractor for RouteName {
    fn extract(&self, request: &Request) -> Option<String> {
        let Some(matched) = request.extensions().get::<MatchedPath>() else {
            info!("matched route not available on request");
            return None;
        };

        let name = matched.as_str();
        if name.is_empty() {
            info!("matched route name is empty");
            return None;
        }

        Some(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_uri_includes_path_and_query() {
        let request = Request::builder()
            .uri("/foo/bar?abc=123&foo=bar")
            .body(Body::empty())
            .unwrap();

        assert_eq!(
            RequestUri.extract(&request).as_deref(),
            Some("/foo/bar?abc=123&foo=bar")
        );
    }

    #[test]
    fn test_route_name_absent_without_router() {
        let request = Request::builder()
            .uri("/foo")
            .body(Body::empty())
            .unwrap();

        assert_eq!(RouteName.extract(&request), None);
    }

    #[test]
    fn test_closure_extractor() {
        let from_header = extract_fn(|request: &Request| {
            request
                .headers()
                .get("x-task")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        });

        let request = Request::builder()
            .uri("/ignored")
            .header("x-task", "reports:view")
            .body(Body::empty())
            .unwrap();

        assert_eq!(from_header.extract(&request).as_deref(), Some("reports:view"));
    }
}
