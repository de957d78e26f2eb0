//! The tower layer that gates a request pipeline on an authorization
//! decision.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::Response;
use pin_project_lite::pin_project;
use tower::{Layer, Service};
use tracing::{debug, info, warn};

use super::extract::{RequestUri, RouteName, TaskExtractor};

/// Layer that asks an authorizer function whether the request's task is
/// permitted and short-circuits with an unauthorized status when it is not.
///
/// The authorizer is any `Fn(&str) -> bool + Clone` — typically a role set
/// curried into a shared [`Authorizer`](taskgate_core::Authorizer) via
/// [`into_fn`](taskgate_core::Authorizer::into_fn). The task identifier is
/// derived by a [`TaskExtractor`] strategy; [`request_uri`](Self::request_uri)
/// and [`route_name`](Self::route_name) cover the two stock strategies.
///
/// # Example
///
/// ```no_run
/// use axum::{http::StatusCode, routing::get, Router};
/// use taskgate::AuthorizationLayer;
///
/// let app: Router = Router::new()
///     .route("/admin", get(|| async { "top secret" }))
///     .layer(
///         AuthorizationLayer::route_name(|task: &str| task != "/admin")
///             .with_status_code(StatusCode::FORBIDDEN),
///     );
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizationLayer<F, X = RequestUri> {
    authorizer: F,
    extractor: X,
    unauthorized_status: StatusCode,
}

impl<F> AuthorizationLayer<F, RequestUri>
where
    F: Fn(&str) -> bool,
{
    /// Gate on the stringified request URI (path plus query).
    pub fn request_uri(authorizer: F) -> Self {
        Self::new(authorizer, RequestUri)
    }
}

impl<F> AuthorizationLayer<F, RouteName>
where
    F: Fn(&str) -> bool,
{
    /// Gate on the route template the axum router matched.
    pub fn route_name(authorizer: F) -> Self {
        Self::new(authorizer, RouteName)
    }
}

impl<F, X> AuthorizationLayer<F, X>
where
    F: Fn(&str) -> bool,
    X: TaskExtractor,
{
    /// Gate with a custom extraction strategy.
    pub fn new(authorizer: F, extractor: X) -> Self {
        Self {
            authorizer,
            extractor,
            unauthorized_status: StatusCode::UNAUTHORIZED,
        }
    }

    /// Replace the status code used for rejected requests (401 by default).
    pub fn with_status_code(mut self, status: StatusCode) -> Self {
        self.unauthorized_status = status;
        self
    }
}

impl<S, F, X> Layer<S> for AuthorizationLayer<F, X>
where
    F: Clone,
    X: Clone,
{
    type Service = AuthorizationService<S, F, X>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthorizationService {
            inner,
            authorizer: self.authorizer.clone(),
            extractor: self.extractor.clone(),
            unauthorized_status: self.unauthorized_status,
        }
    }
}

/// Service produced by [`AuthorizationLayer`].
///
/// Per request: extract a task identifier (degrading to the empty string
/// with a warning when extraction yields nothing), ask the authorizer, and
/// either respond immediately with the configured status and an empty body
/// or delegate to the inner service and return its response unchanged. The
/// middleware itself never errors; inner-service errors propagate untouched.
#[derive(Debug, Clone)]
pub struct AuthorizationService<S, F, X> {
    inner: S,
    authorizer: F,
    extractor: X,
    unauthorized_status: StatusCode,
}

impl<S, F, X> Service<Request> for AuthorizationService<S, F, X>
where
    S: Service<Request, Response = Response>,
    F: Fn(&str) -> bool,
    X: TaskExtractor,
{
    type Response = Response;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let task = match self.extractor.extract(&request) {
            Some(task) if !task.is_empty() => task,
            _ => {
                warn!("task identifier not available, continuing with empty value");
                String::new()
            }
        };

        if !(self.authorizer)(&task) {
            info!(
                task = %task,
                status = self.unauthorized_status.as_u16(),
                "not authorized, rejecting request"
            );

            let mut response = Response::new(Body::empty());
            *response.status_mut() = self.unauthorized_status;
            return ResponseFuture::Rejected {
                response: Some(response),
            };
        }

        info!(task = %task, "authorization successful");

        ResponseFuture::Inner {
            fut: self.inner.call(request),
        }
    }
}

pin_project! {
    /// Response future for [`AuthorizationService`].
    ///
    /// Rejections resolve immediately without ever constructing the inner
    /// future.
    #[project = ResponseFutureProj]
    pub enum ResponseFuture<F> {
        Inner { #[pin] fut: F },
        Rejected { response: Option<Response> },
    }
}

impl<F, E> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response, E>>,
{
    type Output = Result<Response, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            ResponseFutureProj::Inner { fut } => {
                let response = std::task::ready!(fut.poll(cx));
                debug!("inner handler completed");
                Poll::Ready(response)
            }
            ResponseFutureProj::Rejected { response } => {
                let response = response.take().expect("polled after completion");
                Poll::Ready(Ok(response))
            }
        }
    }
}
