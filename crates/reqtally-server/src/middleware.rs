//! Request counting middleware.
//!
//! Layered over the application routes; increments the request counter for
//! the route label, then delegates. Transparent: the request body and the
//! handler's response pass through untouched.

use axum::extract::{Request, State};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

pub async fn track_requests(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let label = route_label(req.uri());
    state.requests().inc(&[("uri", label.as_str())]);
    next.run(req).await
}

/// Label value for a request URI. Query strings are stripped so the label
/// set stays bounded by the route table rather than by caller input.
fn route_label(uri: &Uri) -> String {
    uri.path().to_string()
}
