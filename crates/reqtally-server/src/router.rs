//! Axum router wiring for the primary surface.
//!
//! Both application routes sit under the counting middleware; unmatched
//! paths (404) bypass the route layer and are not counted.

use axum::middleware::from_fn_with_state;
use axum::routing::any;
use axum::Router;

use crate::{app_state::AppState, handlers, middleware};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", any(handlers::hello))
        .route("/echo", any(handlers::echo))
        .route_layer(from_fn_with_state(state.clone(), middleware::track_requests))
        .with_state(state)
}
