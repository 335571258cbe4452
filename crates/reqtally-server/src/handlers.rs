//! Application handlers on the primary HTTP surface.

use axum::body::Body;

/// Fixed short reply.
pub async fn hello() -> &'static str {
    "hello"
}

/// Echo the request body back verbatim. The body is handed through as a
/// stream, so large payloads are never buffered in memory.
pub async fn echo(body: Body) -> Body {
    body
}
