//! HTTP routing.
//!
//! The function is the only thing served: it is registered for every method
//! on `/` and as the fallback for every other path. No cache or identity
//! headers are added; the platform owns those concerns.
//!
//! Request tracing is enabled via middleware that assigns a request ID
//! to each incoming request, allowing correlation of all logs within a request.

pub mod hello;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router for the function.
pub fn create_router() -> Router {
    Router::new()
        .route("/", any(hello::hello_world))
        .fallback(hello::hello_world)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
