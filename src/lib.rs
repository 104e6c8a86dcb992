//! hello-function: an HTTP-triggered function.
//!
//! Every request, whatever its method, path, headers or body, is answered
//! with `200 OK` and the body `Hello, World!`. Routing, scaling and TLS are
//! left to the hosting platform.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod platform;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
