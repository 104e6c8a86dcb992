//! HTTP server module.
//!
//! The server includes graceful shutdown on SIGTERM/SIGINT with a
//! configurable drain window.

mod server;
mod shutdown;

pub use server::{serve_with_handle, start_server, ServerError};
