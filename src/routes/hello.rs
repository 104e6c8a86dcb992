//! The function handler.
//!
//! Answers every request with the fixed greeting. The request is not
//! extracted at all, so its body is never read.

use crate::config::GREETING;

/// Hello world handler.
pub async fn hello_world() -> &'static str {
    GREETING
}
