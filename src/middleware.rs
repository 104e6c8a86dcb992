//! Request ID middleware for correlating logs with requests.
//!
//! Each request gets a UUID (reused from an inbound `x-request-id` header when
//! the platform front end supplied a valid one) and a tracing span that wraps
//! the entire request lifecycle. The ID is never echoed in the response.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderMap;
use tracing::Instrument;
use uuid::Uuid;

/// Inbound header carrying a caller-assigned request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension type for accessing request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Pick the request ID: a well-formed inbound UUID, or a fresh v4.
pub fn request_id_from_headers(headers: &HeaderMap) -> Uuid {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Middleware that assigns a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = request_id_from_headers(request.headers());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::debug!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogFormat, DEFAULT_LOG_FILTER};
    use crate::logging;
    use axum::body::Body;
    use http::HeaderValue;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Send one request with `filter` active and return what was logged.
    async fn logged_with_filter(filter: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = logging::subscriber(filter, LogFormat::Text, move || writer.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let response = crate::create_router()
            .oneshot(http::Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), http::StatusCode::OK);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_default_filter_is_silent_per_request() {
        let output = logged_with_filter(DEFAULT_LOG_FILTER).await;
        assert!(!output.contains("Request completed"), "{output}");
    }

    #[tokio::test]
    async fn test_debug_filter_logs_completion() {
        let output = logged_with_filter("hello_function=debug").await;
        assert!(output.contains("Request completed"), "{output}");
    }

    #[test]
    fn test_reuses_valid_inbound_id() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );
        assert_eq!(request_id_from_headers(&headers), id);
    }

    #[test]
    fn test_generates_id_for_malformed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        let id = request_id_from_headers(&headers);
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_generates_distinct_ids_without_header() {
        let headers = HeaderMap::new();
        assert_ne!(
            request_id_from_headers(&headers),
            request_id_from_headers(&headers)
        );
    }
}
