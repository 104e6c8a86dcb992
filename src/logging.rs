//! Tracing subscriber setup.
//!
//! The filter comes from the CLI, then `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].
//! Output is either human-readable text or one JSON object per line.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter with priority: CLI > env > default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Build the subscriber for `format`, writing through `writer`.
pub fn subscriber<W>(
    filter: &str,
    format: LogFormat,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer.clone())
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(writer)))
}
