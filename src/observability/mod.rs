//! Tracing with file-based OTLP export.
//!
//! The plugin runs inside the Zellij wasm sandbox with no network collector to
//! talk to, so spans are serialized to OTLP/JSON and appended to a local file
//! for offline inspection.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider
//!     → FileSpanExporter → otlp::encode_batch → RotatingFile
//! ```
//!
//! Spans are exported synchronously through the SDK's simple processor; there
//! is no background runtime on the wasm host to drive a batching one.
//!
//! # Features
//!
//! - **File export**: one `resourceSpans` document per line in
//!   `~/.local/share/zellij/pokedex/pokedex-otlp.json` (sandbox path
//!   `/host/.local/share/zellij/pokedex/pokedex-otlp.json`)
//! - **Rotation**: at 8 MiB the file moves to `.1`, older backups shift up,
//!   and at most three are kept
//! - **Resource metadata**: every batch carries `service.name = "Pokedex"`
//! - **Cross-thread traces**: worker messages carry the caller's trace and
//!   span ids, so worker spans appear under the plugin span that sent them
//!
//! # Configuration
//!
//! The filter is an `EnvFilter` directive taken from the `trace_level` plugin
//! configuration key (for example `debug` or `pokedex::app=trace`), defaulting
//! to `info`. An invalid directive also falls back to `info`. `RUST_LOG` is not
//! consulted: the sandbox does not forward the host environment to plugins.
//!
//! Initialization is best-effort. If the data directory cannot be created,
//! export is disabled and the plugin runs without a subscriber.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pokedex::observability::init_tracing;
//! use pokedex::Config;
//!
//! let config = Config {
//!     trace_level: Some("debug".to_string()),
//!     ..Config::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("tracing is now active");
//! ```
//!
//! # Modules
//!
//! - `exporter`: the `SpanExporter` implementation and provider builder
//! - `otlp`: OTLP/JSON encoding of span batches
//! - `rotation`: size-bounded line sink with numbered backups

mod exporter;
mod otlp;
mod rotation;

pub use exporter::file_tracer_provider;
pub use rotation::RotatingFile;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported batch.
pub const SERVICE_NAME: &str = "Pokedex";

/// File name of the trace log inside the data directory.
pub const TRACE_FILE: &str = "pokedex-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Later calls are no-ops, so both the plugin and its worker may call this.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let provider = file_tracer_provider(
        dir.join(TRACE_FILE),
        Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]),
    );
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
