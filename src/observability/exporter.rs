//! Span exporter that appends OTLP/JSON batches to a rotating file.

use super::otlp;
use super::rotation::{RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;

#[derive(Debug)]
struct FileSpanExporter {
    sink: RotatingFile,
    resource: Resource,
    closed: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.closed {
            Err(TraceError::from("trace exporter already shut down"))
        } else {
            let line = otlp::encode_batch(&self.resource, &batch).to_string();
            self.sink
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.closed = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every finished span synchronously to `path`.
///
/// The simple (non-batching) processor is used because the plugin runs on a
/// single-threaded wasm host with no background runtime.
#[must_use]
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        sink: RotatingFile::new(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS),
        resource: resource.clone(),
        closed: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
