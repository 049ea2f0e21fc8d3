//! Worker thread implementation.
//!
//! Search filtering and sprite color extraction run here so the render loop
//! never blocks on them. The worker holds no state of its own: each message
//! carries everything it needs and yields exactly one response.

use crate::app::list::{filter_entries, FilterJob};
use crate::imaging;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Name under which the worker is registered with Zellij.
pub const WORKER_NAME: &str = "pokedex";

#[derive(Serialize, Deserialize, Default)]
pub struct PokedexWorker;

impl PokedexWorker {
    fn handle_filter(job: FilterJob) -> WorkerResponse {
        let results = filter_entries(&job.entries, &job.query);
        tracing::debug!(
            generation = job.generation,
            candidates = job.entries.len(),
            matches = results.len(),
            "entries filtered"
        );
        WorkerResponse::EntriesFiltered {
            generation: job.generation,
            results,
        }
    }

    fn handle_extract_color(number: u32, image: &[u8]) -> WorkerResponse {
        match imaging::sprite_color(image) {
            Ok(color) => {
                tracing::debug!(number, color = ?color.map(|c| c.to_hex()), "sprite color extracted");
                WorkerResponse::ColorExtracted { number, color }
            }
            Err(e) => {
                tracing::debug!(number, error = %e, "sprite decode failed");
                WorkerResponse::Error {
                    message: format!("sprite #{number}: {e}"),
                }
            }
        }
    }

    /// Attaches the caller's trace context so worker spans join its trace.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes a worker message and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _guard = tracing::debug_span!("worker_handle_message", message_type = message.kind()).entered();

        match message {
            WorkerMessage::FilterEntries { job, .. } => Self::handle_filter(job),
            WorkerMessage::ExtractColor { number, image, .. } => Self::handle_extract_color(number, &image),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for PokedexWorker {
    /// Decodes the JSON payload, handles it, and posts the JSON response back
    /// under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}
