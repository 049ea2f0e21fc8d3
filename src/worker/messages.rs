//! Worker thread message types for cross-thread communication.
//!
//! Requests carry owned copies of everything the worker needs (entries to
//! filter, sprite bytes to decode) plus the caller's trace context. Responses
//! carry the results back; the main thread decides whether they are still
//! relevant.

use crate::app::list::FilterJob;
use crate::domain::{PokedexEntry, Rgb};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active (for example
    /// when tracing was never initialized).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        span_context.is_valid().then(|| Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    filter_entries(FilterEntries { job: FilterJob }),
    extract_color(ExtractColor { number: u32, image: Vec<u8> }),
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Filter a snapshot of list entries by a search query.
    FilterEntries {
        job: FilterJob,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Decode a sprite PNG and compute its dominant color.
    ExtractColor {
        /// Dex number the sprite belongs to.
        number: u32,
        /// Raw PNG bytes as delivered by the host.
        image: Vec<u8>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Short name used as the IPC message name and span field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FilterEntries { .. } => "filter_entries",
            Self::ExtractColor { .. } => "extract_color",
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FilterEntries { trace_context, .. } | Self::ExtractColor { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Filter results for the given search generation.
    EntriesFiltered {
        generation: u64,
        results: Vec<PokedexEntry>,
    },

    /// Dominant color of an entry's sprite; `None` for fully transparent sprites.
    ColorExtracted { number: u32, color: Option<Rgb> },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_survive_json_ipc() {
        let message = WorkerMessage::ExtractColor {
            number: 4,
            image: vec![137, 80, 78, 71],
            trace_context: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
        assert_eq!(serde_json::from_str::<WorkerMessage>(&json).unwrap(), message);
    }

    #[test]
    fn builders_work_without_tracing() {
        let message = WorkerMessage::extract_color(1, vec![]);
        assert_eq!(message.kind(), "extract_color");
        assert!(message.trace_context().is_none());
    }
}
