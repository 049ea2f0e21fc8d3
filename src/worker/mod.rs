//! Background worker thread for search filtering and sprite color extraction.
//!
//! Uses Zellij's worker API for cross-thread communication and propagates
//! trace context so worker spans join the plugin's trace.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{PokedexWorker, WORKER_NAME};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
