//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event, and
//! the plugin shim executes them in order through the Zellij host API. Nothing
//! in the application layer performs I/O itself.

use crate::catalog::CatalogRequest;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET through the host.
    ///
    /// The request's [`RequestKind`](crate::catalog::RequestKind) travels as
    /// the web request context and routes the response back.
    Fetch(CatalogRequest),

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
