//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog, imaging, and
//! worker layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Web Results / Worker Replies ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`detail`]: Detail screen controller
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`list`]: Pagination and search controller
//! - [`modes`]: Input modes and screen routing
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod detail;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use detail::DetailController;
pub use handler::{handle_event, Event};
pub use list::{ListController, SearchStep};
pub use modes::{DetailRoute, InputMode, Screen, SearchFocus};
pub use state::AppState;
