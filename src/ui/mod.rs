//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI output
//! ```
//!
//! - [`viewmodel`]: display-ready screen data
//! - [`renderer`]: frame assembly entry point
//! - [`components`]: per-element renderers and screen layouts
//! - [`helpers`]: cursor positioning, centering, match highlighting
//! - [`palette`]: type and stat colors
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod palette;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    DetailBody, DetailCard, DetailViewModel, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    ListViewModel, SearchBarInfo, StatBar, StatusLine, TypeBadge, UIViewModel,
};
