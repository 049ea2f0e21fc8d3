//! Sandbox filesystem helpers.
//!
//! Zellij mounts the host filesystem under `/host`; these helpers translate
//! user-facing paths into sandbox paths.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
