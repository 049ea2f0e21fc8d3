//! Path handling for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Host mount point inside the sandbox.
const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace output.
///
/// `/host` maps to the directory Zellij was started from, which is usually the
/// home directory, so this normally resolves to `~/.local/share/zellij/pokedex`.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("pokedex")
}

/// Rewrites a leading `~` to the sandbox host mount.
///
/// `~user/...` forms are left alone.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}
