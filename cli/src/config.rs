//! Location of the data directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the application directory inside the platform config directory.
pub const APP_DIR: &str = "skill-plotter";

/// Expand ~ to home directory in a path.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Directory holding the group files.
///
/// An explicit path wins; otherwise the platform config directory is used,
/// e.g. `~/.config/skill-plotter` on Linux.
///
/// # Errors
///
/// Returns an error if no explicit path is given and the platform has no
/// config directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("could not determine the configuration directory, pass --data-dir")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/plots"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/plots"));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/skills")), home.join("skills"));
        }
    }
}
