//! Unified path management for kawaraban data files.
//!
//! All persisted kawaraban data lives under the platform config
//! directory (e.g. `~/.config/kawaraban/` on Linux). This keeps path
//! resolution in one place across the repository and the desktop shell.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for kawaraban.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/kawaraban/         # Config directory
/// └── snapshot.json            # Last session snapshot (24h retention)
/// ```
pub struct KawarabanPaths;

impl KawarabanPaths {
    /// Returns the kawaraban configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("kawaraban"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the persisted session snapshot.
    pub fn snapshot_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("snapshot.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_file_lives_under_config_dir() {
        let config = KawarabanPaths::config_dir().unwrap();
        let snapshot = KawarabanPaths::snapshot_file().unwrap();
        assert!(snapshot.starts_with(&config));
        assert_eq!(snapshot.file_name().unwrap(), "snapshot.json");
    }
}
