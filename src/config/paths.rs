//! Path resolution for todoparse configuration files.
//!
//! All todoparse data is stored in `~/.todoparse/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TodoError;

/// Paths to todoparse configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.todoparse/`
    pub root: PathBuf,
    /// Config file: `~/.todoparse/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TodoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TodoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".todoparse")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-todoparse");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}
