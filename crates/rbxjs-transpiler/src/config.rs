//! Compiler options.
//!
//! Loaded from `rbxjs.toml` at the project root. Missing keys keep their
//! defaults; a missing file means all defaults.
//!
//! Example rbxjs.toml:
//! ```toml
//! [compiler]
//! no_heuristics = false
//! no_header = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE: &str = "rbxjs.toml";

/// Options consulted during translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Skip the entry-point/module export checks.
    pub no_heuristics: bool,
    /// Comment out the runtime library import (for compiling the runtime itself).
    pub no_header: bool,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compiler: CompilerOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load configuration from a file path.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.compiler.no_heuristics);
        assert!(!config.compiler.no_header);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILE)).unwrap();
        writeln!(
            file,
            r#"
[compiler]
no_heuristics = true
"#
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert!(config.compiler.no_heuristics);
        assert!(!config.compiler.no_header); // default
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml_str("[compiler]\nno_header = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
