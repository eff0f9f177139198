//! Script classification.
//!
//! Roblox runs `Script`/`LocalScript` files directly and loads
//! `ModuleScript` files through `require`. The source file name decides
//! which one a unit becomes.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    /// Executed directly (`*.server.ts`, `*.client.ts`). May not export.
    EntryPoint,
    /// Loaded with `require`. Must export something.
    Module,
}

const ENTRY_POINT_SUFFIXES: &[&str] = &[".server", ".client"];

impl ScriptType {
    pub fn from_file_name(name: &str) -> Self {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        if ENTRY_POINT_SUFFIXES
            .iter()
            .any(|suffix| stem.ends_with(suffix))
        {
            ScriptType::EntryPoint
        } else {
            ScriptType::Module
        }
    }

    pub fn is_entry_point(self) -> bool {
        self == ScriptType::EntryPoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        assert_eq!(ScriptType::from_file_name("main.server.ts"), ScriptType::EntryPoint);
        assert_eq!(
            ScriptType::from_file_name("src/client/input.client.tsx"),
            ScriptType::EntryPoint
        );
    }

    #[test]
    fn test_modules() {
        assert_eq!(ScriptType::from_file_name("util.ts"), ScriptType::Module);
        assert_eq!(ScriptType::from_file_name("server/init.ts"), ScriptType::Module);
        assert_eq!(ScriptType::from_file_name("observer.ts"), ScriptType::Module);
    }
}
