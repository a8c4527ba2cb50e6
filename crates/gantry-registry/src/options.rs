//! Registry options, loaded from the `[registry]` table of a TOML file.
//!
//! ```toml
//! [registry]
//! rename-mode = "node-only"   # or "subtree" (default)
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a path change relocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenameMode {
    /// Move the project together with every registered descendant.
    #[default]
    Subtree,
    /// Move only the named project; descendants keep their old paths.
    NodeOnly,
}

/// Tunable registry behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryOptions {
    #[serde(default)]
    pub rename_mode: RenameMode,
}

#[derive(Deserialize)]
struct OptionsFile {
    #[serde(default)]
    registry: RegistryOptions,
}

impl RegistryOptions {
    pub fn with_rename_mode(mut self, mode: RenameMode) -> Self {
        self.rename_mode = mode;
        self
    }

    /// Parse options from TOML text. A missing `[registry]` table yields defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: OptionsFile = toml::from_str(s)?;
        Ok(file.registry)
    }

    /// Read and parse an options file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn defaults_to_subtree() {
        assert_eq!(RegistryOptions::default().rename_mode, RenameMode::Subtree);
        let opts = RegistryOptions::from_toml_str("").unwrap();
        assert_eq!(opts.rename_mode, RenameMode::Subtree);
    }

    #[test]
    fn parse_node_only() {
        let opts = RegistryOptions::from_toml_str("[registry]\nrename-mode = \"node-only\"\n").unwrap();
        assert_eq!(opts.rename_mode, RenameMode::NodeOnly);
    }

    #[test]
    fn ignores_unrelated_tables() {
        let toml = r#"
[project]
name = "demo"

[registry]
rename-mode = "subtree"
"#;
        let opts = RegistryOptions::from_toml_str(toml).unwrap();
        assert_eq!(opts.rename_mode, RenameMode::Subtree);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = RegistryOptions::from_toml_str("[registry]\nrename-mode = \"sideways\"\n")
            .unwrap_err();
        assert!(matches!(err, RegistryError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gantry.toml");
        std::fs::write(&path, "[registry]\nrename-mode = \"node-only\"\n").unwrap();

        let opts = RegistryOptions::load(&path).unwrap();
        assert_eq!(opts, RegistryOptions::default().with_rename_mode(RenameMode::NodeOnly));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegistryOptions::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }
}
