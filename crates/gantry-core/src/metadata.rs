//! Opaque per-project attributes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Build file name used when a project does not declare one.
pub const DEFAULT_BUILD_FILE: &str = "build.gradle";

/// Attributes of a project that are owned by whoever declared the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Directory holding the project's sources, if known.
    #[serde(default)]
    pub project_dir: Option<PathBuf>,
    /// Build file name, relative to `project_dir`.
    #[serde(default = "default_build_file")]
    pub build_file_name: String,
}

fn default_build_file() -> String {
    DEFAULT_BUILD_FILE.to_string()
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        ProjectMetadata {
            project_dir: None,
            build_file_name: default_build_file(),
        }
    }
}

impl ProjectMetadata {
    /// Metadata for a project rooted at `dir` with the default build file.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        ProjectMetadata {
            project_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Override the build file name.
    pub fn build_file_name(mut self, name: impl Into<String>) -> Self {
        self.build_file_name = name.into();
        self
    }

    /// Full path of the build file, when the project directory is known.
    pub fn build_file(&self) -> Option<PathBuf> {
        self.project_dir
            .as_deref()
            .map(|dir| dir.join(&self.build_file_name))
    }

    /// Whether this project lives in `dir`.
    pub fn is_in_dir(&self, dir: &Path) -> bool {
        self.project_dir.as_deref() == Some(dir)
    }
}
