//! Registry error types.

use gantry_core::{PathError, ProjectPath};

/// Errors that can occur during registry operations.
///
/// A lookup miss is not an error: `find`-style operations return `Option`.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No descriptor is registered at the path.
    #[error("no project registered at path '{path}'")]
    NotFound { path: ProjectPath },

    /// A different descriptor is already registered at the path.
    #[error("multiple projects in this build have path '{path}'")]
    DuplicatePath { path: ProjectPath },

    /// The descriptor is already held by another registry.
    #[error("project '{path}' is already registered in another registry")]
    AlreadyRegistered { path: ProjectPath },

    /// The root project has no name to change.
    #[error("the root project cannot be renamed")]
    CannotRenameRoot,

    /// A path or project name could not be formed.
    #[error("invalid project path: {0}")]
    InvalidPath(#[from] PathError),

    /// TOML parsing error in registry options.
    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
