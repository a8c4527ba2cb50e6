//! Path parsing errors.

/// Errors produced while parsing a [`crate::ProjectPath`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path does not start with the `:` separator.
    #[error("project path '{path}' is not absolute (must start with ':')")]
    NotAbsolute { path: String },

    /// The path contains an empty segment (`::` or a trailing `:`).
    #[error("project path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    /// A segment passed to [`crate::ProjectPath::child`] contains the separator.
    #[error("project name '{name}' must not contain ':'")]
    InvalidName { name: String },
}
