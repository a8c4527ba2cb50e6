//! Core value types for the Gantry build model.
//!
//! A multi-project build is described by a hierarchy of projects. Each
//! project is addressed by a [`ProjectPath`] such as `:app:core`, where the
//! bare separator `:` names the root project. Projects also carry
//! [`ProjectMetadata`] (directory, build file) that the registry stores but
//! never interprets.

pub mod error;
pub mod metadata;
pub mod path;

pub use error::PathError;
pub use metadata::{ProjectMetadata, DEFAULT_BUILD_FILE};
pub use path::{ProjectPath, SEPARATOR};
