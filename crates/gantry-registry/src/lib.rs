//! Project descriptor registry for multi-project builds.
//!
//! Descriptors are indexed by their [`ProjectPath`] in a flat [`PathIndex`];
//! [`ProjectDescriptorRegistry`] layers the project hierarchy on top of it.
//! The hierarchy is never stored: parent, child and subtree queries are
//! derived from path structure on each call.
//!
//! # Architecture
//!
//! - **Index**: exact-match storage keyed by path, generic over any
//!   [`Indexed`] item so it can be tested on its own.
//! - **Registry**: hierarchy queries and [`change_descriptor_path`], which
//!   relocates a project (and by default its whole subtree) as a single
//!   all-or-nothing step.
//!
//! [`change_descriptor_path`]: ProjectDescriptorRegistry::change_descriptor_path

pub mod descriptor;
pub mod error;
pub mod index;
pub mod options;
pub mod registry;
pub mod tree;

// Re-exports for convenience.
pub use descriptor::ProjectDescriptor;
pub use error::{RegistryError, Result};
pub use gantry_core::{ProjectMetadata, ProjectPath};
pub use index::{Indexed, PathIndex};
pub use options::{RegistryOptions, RenameMode};
pub use registry::ProjectDescriptorRegistry;
pub use tree::format_tree;
