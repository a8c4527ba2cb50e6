//! Project descriptors.
//!
//! A descriptor is shared: the registry holds one `Arc` and whoever declared
//! the project keeps others. Only the registry can change a descriptor's
//! path, and a descriptor sits in at most one registry at a time, so the
//! index key and the stored path never drift apart.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gantry_core::{ProjectMetadata, ProjectPath};
use parking_lot::RwLock;

use crate::index::Indexed;

/// One project node in a multi-project build.
pub struct ProjectDescriptor {
    path: RwLock<ProjectPath>,
    metadata: RwLock<ProjectMetadata>,
    registered: AtomicBool,
}

impl ProjectDescriptor {
    /// Create a descriptor at `path`. It is not registered anywhere yet.
    pub fn new(path: ProjectPath, metadata: ProjectMetadata) -> Arc<Self> {
        Arc::new(ProjectDescriptor {
            path: RwLock::new(path),
            metadata: RwLock::new(metadata),
            registered: AtomicBool::new(false),
        })
    }

    /// Current path of the project.
    pub fn path(&self) -> ProjectPath {
        self.path.read().clone()
    }

    /// Project name: the last path segment, empty for the root project.
    pub fn name(&self) -> String {
        self.path.read().name().unwrap_or_default().to_string()
    }

    /// Snapshot of the caller-owned metadata.
    pub fn metadata(&self) -> ProjectMetadata {
        self.metadata.read().clone()
    }

    /// Whether some registry currently holds this descriptor.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Edit a copy of the metadata and store it back. The registry never
    /// observes these changes.
    ///
    /// No lock is held while `f` runs, so `f` may read this descriptor.
    pub fn update_metadata(&self, f: impl FnOnce(&mut ProjectMetadata)) {
        let mut metadata = self.metadata();
        f(&mut metadata);
        *self.metadata.write() = metadata;
    }

    pub(crate) fn set_path(&self, path: ProjectPath) {
        *self.path.write() = path;
    }
}

impl Indexed for ProjectDescriptor {
    fn index_path(&self) -> ProjectPath {
        self.path()
    }

    fn claim(&self) -> bool {
        self.registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn release(&self) {
        self.registered.store(false, Ordering::Release);
    }
}

impl fmt::Debug for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectDescriptor")
            .field("path", &*self.path.read())
            .field("metadata", &*self.metadata.read())
            .finish()
    }
}

impl fmt::Display for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project '{}'", self.path.read())
    }
}
