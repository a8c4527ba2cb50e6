//! Hierarchy-aware project registry.
//!
//! The registry owns a [`PathIndex`] of descriptors and derives the project
//! tree from path structure. Ancestors of a registered project need not be
//! registered themselves: during discovery a module may be declared before
//! its parent.
//!
//! All mutating operations leave the registry unchanged when they fail.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use gantry_core::ProjectPath;
use tracing::{debug, trace, warn};

use crate::descriptor::ProjectDescriptor;
use crate::error::{RegistryError, Result};
use crate::index::PathIndex;
use crate::options::{RegistryOptions, RenameMode};

/// Registry of the projects declared in one build.
#[derive(Debug, Default)]
pub struct ProjectDescriptorRegistry {
    index: PathIndex<ProjectDescriptor>,
    options: RegistryOptions,
}

/// One planned relocation inside a path change.
struct Move {
    descriptor: Arc<ProjectDescriptor>,
    from: ProjectPath,
    to: ProjectPath,
}

impl ProjectDescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        ProjectDescriptorRegistry {
            index: PathIndex::new(),
            options,
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Read-only view of the underlying flat index.
    pub fn index(&self) -> &PathIndex<ProjectDescriptor> {
        &self.index
    }

    /// Register a descriptor under its current path.
    pub fn add_project(&mut self, descriptor: Arc<ProjectDescriptor>) -> Result<()> {
        let path = descriptor.path();
        self.index.add(descriptor)?;
        debug!(%path, "registered project");
        Ok(())
    }

    /// Unregister the descriptor at `path`, freeing it to join another
    /// registry. Descendants stay registered.
    pub fn remove_project(&mut self, path: &ProjectPath) -> Result<Arc<ProjectDescriptor>> {
        let removed = self.index.remove(path)?;
        debug!(%path, "removed project");
        Ok(removed)
    }

    pub fn find_by_path(&self, path: &ProjectPath) -> Option<Arc<ProjectDescriptor>> {
        self.index.find(path).cloned()
    }

    /// The project registered at `:`, if any.
    pub fn root_project(&self) -> Option<Arc<ProjectDescriptor>> {
        self.find_by_path(&ProjectPath::root())
    }

    /// Find the project whose directory is `dir`.
    pub fn find_by_dir(&self, dir: &Path) -> Option<Arc<ProjectDescriptor>> {
        self.index
            .all()
            .find(|d| d.metadata().is_in_dir(dir))
            .cloned()
    }

    /// Every registered project, in path order.
    pub fn get_all_projects(&self) -> Vec<Arc<ProjectDescriptor>> {
        self.index.all().cloned().collect()
    }

    /// `path` (if registered) and every registered project below it.
    pub fn get_all_projects_under(&self, path: &ProjectPath) -> Vec<Arc<ProjectDescriptor>> {
        self.index.with_prefix(path).map(|(_, d)| Arc::clone(d)).collect()
    }

    /// Every registered project strictly below `path`.
    pub fn get_sub_projects(&self, path: &ProjectPath) -> Vec<Arc<ProjectDescriptor>> {
        self.index
            .with_prefix(path)
            .filter(|(p, _)| *p != path)
            .map(|(_, d)| Arc::clone(d))
            .collect()
    }

    /// Registered projects exactly one level below `path`.
    pub fn get_children(&self, path: &ProjectPath) -> Vec<Arc<ProjectDescriptor>> {
        self.index
            .with_prefix(path)
            .filter(|(p, _)| path.is_parent_of(p))
            .map(|(_, d)| Arc::clone(d))
            .collect()
    }

    pub fn find_all(
        &self,
        mut predicate: impl FnMut(&ProjectDescriptor) -> bool,
    ) -> Vec<Arc<ProjectDescriptor>> {
        self.index
            .all()
            .filter(|d| predicate(d))
            .cloned()
            .collect()
    }

    /// Nearest registered proper ancestor of `descriptor`.
    pub fn parent_of(&self, descriptor: &ProjectDescriptor) -> Option<Arc<ProjectDescriptor>> {
        let mut current = descriptor.path().parent();
        while let Some(path) = current {
            if let Some(found) = self.find_by_path(&path) {
                return Some(found);
            }
            current = path.parent();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Relocate the project at `old_path` to `new_path`.
    ///
    /// Under [`RenameMode::Subtree`] every registered descendant moves too,
    /// keeping its path relative to the renamed project. All target paths are
    /// checked before anything is touched: if any of them is held by a
    /// project that is not itself moving, the call fails with
    /// [`RegistryError::DuplicatePath`] and the registry is unchanged.
    ///
    /// The move is applied in two passes, removing every moved project and
    /// then inserting each under its new path, both in path order
    /// (shallowest first). Overlapping old and new subtrees such as
    /// `:a` -> `:a:b` therefore never collide.
    pub fn change_descriptor_path(
        &mut self,
        old_path: &ProjectPath,
        new_path: &ProjectPath,
    ) -> Result<()> {
        if !self.index.contains(old_path) {
            warn!(%old_path, %new_path, "path change rejected: source not registered");
            return Err(RegistryError::NotFound {
                path: old_path.clone(),
            });
        }
        if old_path == new_path {
            return Ok(());
        }

        let moves = self.plan_moves(old_path, new_path);
        if let Some(collision) = self.first_collision(&moves) {
            warn!(%old_path, %new_path, %collision, "path change rejected: target occupied");
            return Err(RegistryError::DuplicatePath { path: collision });
        }

        for m in &moves {
            self.index.detach(&m.from);
        }
        for m in moves {
            trace!(from = %m.from, to = %m.to, "relocating project");
            m.descriptor.set_path(m.to);
            self.index.attach(m.descriptor);
        }

        debug!(%old_path, %new_path, "changed project path");
        Ok(())
    }

    /// Give the project at `path` a new last segment, keeping its parent.
    ///
    /// Returns the project's new path.
    pub fn rename_project(&mut self, path: &ProjectPath, new_name: &str) -> Result<ProjectPath> {
        let parent = path.parent().ok_or(RegistryError::CannotRenameRoot)?;
        let new_path = parent.child(new_name)?;
        self.change_descriptor_path(path, &new_path)?;
        Ok(new_path)
    }

    fn plan_moves(&self, old_path: &ProjectPath, new_path: &ProjectPath) -> Vec<Move> {
        let planned = |(from, descriptor): (&ProjectPath, &Arc<ProjectDescriptor>)| {
            from.rebase(old_path, new_path).map(|to| Move {
                descriptor: Arc::clone(descriptor),
                from: from.clone(),
                to,
            })
        };
        match self.options.rename_mode {
            RenameMode::Subtree => self.index.with_prefix(old_path).filter_map(planned).collect(),
            RenameMode::NodeOnly => self
                .index
                .find(old_path)
                .and_then(|d| planned((old_path, d)))
                .into_iter()
                .collect(),
        }
    }

    /// First target path held by a project outside the move set.
    fn first_collision(&self, moves: &[Move]) -> Option<ProjectPath> {
        let sources: BTreeSet<&ProjectPath> = moves.iter().map(|m| &m.from).collect();
        moves
            .iter()
            .map(|m| &m.to)
            .find(|to| self.index.contains(to) && !sources.contains(to))
            .cloned()
    }
}
