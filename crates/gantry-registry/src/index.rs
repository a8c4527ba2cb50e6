//! Flat path-keyed index.
//!
//! Stores one shared item per [`ProjectPath`]. The index knows nothing about
//! the project hierarchy beyond path structure; tree queries live in
//! [`crate::registry`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use gantry_core::ProjectPath;

use crate::error::{RegistryError, Result};

/// Anything that can be stored in a [`PathIndex`].
pub trait Indexed {
    /// The path the item currently claims.
    fn index_path(&self) -> ProjectPath;

    /// Mark the item as held by an index. Returns `false` if some index
    /// already holds it.
    fn claim(&self) -> bool {
        true
    }

    /// Clear the mark set by [`Indexed::claim`].
    fn release(&self) {}
}

/// Exact-match storage of shared items keyed by path.
///
/// Iteration follows path order, which keeps every subtree contiguous.
#[derive(Debug)]
pub struct PathIndex<T> {
    entries: BTreeMap<ProjectPath, Arc<T>>,
}

impl<T> Default for PathIndex<T> {
    fn default() -> Self {
        PathIndex {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Indexed> PathIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `item` under its own path.
    ///
    /// Re-adding the same item at the same path is a no-op. A different item
    /// at an occupied path fails with [`RegistryError::DuplicatePath`]; an
    /// item already held by another index fails with
    /// [`RegistryError::AlreadyRegistered`]. Either way the index is untouched.
    pub fn add(&mut self, item: Arc<T>) -> Result<()> {
        match self.entries.entry(item.index_path()) {
            Entry::Occupied(existing) => {
                if Arc::ptr_eq(existing.get(), &item) {
                    Ok(())
                } else {
                    Err(RegistryError::DuplicatePath {
                        path: existing.key().clone(),
                    })
                }
            }
            Entry::Vacant(slot) => {
                if !item.claim() {
                    return Err(RegistryError::AlreadyRegistered {
                        path: slot.into_key(),
                    });
                }
                slot.insert(item);
                Ok(())
            }
        }
    }

    /// Remove and return the item at `path`, releasing it for other indexes.
    pub fn remove(&mut self, path: &ProjectPath) -> Result<Arc<T>> {
        let item = self
            .entries
            .remove(path)
            .ok_or_else(|| RegistryError::NotFound { path: path.clone() })?;
        item.release();
        Ok(item)
    }

    /// Look up the item at `path`. A miss is a normal result.
    pub fn find(&self, path: &ProjectPath) -> Option<&Arc<T>> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &ProjectPath) -> bool {
        self.entries.contains_key(path)
    }

    /// All items, in path order.
    ///
    /// The iterator borrows the index, so it always reflects the state at the
    /// time of the call. Call again to restart.
    pub fn all(&self) -> impl Iterator<Item = &Arc<T>> + '_ {
        self.entries.values()
    }

    /// Items whose path equals `prefix` or lies below it, in path order.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a ProjectPath,
    ) -> impl Iterator<Item = (&'a ProjectPath, &'a Arc<T>)> + 'a {
        self.entries
            .range::<ProjectPath, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(path, _)| path.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the entry at `path` without reporting a miss. The item stays
    /// claimed; it is expected back through [`PathIndex::attach`].
    pub(crate) fn detach(&mut self, path: &ProjectPath) -> Option<Arc<T>> {
        self.entries.remove(path)
    }

    /// Insert `item` under its path. The caller has already ruled out a
    /// collision.
    pub(crate) fn attach(&mut self, item: Arc<T>) {
        let previous = self.entries.insert(item.index_path(), item);
        debug_assert!(previous.is_none(), "attach over an occupied path");
    }
}
