//! Project tree display.
//!
//! Formats the registered hierarchy as a human-readable ASCII tree:
//! ```text
//! :
//! ├── :app
//! │   └── :app:core
//! └── :lib
//!
//! 4 projects
//! ```
//!
//! Each project hangs under its nearest *registered* ancestor, so a project
//! whose parent was never declared appears one level higher.

use std::collections::BTreeMap;
use std::sync::Arc;

use gantry_core::ProjectPath;

use crate::descriptor::ProjectDescriptor;
use crate::registry::ProjectDescriptorRegistry;

/// Format every registered project as a tree rooted at `:`.
pub fn format_tree(registry: &ProjectDescriptorRegistry) -> String {
    let root = ProjectPath::root();
    let mut out = match registry.root_project() {
        Some(_) => format!("{root}\n"),
        None => format!("{root} (not registered)\n"),
    };

    // Group by display parent; the root path stands in for "no registered ancestor".
    let mut children: BTreeMap<ProjectPath, Vec<Arc<ProjectDescriptor>>> = BTreeMap::new();
    for descriptor in registry.get_all_projects() {
        let path = descriptor.path();
        if path.is_root() {
            continue;
        }
        let parent = registry
            .parent_of(&descriptor)
            .map(|p| p.path())
            .unwrap_or_else(ProjectPath::root);
        children.entry(parent).or_default().push(descriptor);
    }

    let top = children.get(&root).map(Vec::as_slice).unwrap_or_default();
    let count = top.len();
    for (i, descriptor) in top.iter().enumerate() {
        format_node(&mut out, &children, descriptor, "", i == count - 1);
    }

    let total = registry.len();
    let noun = if total == 1 { "project" } else { "projects" };
    out.push_str(&format!("\n{total} {noun}\n"));
    out
}

/// Recursively format a project entry.
fn format_node(
    out: &mut String,
    children: &BTreeMap<ProjectPath, Vec<Arc<ProjectDescriptor>>>,
    descriptor: &ProjectDescriptor,
    prefix: &str,
    is_last: bool,
) {
    let connector = if is_last { "└── " } else { "├── " };
    let path = descriptor.path();
    out.push_str(&format!("{prefix}{connector}{path}\n"));

    let child_prefix = if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };

    let below = children.get(&path).map(Vec::as_slice).unwrap_or_default();
    let child_count = below.len();
    for (i, child) in below.iter().enumerate() {
        format_node(out, children, child, &child_prefix, i == child_count - 1);
    }
}
