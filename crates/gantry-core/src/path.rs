//! Hierarchical project paths.
//!
//! A path is an ordered list of segment names rendered with a `:` separator.
//! The empty list is the root project and renders as `:`.
//!
//! ```text
//! :                 root
//! :app              child of root
//! :app:core         child of :app
//! ```
//!
//! Ordering is segment-wise lexicographic, so a path sorts immediately before
//! all of its descendants and every subtree forms a contiguous run in a
//! sorted collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Separator between path segments.
pub const SEPARATOR: char = ':';

/// An absolute, immutable project path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectPath {
    segments: Vec<String>,
}

impl ProjectPath {
    /// The root path `:`.
    pub fn root() -> Self {
        ProjectPath::default()
    }

    /// Parse a canonical path string such as `:a:b`.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let rest = s
            .strip_prefix(SEPARATOR)
            .ok_or_else(|| PathError::NotAbsolute { path: s.to_string() })?;
        if rest.is_empty() {
            return Ok(ProjectPath::root());
        }

        let mut segments = Vec::new();
        for segment in rest.split(SEPARATOR) {
            if segment.is_empty() {
                return Err(PathError::EmptySegment { path: s.to_string() });
            }
            segments.push(segment.to_string());
        }
        Ok(ProjectPath { segments })
    }

    /// Build a path from already-split segment names.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = ProjectPath::root();
        for segment in segments {
            path = path.child(segment)?;
        }
        Ok(path)
    }

    /// The path of a direct child named `name`.
    pub fn child(&self, name: impl Into<String>) -> Result<Self, PathError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PathError::EmptySegment {
                path: format!("{self}{SEPARATOR}"),
            });
        }
        if name.contains(SEPARATOR) {
            return Err(PathError::InvalidName { name });
        }
        let mut segments = self.segments.clone();
        segments.push(name);
        Ok(ProjectPath { segments })
    }

    /// The parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(ProjectPath {
            segments: init.to_vec(),
        })
    }

    /// The last segment, or `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if `prefix` equals this path or is one of its ancestors.
    pub fn starts_with(&self, prefix: &ProjectPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// True if this path is a proper ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &ProjectPath) -> bool {
        other.segment_count() > self.segment_count() && other.starts_with(self)
    }

    /// True if `other` is exactly one segment below this path.
    pub fn is_parent_of(&self, other: &ProjectPath) -> bool {
        other.segment_count() == self.segment_count() + 1 && other.starts_with(self)
    }

    /// Segments that follow `prefix`, if `prefix` is a prefix of this path.
    pub fn strip_prefix(&self, prefix: &ProjectPath) -> Option<&[String]> {
        self.segments.strip_prefix(prefix.segments.as_slice())
    }

    /// Replace the `old_prefix` part of this path with `new_prefix`.
    ///
    /// Returns `None` when `old_prefix` is not a prefix of this path.
    pub fn rebase(&self, old_prefix: &ProjectPath, new_prefix: &ProjectPath) -> Option<Self> {
        let suffix = self.strip_prefix(old_prefix)?;
        let mut segments = new_prefix.segments.clone();
        segments.extend(suffix.iter().cloned());
        Some(ProjectPath { segments })
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "{SEPARATOR}");
        }
        for segment in &self.segments {
            write!(f, "{SEPARATOR}{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for ProjectPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectPath::parse(s)
    }
}

impl TryFrom<String> for ProjectPath {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ProjectPath::parse(&s)
    }
}

impl From<ProjectPath> for String {
    fn from(path: ProjectPath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> ProjectPath {
        ProjectPath::parse(s).unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(p(":").to_string(), ":");
        assert_eq!(p(":app").to_string(), ":app");
        assert_eq!(p(":app:core:api").to_string(), ":app:core:api");
        assert_eq!(p(":app:core").segments(), ["app", "core"]);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(
            ProjectPath::parse("app"),
            Err(PathError::NotAbsolute {
                path: "app".to_string()
            })
        );
        assert!(ProjectPath::parse("").is_err());
        assert!(matches!(
            ProjectPath::parse(":a::b"),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(matches!(
            ProjectPath::parse(":a:"),
            Err(PathError::EmptySegment { .. })
        ));
    }

    #[test]
    fn root_properties() {
        let root = ProjectPath::root();
        assert!(root.is_root());
        assert_eq!(root.segment_count(), 0);
        assert!(root.parent().is_none());
        assert!(root.name().is_none());
    }

    #[test]
    fn parent_and_child() {
        let core = p(":app:core");
        assert_eq!(core.parent(), Some(p(":app")));
        assert_eq!(p(":app").parent(), Some(ProjectPath::root()));
        assert_eq!(core.name(), Some("core"));
        assert_eq!(p(":app").child("core").unwrap(), core);
        assert_eq!(ProjectPath::root().child("lib").unwrap(), p(":lib"));
    }

    #[test]
    fn child_rejects_bad_names() {
        assert!(matches!(
            ProjectPath::root().child("a:b"),
            Err(PathError::InvalidName { .. })
        ));
        assert!(matches!(
            p(":a").child(""),
            Err(PathError::EmptySegment { .. })
        ));
    }

    #[test]
    fn from_segments_builds_path() {
        assert_eq!(ProjectPath::from_segments(["a", "b"]).unwrap(), p(":a:b"));
        assert!(ProjectPath::from_segments(Vec::<String>::new())
            .unwrap()
            .is_root());
    }

    #[test]
    fn ancestry() {
        let root = ProjectPath::root();
        let a = p(":a");
        let ab = p(":a:b");
        let abc = p(":a:b:c");

        assert!(root.is_ancestor_of(&a));
        assert!(a.is_ancestor_of(&abc));
        assert!(!a.is_ancestor_of(&a));
        assert!(!ab.is_ancestor_of(&a));
        assert!(a.is_parent_of(&ab));
        assert!(!a.is_parent_of(&abc));
        assert!(root.is_parent_of(&a));
        assert!(abc.starts_with(&abc));
    }

    #[test]
    fn segment_prefix_is_not_string_prefix() {
        // ":ab" shares a string prefix with ":a" but is not under it.
        assert!(!p(":a").is_ancestor_of(&p(":ab")));
        assert!(!p(":ab").starts_with(&p(":a")));
    }

    #[test]
    fn rebase_replaces_prefix() {
        let abc = p(":a:b:c");
        assert_eq!(abc.rebase(&p(":a"), &p(":x")), Some(p(":x:b:c")));
        assert_eq!(abc.rebase(&p(":a:b:c"), &p(":z")), Some(p(":z")));
        assert_eq!(abc.rebase(&ProjectPath::root(), &p(":r")), Some(p(":r:a:b:c")));
        assert_eq!(abc.rebase(&p(":a"), &ProjectPath::root()), Some(p(":b:c")));
        assert_eq!(abc.rebase(&p(":q"), &p(":x")), None);
    }

    #[test]
    fn subtree_sorts_contiguously() {
        let mut paths = vec![p(":b"), p(":a:c"), p(":a"), p(":a:b:z"), p(":a:b"), p(":")];
        paths.sort();
        let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, [":", ":a", ":a:b", ":a:b:z", ":a:c", ":b"]);
    }

    #[test]
    fn serde_uses_canonical_string() {
        let json = serde_json::to_string(&p(":app:core")).unwrap();
        assert_eq!(json, "\":app:core\"");
        let back: ProjectPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p(":app:core"));
        assert!(serde_json::from_str::<ProjectPath>("\"app\"").is_err());
    }
}
