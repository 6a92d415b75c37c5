//! Structured locations inside a document.
//!
//! A [`Path`] is built step by step while the differ walks both trees and is
//! only turned into text at the report boundary:
//!
//! ```
//! use apidiff::path::Path;
//!
//! let path = Path::root().key("x-flows").index(0).key("steps").index(2);
//! assert_eq!(path.to_string(), "x-flows[0].steps[2]");
//! assert_eq!(path.groups(), vec!["x-flows[0]", "steps[2]"]);
//! ```

use std::fmt;

/// One step in a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Mapping field, rendered as `.name` (bare at the start of a path)
    Key(String),
    /// Sequence position, rendered as `[i]`
    Index(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended by a mapping key.
    pub fn key(&self, name: impl Into<String>) -> Self {
        self.child(PathSegment::Key(name.into()))
    }

    /// Returns a new path extended by a sequence index.
    pub fn index(&self, i: usize) -> Self {
        self.child(PathSegment::Index(i))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Splits the rendered path on `.`.
    ///
    /// Indices stay attached to the key before them, so `a[0].b.c[1][2]`
    /// yields `["a[0]", "b", "c[1][2]"]`. A key that contains a dot is split
    /// as well: `paths./v1.2/users` yields `["paths", "/v1", "2/users"]`.
    pub fn groups(&self) -> Vec<String> {
        self.to_string().split('.').map(String::from).collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Key(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
