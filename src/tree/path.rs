use std::fmt;

use smallvec::SmallVec;

use crate::classify::table::KEYFRAMES_KEY;

/// One step from a parent node to a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment<'a> {
    /// Object member.
    Key(&'a str),
    /// Array element.
    Index(usize),
}

/// Chain of ancestor keys and indices from the root to the current node.
///
/// Keys are borrowed from the tree being walked, so extending the path never allocates until
/// the inline capacity is exceeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyPath<'a> {
    segments: SmallVec<[PathSegment<'a>; 16]>,
}

impl<'a> PropertyPath<'a> {
    /// The empty path addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Append an object key.
    pub fn push_key(&mut self, key: &'a str) {
        self.segments.push(PathSegment::Key(key));
    }

    /// Append an array index.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Remove the last segment.
    pub fn pop(&mut self) -> Option<PathSegment<'a>> {
        self.segments.pop()
    }

    /// Builder form of [`Self::push_key`].
    pub fn with_key(mut self, key: &'a str) -> Self {
        self.push_key(key);
        self
    }

    /// Builder form of [`Self::push_index`].
    pub fn with_index(mut self, index: usize) -> Self {
        self.push_index(index);
        self
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True at the document root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nearest key segment, skipping array indices.
    pub fn last_key(&self) -> Option<&'a str> {
        self.keys().next_back()
    }

    /// Name of the animated property governing a bare `value` at this path.
    ///
    /// This is the nearest ancestor key other than the literal `keyframes`, so a keyframe entry
    /// at `parameters.translation0.keyframes[3]` and a wrapper object at
    /// `parameters.translation0` both resolve to `translation0`.
    pub fn animated_property(&self) -> Option<&'a str> {
        self.keys().rev().find(|k| *k != KEYFRAMES_KEY)
    }

    /// True when any ancestor key equals `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    fn keys(&self) -> impl DoubleEndedIterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|s| match *s {
            PathSegment::Key(k) => Some(k),
            PathSegment::Index(_) => None,
        })
    }
}

impl fmt::Display for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for s in &self.segments {
            match *s {
                PathSegment::Key(k) => write!(f, ".{k}")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/path.rs"]
mod tests;
