#![forbid(unsafe_code)]

//! Hierarchical paths.
//!
//! A [`Path`] is an immutable sequence of non-empty string segments. The
//! zero-length path is the root of every tree. Segments never contain
//! [`DELIMITER`]; constructors reject such segments (and empty ones) with
//! [`SunburstError::InvalidSegment`] rather than silently dropping them.
//!
//! Sub-paths are always paths: [`Path::segment`] and [`Path::slice`] never
//! hand out bare strings.
//!
//! ```
//! use ftui_sunburst::path::Path;
//!
//! let path: Path = "usr/local/bin".parse().unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.parent().to_string(), "usr/local");
//! assert!(path.starts_with(&"usr".parse().unwrap()));
//! assert_eq!(path.ancestors().count(), 4);
//! ```

use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SunburstError};

/// Reserved segment delimiter used for display and parsing.
pub const DELIMITER: char = '/';

/// Position in a hierarchy.
///
/// Equality, hashing and ordering all go through the segment sequence, so
/// the derived `Ord` is the lexicographic order used by `key` ordering
/// (a parent sorts before its children).
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Path {
    segments: Vec<String>,
}

fn check_segment(segment: &str) -> Result<()> {
    if segment.is_empty() || segment.contains(DELIMITER) {
        return Err(SunburstError::InvalidSegment {
            segment: segment.to_string(),
        });
    }
    Ok(())
}

impl Path {
    /// The zero-length path.
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(|s| {
                let s = s.into();
                check_segment(&s).map(|()| s)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }

    /// Split `text` on `delim`. The empty string is the root.
    ///
    /// Leading, trailing or doubled delimiters produce empty segments and
    /// are rejected.
    pub fn parse(text: &str, delim: char) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::root());
        }
        Self::new(text.split(delim))
    }

    /// One segment per character, e.g. `"1121"` becomes `1/1/2/1`.
    pub fn from_chars(text: &str) -> Result<Self> {
        Self::new(text.chars().map(String::from))
    }

    /// Number of segments (the depth; root is 0).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Alias of [`Path::len`], reads better in layout code.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Single-segment path at `index`.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Path> {
        self.segments.get(index).map(|s| Self {
            segments: vec![s.clone()],
        })
    }

    /// Last segment as a string, for labelling.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Sub-path for `range`, clamped to the path's length.
    ///
    /// An empty or inverted range yields the root.
    #[must_use]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Path {
        let len = self.segments.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return Self::root();
        }
        Self {
            segments: self.segments[start..end].to_vec(),
        }
    }

    /// The first `len` segments.
    #[inline]
    #[must_use]
    pub fn prefix(&self, len: usize) -> Path {
        self.slice(..len)
    }

    /// Drop the last segment. The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Path {
        self.prefix(self.len().saturating_sub(1))
    }

    /// All prefixes from the root up to and including `self`.
    ///
    /// Yields `depth + 1` paths.
    pub fn ancestors(&self) -> impl DoubleEndedIterator<Item = Path> + ExactSizeIterator + '_ {
        (0..self.len() + 1).map(move |level| self.prefix(level))
    }

    /// True when `prefix` is a (non-strict) prefix of `self`.
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// True when `self` is a strict ancestor of `other`.
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        other.len() > self.len() && other.starts_with(self)
    }

    /// Extend by one segment.
    pub fn child(&self, segment: impl Into<String>) -> Result<Path> {
        let segment = segment.into();
        check_segment(&segment)?;
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// Segment strings, root first.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.segments.iter().map(String::as_str)
    }

    /// Join segments with an arbitrary delimiter.
    #[must_use]
    pub fn join(&self, delim: &str) -> String {
        self.segments.join(delim)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.segments).finish()
    }
}

impl FromStr for Path {
    type Err = SunburstError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DELIMITER)
    }
}

impl TryFrom<Vec<String>> for Path {
    type Error = SunburstError;

    fn try_from(segments: Vec<String>) -> Result<Self> {
        Self::new(segments)
    }
}

impl From<Path> for Vec<String> {
    fn from(path: Path) -> Self {
        path.segments
    }
}
