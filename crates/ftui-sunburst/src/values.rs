#![forbid(unsafe_code)]

//! Weighted path collections.
//!
//! [`PathValues`] is an insertion-ordered `Path -> f64` map. It is the only
//! input type the layout engine accepts, so the `keep` ordering always has a
//! well-defined order to keep. Conversions from unordered maps sort by key
//! first.
//!
//! The adapters at the bottom of this module turn flat string-keyed data
//! into paths: either delimiter-separated keys (`"usr/local/bin"`) or
//! digit/char keys where every character is a segment (`"1121"`).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SunburstError};
use crate::path::Path;

/// Insertion-ordered mapping from [`Path`] to a non-negative weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Path, f64)>", into = "Vec<(Path, f64)>")]
pub struct PathValues {
    entries: Vec<(Path, f64)>,
    index: FxHashMap<Path, usize>,
}

impl PathValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Build from pairs, keeping their order.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Path, f64)>,
    {
        let pairs = pairs.into_iter();
        let mut values = Self::with_capacity(pairs.size_hint().0);
        for (path, value) in pairs {
            values.insert(path, value)?;
        }
        Ok(values)
    }

    /// Insert or overwrite a weight.
    ///
    /// Overwriting keeps the path at its original position. Returns the
    /// previous weight, if any.
    pub fn insert(&mut self, path: Path, value: f64) -> Result<Option<f64>> {
        if !value.is_finite() || value < 0.0 {
            return Err(SunburstError::InvalidValue { path, value });
        }
        match self.index.get(&path) {
            Some(&slot) => Ok(Some(std::mem::replace(&mut self.entries[slot].1, value))),
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, value));
                Ok(None)
            }
        }
    }

    /// Add `value` onto the weight at `path`, inserting it when absent.
    pub(crate) fn accumulate(&mut self, path: Path, value: f64) {
        match self.index.get(&path) {
            Some(&slot) => self.entries[slot].1 += value,
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, value));
            }
        }
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<f64> {
        self.index.get(path).map(|&slot| self.entries[slot].1)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Path, f64)> {
        self.entries.iter().map(|(path, value)| (path, *value))
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &Path> {
        self.entries.iter().map(|(path, _)| path)
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, value)| value).sum()
    }

    /// Delimiter-keyed adapter, e.g. `("usr/local", 3.0)` with `'/'`.
    pub fn from_delimited<I, K>(pairs: I, delim: char) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(key, value)| Ok((Path::parse(key.as_ref(), delim)?, value)))
            .collect::<Result<Vec<_>>>()?;
        Self::try_from_pairs(pairs)
    }

    /// Char-keyed adapter: each character of a key is one segment.
    pub fn from_chars<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(key, value)| Ok((Path::from_chars(key.as_ref())?, value)))
            .collect::<Result<Vec<_>>>()?;
        Self::try_from_pairs(pairs)
    }
}

impl PartialEq for PathValues {
    /// Order-sensitive: two maps are equal only if they list the same
    /// entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl TryFrom<Vec<(Path, f64)>> for PathValues {
    type Error = SunburstError;

    fn try_from(pairs: Vec<(Path, f64)>) -> Result<Self> {
        Self::try_from_pairs(pairs)
    }
}

impl From<PathValues> for Vec<(Path, f64)> {
    fn from(values: PathValues) -> Self {
        values.entries
    }
}

impl TryFrom<BTreeMap<Path, f64>> for PathValues {
    type Error = SunburstError;

    fn try_from(map: BTreeMap<Path, f64>) -> Result<Self> {
        Self::try_from_pairs(map)
    }
}

impl<S: BuildHasher> TryFrom<HashMap<Path, f64, S>> for PathValues {
    type Error = SunburstError;

    /// Hash maps carry no order; entries are sorted by key.
    fn try_from(map: HashMap<Path, f64, S>) -> Result<Self> {
        let mut pairs: Vec<_> = map.into_iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        Self::try_from_pairs(pairs)
    }
}
