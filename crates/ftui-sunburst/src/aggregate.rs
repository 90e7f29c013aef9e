#![forbid(unsafe_code)]

//! Value completion.
//!
//! [`complete`] pushes every input weight up to all of its prefixes, so the
//! result carries a cumulative value for every node of the implied tree,
//! including the root:
//!
//! ```text
//! completed[P] = Σ input[Q]  for every input path Q that starts with P
//! completed[root] = Σ input
//! ```
//!
//! Unrelated branches contribute to shared ancestors independently (`a/x`
//! and `a/y` both add to `a` and to the root).

use tracing::trace;

use crate::error::{Result, SunburstError};
use crate::path::Path;
use crate::values::PathValues;

/// Compute cumulative values for every prefix of every input path.
///
/// The input must not contain the root; its value is always derived. The
/// check happens before any summation. The output lists the root first,
/// then each path in first-touched order (prefixes of earlier inputs
/// before prefixes of later ones).
pub fn complete(input: &PathValues) -> Result<PathValues> {
    if input.contains(&Path::root()) {
        return Err(SunburstError::InvalidInput { path: Path::root() });
    }

    let mut completed = PathValues::with_capacity(input.len() * 2 + 1);
    completed.accumulate(Path::root(), 0.0);
    for (path, value) in input.iter() {
        for level in 0..=path.len() {
            completed.accumulate(path.prefix(level), value);
        }
    }

    trace!(
        inputs = input.len(),
        nodes = completed.len(),
        "completed path values"
    );
    Ok(completed)
}
