#![forbid(unsafe_code)]

//! Angular interval assignment.
//!
//! Every path gets a span proportional to its share of the root total:
//!
//! ```text
//! width(P) = 360 · completed[P] / completed[root]
//! ```
//!
//! Within a sibling group the first member starts where its parent starts
//! and each later member starts where the previous one ended. Since
//! completed values are sums over descendants, children tile a prefix of
//! their parent's span and never leave it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SunburstError};
use crate::path::Path;
use crate::structure::PathStructure;
use crate::values::PathValues;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Angular span `[start, end]` in degrees, counter-clockwise from 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleInterval {
    pub start: f64,
    pub end: f64,
}

impl AngleInterval {
    #[inline]
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The whole circle.
    #[inline]
    #[must_use]
    pub const fn full() -> Self {
        Self::new(0.0, FULL_TURN)
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Bisecting angle.
    #[inline]
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// True when `other` lies within `self` (edges included).
    #[must_use]
    pub fn contains(&self, other: &AngleInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Per-path angles keyed by path.
pub type Angles = FxHashMap<Path, AngleInterval>;

/// Assign an interval to every path in `structured`.
///
/// `completed` must hold a value for the root and for every path in the
/// structure (as produced by [`crate::aggregate::complete`]); missing values
/// count as zero. When the root total is zero every non-root span is empty.
///
/// Returns [`SunburstError::MissingAncestor`] when a group's parent has not
/// been assigned an angle by the time the group is reached. That only
/// happens for structures not built by [`crate::structure::structure`] from a
/// completed sequence.
pub fn calculate_angles(structured: &PathStructure, completed: &PathValues) -> Result<Angles> {
    let total = completed.get(&Path::root()).unwrap_or(0.0);
    let share = |path: &Path| {
        if total > 0.0 {
            FULL_TURN * completed.get(path).unwrap_or(0.0) / total
        } else {
            0.0
        }
    };

    let mut angles = Angles::with_capacity_and_hasher(structured.len(), Default::default());
    for (depth, level) in structured.levels().iter().enumerate() {
        trace!(depth, groups = level.groups.len(), "assigning angles");
        for group in &level.groups {
            if depth == 0 {
                for path in &group.members {
                    angles.insert(path.clone(), AngleInterval::full());
                }
                continue;
            }

            let parent_start = angles
                .get(&group.parent)
                .map(|interval| interval.start)
                .ok_or_else(|| SunburstError::MissingAncestor {
                    path: group
                        .members
                        .first()
                        .cloned()
                        .unwrap_or_else(|| group.parent.clone()),
                })?;

            let mut cursor = parent_start;
            for path in &group.members {
                let end = cursor + share(path);
                angles.insert(path.clone(), AngleInterval::new(cursor, end));
                cursor = end;
            }
        }
    }
    Ok(angles)
}
