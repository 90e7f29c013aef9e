#![forbid(unsafe_code)]

//! Ancestor completion and level/parent grouping.
//!
//! Two passes turn an ordered path list into the ring structure the angle
//! assigner walks:
//!
//! 1. [`complete_paths`] makes the sequence gap-free by inserting any
//!    ancestor that would otherwise never appear, without reordering.
//! 2. [`structure`] partitions the sequence by depth and then by parent.
//!    Both partitions are stable: groups appear in order of their first
//!    member and members keep their relative order. This is what lets an
//!    ordering such as `value reverse` survive into the final wedge order.
//!
//! ```text
//! level 0: [ [""] ]
//! level 1: [ [1, 2] ]
//! level 2: [ [1/1, 1/2, 1/3], [2/1] ]
//! level 3: [ [1/1/1, 1/1/2], [1/2/1], [2/1/1] ]
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::path::Path;

/// Insert missing ancestors while preserving the given order.
///
/// The result starts with the root. Each ancestor of a path that does not
/// itself occur anywhere in `ordered` is inserted right before the first
/// path needing it. Roots and repeated paths in the input are skipped, so
/// every path appears exactly once.
#[must_use]
pub fn complete_paths(ordered: &[Path]) -> Vec<Path> {
    let present: FxHashSet<&Path> = ordered.iter().collect();
    let mut emitted: FxHashSet<Path> = FxHashSet::default();
    let mut completed = Vec::with_capacity(ordered.len() + 1);

    emitted.insert(Path::root());
    completed.push(Path::root());

    for path in ordered {
        if emitted.contains(path) {
            continue;
        }
        for level in 1..path.len() {
            let ancestor = path.prefix(level);
            if !present.contains(&ancestor) && !emitted.contains(&ancestor) {
                emitted.insert(ancestor.clone());
                completed.push(ancestor);
            }
        }
        emitted.insert(path.clone());
        completed.push(path.clone());
    }
    completed
}

/// Paths sharing one parent, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiblingGroup {
    pub parent: Path,
    pub members: Vec<Path>,
}

/// All sibling groups at one depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Level {
    pub groups: Vec<SiblingGroup>,
}

impl Level {
    /// Paths of this level, group by group.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.groups.iter().flat_map(|group| group.members.iter())
    }
}

/// Depth-grouped path structure: level → sibling group → members.
///
/// `levels()[d]` holds exactly the paths of depth `d`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathStructure {
    levels: Vec<Level>,
}

impl PathStructure {
    /// Build from explicit levels, e.g. a hand-written fixture.
    #[must_use]
    pub fn from_levels(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn level(&self, depth: usize) -> Option<&Level> {
        self.levels.get(depth)
    }

    /// Deepest level index (0 when only the root exists).
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Total number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|level| &level.groups)
            .map(|group| group.members.len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every path, level by level.
    pub fn flatten(&self) -> impl Iterator<Item = &Path> {
        self.levels.iter().flat_map(Level::paths)
    }

    /// True when some group one level below has `path` as parent.
    #[must_use]
    pub fn has_children(&self, path: &Path) -> bool {
        self.level(path.depth() + 1).is_some_and(|level| {
            level
                .groups
                .iter()
                .any(|group| &group.parent == path && !group.members.is_empty())
        })
    }
}

/// Group a path sequence by depth, then by parent, preserving order.
///
/// The input should come from [`complete_paths`]; levels are indexed by
/// depth, so a sequence that skips a depth yields an empty level there.
#[must_use]
pub fn structure(paths: &[Path]) -> PathStructure {
    let max_depth = paths.iter().map(Path::depth).max();
    let Some(max_depth) = max_depth else {
        return PathStructure::default();
    };

    let mut levels: Vec<Level> = vec![Level::default(); max_depth + 1];
    let mut group_index: Vec<FxHashMap<Path, usize>> = vec![FxHashMap::default(); max_depth + 1];

    for path in paths {
        let depth = path.depth();
        let parent = path.parent();
        let groups = &mut levels[depth].groups;
        let slot = *group_index[depth].entry(parent.clone()).or_insert_with(|| {
            groups.push(SiblingGroup {
                parent,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(path.clone());
    }

    PathStructure { levels }
}
