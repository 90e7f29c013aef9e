#![forbid(unsafe_code)]

//! Ring radii and explode offsets.
//!
//! Radii are computed independently of angles. A wedge's inner radius is the
//! sum of the ring widths and gaps of all its strict ancestors, plus its own
//! leading gap:
//!
//! ```text
//! inner(P) = Σ_{A ⊏ P} (width(A) + gap(A).before + gap(A).after) + gap(P).before
//! outer(P) = inner(P) + width(P)
//! ```
//!
//! The root takes part in the sum only when `plot_center` is set, i.e. when
//! the root is drawn as a disc of its own.
//!
//! A non-zero `before` gap pushes only that wedge outward; a non-zero `after`
//! gap pushes the whole subtree below it. Together they give the "exploded"
//! look without touching any angle.

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Radial space inserted around one ring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RadialGap {
    /// Offset of this wedge from its parent ring.
    pub before: f64,
    /// Extra offset applied to every descendant.
    pub after: f64,
}

impl RadialGap {
    pub const NONE: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(before: f64, after: f64) -> Self {
        Self { before, after }
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.before + self.after
    }
}

/// Radial thickness of the ring drawn for a path.
pub trait WidthPolicy {
    fn width(&self, path: &Path) -> f64;
}

/// Gap inserted before a path's ring and after it (for descendants).
pub trait GapPolicy {
    fn gap(&self, path: &Path) -> RadialGap;
}

impl<F> WidthPolicy for F
where
    F: Fn(&Path) -> f64,
{
    fn width(&self, path: &Path) -> f64 {
        self(path)
    }
}

impl<F> GapPolicy for F
where
    F: Fn(&Path) -> RadialGap,
{
    fn gap(&self, path: &Path) -> RadialGap {
        self(path)
    }
}

/// Same width for every ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantWidth(pub f64);

impl WidthPolicy for ConstantWidth {
    fn width(&self, _path: &Path) -> f64 {
        self.0
    }
}

/// No explode offsets anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoGap;

impl GapPolicy for NoGap {
    fn gap(&self, _path: &Path) -> RadialGap {
        RadialGap::NONE
    }
}

/// Radius calculator bound to a width and a gap policy.
#[derive(Clone, Copy)]
pub struct RadialLayout<'a> {
    width: &'a dyn WidthPolicy,
    gap: &'a dyn GapPolicy,
    plot_center: bool,
}

impl<'a> RadialLayout<'a> {
    #[must_use]
    pub fn new(width: &'a dyn WidthPolicy, gap: &'a dyn GapPolicy, plot_center: bool) -> Self {
        Self {
            width,
            gap,
            plot_center,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self, path: &Path) -> f64 {
        self.width.width(path)
    }

    #[inline]
    #[must_use]
    pub fn gap(&self, path: &Path) -> RadialGap {
        self.gap.gap(path)
    }

    #[must_use]
    pub fn inner_radius(&self, path: &Path) -> f64 {
        let first = usize::from(!self.plot_center);
        let ancestors: f64 = (first..path.len())
            .map(|level| {
                let ancestor = path.prefix(level);
                self.width(&ancestor) + self.gap(&ancestor).total()
            })
            .sum();
        ancestors + self.gap(path).before
    }

    #[must_use]
    pub fn outer_radius(&self, path: &Path) -> f64 {
        self.inner_radius(path) + self.width(path)
    }

    /// Radius halfway through the ring; where labels usually go.
    #[must_use]
    pub fn mid_radius(&self, path: &Path) -> f64 {
        let inner = self.inner_radius(path);
        inner + self.width(path) / 2.0
    }

    /// `(inner, outer)` in one pass.
    #[must_use]
    pub fn ring(&self, path: &Path) -> (f64, f64) {
        let inner = self.inner_radius(path);
        (inner, inner + self.width(path))
    }
}

impl std::fmt::Debug for RadialLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadialLayout")
            .field("plot_center", &self.plot_center)
            .finish_non_exhaustive()
    }
}
