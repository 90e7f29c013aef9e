#![forbid(unsafe_code)]

//! End-to-end sunburst layout.
//!
//! [`SunburstLayout::compute`] runs the whole pipeline in one synchronous
//! pass:
//!
//! ```text
//! PathValues ─complete─▶ completed ─order─▶ Vec<Path> ─complete_paths─▶
//!   ─structure─▶ PathStructure ─calculate_angles─▶ angles ─RadialLayout─▶ wedges
//! ```
//!
//! Nothing is shared between runs; identical inputs give identical layouts.
//! [`Sunburst`] wraps the pipeline for chart code that wants to keep its
//! input and policies around and only recompute after a change.
//!
//! # Example
//!
//! ```
//! use ftui_sunburst::{PathValues, Sunburst, SunburstConfig};
//!
//! let values = PathValues::from_delimited(
//!     [("docs", 3.0), ("src/lib.rs", 5.0), ("src/main.rs", 2.0)],
//!     '/',
//! )
//! .unwrap();
//!
//! let mut chart = Sunburst::new(values).with_config(SunburstConfig {
//!     ring_width: 1.0,
//!     ..SunburstConfig::default()
//! });
//! let layout = chart.layout().unwrap();
//!
//! let src = layout.get(&"src".parse().unwrap()).unwrap();
//! assert_eq!(src.value, 7.0);
//! assert!((src.angles.width() - 252.0).abs() < 1e-9);
//! assert_eq!((src.inner_radius, src.outer_radius), (0.0, 1.0));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, debug_span};

use crate::aggregate::complete;
use crate::angles::{AngleInterval, calculate_angles};
use crate::config::SunburstConfig;
use crate::error::{Result, SunburstError};
use crate::path::Path;
use crate::radius::{ConstantWidth, GapPolicy, NoGap, RadialLayout, WidthPolicy};
use crate::structure::{PathStructure, complete_paths, structure};
use crate::values::PathValues;

/// One positioned annular sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub path: Path,
    pub depth: usize,
    /// Cumulative value of the subtree.
    pub value: f64,
    pub angles: AngleInterval,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// No child of this path exists in the tree.
    pub is_outermost: bool,
    /// Passes the `plot_center` / `min_angle` filters.
    pub visible: bool,
}

impl Wedge {
    /// Radial thickness.
    #[inline]
    #[must_use]
    pub fn ring_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    #[inline]
    #[must_use]
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    #[inline]
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.angles.mid()
    }

    /// Cartesian point at mid radius and mid angle.
    #[must_use]
    pub fn centroid(&self, origin: (f64, f64)) -> (f64, f64) {
        let theta = self.mid_angle().to_radians();
        let r = self.mid_radius();
        (origin.0 + r * theta.cos(), origin.1 + r * theta.sin())
    }

    /// The renderer contract: `(inner, outer, start, end, value)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.inner_radius,
            self.outer_radius,
            self.angles.start,
            self.angles.end,
            self.value,
        )
    }
}

/// Complete layout of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstLayout {
    wedges: Vec<Wedge>,
    #[serde(skip)]
    index: FxHashMap<Path, usize>,
    #[serde(skip)]
    structure: PathStructure,
    #[serde(skip)]
    completed: PathValues,
    origin: (f64, f64),
}

impl SunburstLayout {
    /// Run the full pipeline.
    ///
    /// Fails with [`SunburstError::InvalidConfig`] when `config` does not
    /// pass [`SunburstConfig::validate`], and with
    /// [`SunburstError::InvalidInput`] when `input` holds the root. No
    /// partial layout is ever returned.
    pub fn compute(
        input: &PathValues,
        config: &SunburstConfig,
        width: &dyn WidthPolicy,
        gap: &dyn GapPolicy,
    ) -> Result<Self> {
        let _span = debug_span!(
            "sunburst_layout",
            inputs = input.len(),
            order = %config.order,
            plot_center = config.plot_center
        )
        .entered();

        config
            .validate()
            .map_err(|errors| SunburstError::InvalidConfig { errors })?;
        let completed = complete(input)?;
        let ordered = config.order.apply(input, &completed);
        let sequence = complete_paths(&ordered);
        let structured = structure(&sequence);
        let angles = calculate_angles(&structured, &completed)?;
        let radial = RadialLayout::new(width, gap, config.plot_center);

        let parents: FxHashSet<Path> = sequence
            .iter()
            .filter(|path| !path.is_root())
            .map(Path::parent)
            .collect();

        let mut wedges = Vec::with_capacity(sequence.len());
        for path in &sequence {
            let interval = angles
                .get(path)
                .copied()
                .ok_or_else(|| SunburstError::MissingAncestor { path: path.clone() })?;
            let (inner_radius, outer_radius) = radial.ring(path);
            let visible = if path.is_root() {
                config.plot_center
            } else {
                interval.width() > config.min_angle
            };
            wedges.push(Wedge {
                path: path.clone(),
                depth: path.depth(),
                value: completed.get(path).unwrap_or(0.0),
                angles: interval,
                inner_radius,
                outer_radius,
                is_outermost: !parents.contains(path),
                visible,
            });
        }

        let index = wedges
            .iter()
            .enumerate()
            .map(|(slot, wedge)| (wedge.path.clone(), slot))
            .collect();

        debug!(
            wedges = wedges.len(),
            levels = structured.levels().len(),
            total = completed.get(&Path::root()).unwrap_or(0.0),
            "sunburst layout computed"
        );

        Ok(Self {
            wedges,
            index,
            structure: structured,
            completed,
            origin: config.origin,
        })
    }

    /// Every wedge, root included, in display order.
    #[must_use]
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    /// Wedges a renderer should draw.
    pub fn visible_wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.wedges.iter().filter(|wedge| wedge.visible)
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&Wedge> {
        self.index.get(path).map(|&slot| &self.wedges[slot])
    }

    #[must_use]
    pub fn structure(&self) -> &PathStructure {
        &self.structure
    }

    /// Cumulative values for every node.
    #[must_use]
    pub fn completed(&self) -> &PathValues {
        &self.completed
    }

    #[must_use]
    pub fn max_level(&self) -> usize {
        self.structure.max_level()
    }

    /// Root value: the sum of all input weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.completed.get(&Path::root()).unwrap_or(0.0)
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wedges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }
}

/// A chart: input, configuration and policies plus the memoized layout.
///
/// Setters drop the memoized layout; [`Sunburst::layout`] recomputes on the
/// next call.
pub struct Sunburst {
    input: PathValues,
    config: SunburstConfig,
    width: Option<Box<dyn WidthPolicy>>,
    gap: Box<dyn GapPolicy>,
    cached: Option<SunburstLayout>,
}

impl Sunburst {
    /// Chart with the default configuration, constant ring width and no
    /// gaps.
    #[must_use]
    pub fn new(input: PathValues) -> Self {
        Self {
            input,
            config: SunburstConfig::default(),
            width: None,
            gap: Box::new(NoGap),
            cached: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SunburstConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Per-path ring width. Without one, every ring is
    /// `config.ring_width` thick.
    #[must_use]
    pub fn with_width_policy(mut self, policy: impl WidthPolicy + 'static) -> Self {
        self.set_width_policy(policy);
        self
    }

    #[must_use]
    pub fn with_gap_policy(mut self, policy: impl GapPolicy + 'static) -> Self {
        self.set_gap_policy(policy);
        self
    }

    pub fn set_input(&mut self, input: PathValues) {
        self.input = input;
        self.invalidate();
    }

    pub fn set_config(&mut self, config: SunburstConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn set_width_policy(&mut self, policy: impl WidthPolicy + 'static) {
        self.width = Some(Box::new(policy));
        self.invalidate();
    }

    pub fn set_gap_policy(&mut self, policy: impl GapPolicy + 'static) {
        self.gap = Box::new(policy);
        self.invalidate();
    }

    #[must_use]
    pub fn input(&self) -> &PathValues {
        &self.input
    }

    #[must_use]
    pub fn config(&self) -> &SunburstConfig {
        &self.config
    }

    /// Drop the memoized layout.
    #[inline]
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    #[inline]
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Memoized layout; computed on first use and after any setter.
    pub fn layout(&mut self) -> Result<&SunburstLayout> {
        let layout = match self.cached.take() {
            Some(layout) => layout,
            None => self.compute()?,
        };
        Ok(self.cached.insert(layout))
    }

    /// Fresh layout, bypassing and not touching the memo.
    pub fn compute(&self) -> Result<SunburstLayout> {
        let fallback = ConstantWidth(self.config.ring_width);
        let width: &dyn WidthPolicy = match &self.width {
            Some(policy) => policy.as_ref(),
            None => &fallback,
        };
        SunburstLayout::compute(&self.input, &self.config, width, self.gap.as_ref())
    }
}

impl std::fmt::Debug for Sunburst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sunburst")
            .field("inputs", &self.input.len())
            .field("config", &self.config)
            .field("custom_width", &self.width.is_some())
            .field("cached", &self.cached.is_some())
            .finish_non_exhaustive()
    }
}
