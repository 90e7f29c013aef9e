#![forbid(unsafe_code)]

//! Sunburst: path aggregation and angular layout for hierarchical pie charts.
//!
//! # Role in FrankenTUI
//! `ftui-sunburst` is a pure layout engine. It turns a sparse map of weighted
//! slash-delimited paths into concentric rings of wedges: every node gets an
//! angular span proportional to its cumulative value, nested inside its
//! parent's span, plus an inner/outer radius. Drawing, colour and labels are
//! left to whoever consumes the [`Wedge`]s.
//!
//! # Primary responsibilities
//! - **Path**: immutable segment sequences with prefix/ancestor queries.
//! - **Completion**: cumulative values for every ancestor, root included.
//! - **Ordering**: `keep` / `key` / `value`, optionally `reverse`.
//! - **Structuring**: stable grouping by depth and parent.
//! - **Angles**: contiguous, parent-nested degree intervals.
//! - **Radii**: per-path widths and explode gaps via policy traits.
//!
//! # How it fits in the system
//! The computation is synchronous and side-effect free. [`Sunburst`] keeps
//! the last layout memoized until its input, configuration or policies
//! change; [`SunburstLayout::compute`] is the stateless entry point.

pub mod aggregate;
pub mod angles;
pub mod config;
pub mod error;
pub mod layout;
pub mod order;
pub mod path;
pub mod radius;
pub mod structure;
pub mod values;

pub use aggregate::complete;
pub use angles::{AngleInterval, Angles, calculate_angles};
pub use config::{SunburstConfig, SunburstConfigError, SunburstConfigParse};
pub use error::{Result, SunburstError};
pub use layout::{Sunburst, SunburstLayout, Wedge};
pub use order::{BaseOrder, OrderSpec};
pub use path::{DELIMITER, Path};
pub use radius::{ConstantWidth, GapPolicy, NoGap, RadialGap, RadialLayout, WidthPolicy};
pub use structure::{Level, PathStructure, SiblingGroup, complete_paths, structure};
pub use values::PathValues;
