#![forbid(unsafe_code)]

//! Error type shared by every stage of the sunburst pipeline.

use std::fmt;

use crate::config::SunburstConfigError;
use crate::path::Path;

/// Failure of a single layout request.
///
/// All variants are deterministic input-validation failures. None of them
/// are retried and none leave partial state behind.
#[derive(Debug, Clone, PartialEq)]
pub enum SunburstError {
    /// A path segment is empty or contains the reserved delimiter.
    InvalidSegment { segment: String },
    /// The input value map contains an explicit root entry.
    InvalidInput { path: Path },
    /// A weight is negative, NaN or infinite.
    InvalidValue { path: Path, value: f64 },
    /// The order string has unknown tokens or more than one base keyword.
    InvalidOrderSpec {
        spec: String,
        message: &'static str,
    },
    /// The layout configuration failed validation.
    InvalidConfig { errors: Vec<SunburstConfigError> },
    /// A node's parent had no angle when the node was reached.
    ///
    /// Only reachable through [`crate::angles::calculate_angles`] with a
    /// hand-built structure; the layout pipeline never produces it.
    MissingAncestor { path: Path },
}

impl fmt::Display for SunburstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSegment { segment } => {
                write!(f, "invalid path segment {segment:?}")
            }
            Self::InvalidInput { path } => {
                write!(
                    f,
                    "input contains '{path}' as an explicit entry; the root value is always derived"
                )
            }
            Self::InvalidValue { path, value } => {
                write!(f, "invalid weight {value} for path '{path}'")
            }
            Self::InvalidOrderSpec { spec, message } => {
                write!(f, "invalid order spec {spec:?}: {message}")
            }
            Self::InvalidConfig { errors } => {
                f.write_str("invalid sunburst config:")?;
                for error in errors {
                    write!(f, " {error};")?;
                }
                Ok(())
            }
            Self::MissingAncestor { path } => {
                write!(f, "parent of '{path}' has no angle assigned")
            }
        }
    }
}

impl std::error::Error for SunburstError {}

/// Result alias for sunburst operations.
pub type Result<T> = std::result::Result<T, SunburstError>;
