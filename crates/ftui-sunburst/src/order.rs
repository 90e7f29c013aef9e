#![forbid(unsafe_code)]

//! Wedge ordering policy.
//!
//! An order spec is a whitespace-separated set of tokens: at most one base
//! keyword out of `keep`, `key` and `value`, optionally combined with
//! `reverse`.
//!
//! | Spec              | Sequence fed to the completer                      |
//! |-------------------|----------------------------------------------------|
//! | `""` / `keep`     | input paths, in input order                        |
//! | `key`             | completed paths, lexicographic by segment          |
//! | `value`           | completed paths, ascending cumulative value        |
//! | `... reverse`     | the above, reversed                                |
//!
//! Repeating a token is harmless (`"reverse reverse"` reverses once).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SunburstError};
use crate::path::Path;
use crate::values::PathValues;

/// Base ordering keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseOrder {
    /// Input order. [`PathValues`] is always insertion-ordered.
    Keep,
    /// Lexicographic by path segments.
    Key,
    /// Ascending by cumulative value; ties keep completion order.
    Value,
}

impl BaseOrder {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "keep" => Some(Self::Keep),
            "key" => Some(Self::Key),
            "value" => Some(Self::Value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Key => "key",
            Self::Value => "value",
        }
    }
}

/// Parsed order specification.
///
/// The default is the empty spec, which keeps the input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderSpec {
    pub base: Option<BaseOrder>,
    pub reverse: bool,
}

impl OrderSpec {
    #[must_use]
    pub const fn new(base: Option<BaseOrder>, reverse: bool) -> Self {
        Self { base, reverse }
    }

    /// `value reverse`: largest wedges first.
    #[must_use]
    pub const fn largest_first() -> Self {
        Self::new(Some(BaseOrder::Value), true)
    }

    /// Parse a spec string such as `"key reverse"`.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |message: &'static str| SunburstError::InvalidOrderSpec {
            spec: spec.to_string(),
            message,
        };

        let mut parsed = Self::default();
        for token in spec.split_whitespace() {
            if token == "reverse" {
                parsed.reverse = true;
                continue;
            }
            let base = BaseOrder::parse(token)
                .ok_or_else(|| invalid("unknown token; expected keep|key|value [reverse]"))?;
            match parsed.base {
                Some(existing) if existing != base => {
                    return Err(invalid("more than one of keep|key|value"));
                }
                _ => parsed.base = Some(base),
            }
        }
        Ok(parsed)
    }

    /// Produce the display-ordered path sequence.
    ///
    /// `keep` (and the empty spec) draws from `input`; `key` and `value`
    /// draw from `completed`, which also contains every ancestor.
    #[must_use]
    pub fn apply(&self, input: &PathValues, completed: &PathValues) -> Vec<Path> {
        let mut ordered: Vec<Path> = match self.base {
            None | Some(BaseOrder::Keep) => input.paths().cloned().collect(),
            Some(BaseOrder::Key) => {
                let mut paths: Vec<Path> = completed.paths().cloned().collect();
                paths.sort();
                paths
            }
            Some(BaseOrder::Value) => {
                let mut entries: Vec<(&Path, f64)> = completed.iter().collect();
                entries.sort_by(|a, b| a.1.total_cmp(&b.1));
                entries.into_iter().map(|(path, _)| path.clone()).collect()
            }
        };
        if self.reverse {
            ordered.reverse();
        }
        ordered
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.base, self.reverse) {
            (Some(base), true) => write!(f, "{} reverse", base.as_str()),
            (Some(base), false) => f.write_str(base.as_str()),
            (None, true) => f.write_str("reverse"),
            (None, false) => Ok(()),
        }
    }
}

impl FromStr for OrderSpec {
    type Err = SunburstError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderSpec {
    type Error = SunburstError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<OrderSpec> for String {
    fn from(spec: OrderSpec) -> Self {
        spec.to_string()
    }
}
