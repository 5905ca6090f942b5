//! The numeric-or-string sum type used for ids and timestamps.
//!
//! The API is inconsistent about encoding ids and timestamps: the same field
//! arrives as `123` from one endpoint and `"123"` from another. Both forms are
//! kept as they arrived; nothing here coerces one into the other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON value that is either a number or a string.
///
/// Integers that fit `i64` land in `Num`; fractional numbers (lead scores,
/// prices sent where an id is expected) keep their JSON text in `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Num(i64),
    Decimal(serde_json::Number),
    Str(String),
}

impl NumOrStr {
    /// Returns the integer if the value arrived as an integral JSON number.
    #[must_use]
    pub const fn as_num(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Decimal(_) | Self::Str(_) => None,
        }
    }

    /// Floating-point view of a JSON number of either kind.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n as f64),
            Self::Decimal(n) => n.as_f64(),
            Self::Str(_) => None,
        }
    }

    /// Returns the string if the value arrived as a JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Num(_) | Self::Decimal(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// Integer view of either form. Fractional numbers and strings that are
    /// not plain decimal integers yield `None`.
    #[must_use]
    pub fn parse_i64(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Decimal(n) => n.as_i64(),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Returns true if the value arrived as a string.
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl fmt::Display for NumOrStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NumOrStr {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for NumOrStr {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for NumOrStr {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
