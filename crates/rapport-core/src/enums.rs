//! Partner designators and prediction classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Partner
// ---------------------------------------------------------------------------

/// Which of the two partners an answer pertains to.
///
/// Serialized as the single uppercase letters the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partner {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
}

impl Partner {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Partner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partner {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            other => Err(CoreError::Validation(format!(
                "partner must be 'A' or 'B', got '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// PredictionClass
// ---------------------------------------------------------------------------

/// Binary prediction outcome.
///
/// ```text
/// 0 → married (stable)
/// 1 → divorced
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionClass {
    Married,
    Divorced,
}

impl PredictionClass {
    /// Map the backend's raw class value. Anything other than exactly `0` or
    /// `1` (including null) means no usable prediction.
    #[must_use]
    pub const fn from_raw(raw: Option<i64>) -> Option<Self> {
        match raw {
            Some(0) => Some(Self::Married),
            Some(1) => Some(Self::Divorced),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Married => "Married",
            Self::Divorced => "Divorced",
        }
    }
}

impl fmt::Display for PredictionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
