//! Two-tailed significance from a Z statistic.

use std::fmt;

use serde::{Serialize, Serializer};

use super::normal;

/// Smallest p-value reported numerically; anything below renders as `<0.0001`.
pub const P_VALUE_FLOOR: f64 = 0.0001;

/// A two-tailed p-value as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PValue {
    /// `p < 0.0001`.
    BelowFloor,
    Value(f64),
}

impl PValue {
    pub fn is_below_floor(&self) -> bool {
        matches!(self, Self::BelowFloor)
    }
}

impl fmt::Display for PValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowFloor => f.write_str("<0.0001"),
            Self::Value(p) => write!(f, "{p:.4}"),
        }
    }
}

impl Serialize for PValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Two-tailed p-value `2 * (1 - Φ(|z|))`.
pub fn two_tailed_p_value(z: f64) -> PValue {
    let p = 2.0 * (1.0 - normal::cdf(z.abs()));
    if p < P_VALUE_FLOOR {
        PValue::BelowFloor
    } else {
        PValue::Value(p)
    }
}
