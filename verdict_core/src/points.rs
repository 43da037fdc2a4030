use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use crate::{correctness::CorrectnessLevel, error::Error};

/// A point quantity as served by the grading API.
///
/// Decimal fields arrive either as JSON numbers or as strings such as `"5.00"`;
/// both are coerced to `f64` so they compare by value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Points(pub f64);

impl Points {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for Points {
    fn from(v: f64) -> Self {
        Points(v)
    }
}

impl From<i32> for Points {
    fn from(v: i32) -> Self {
        Points(f64::from(v))
    }
}

impl FromStr for Points {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Points(v)),
            _ => Err(Error::Data(format!("`{}` is not a point value", s))),
        }
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoints {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Points {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPoints::deserialize(deserializer)? {
            RawPoints::Number(n) if n.is_finite() => Ok(Points(n)),
            RawPoints::Number(n) => Err(de::Error::custom(Error::Data(format!(
                "`{}` is not a point value",
                n
            )))),
            RawPoints::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// Earned and possible points of one result record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointTotals {
    pub earned: Points,
    pub possible: Points,
}

impl PointTotals {
    pub fn new(earned: impl Into<Points>, possible: impl Into<Points>) -> Self {
        PointTotals {
            earned: earned.into(),
            possible: possible.into(),
        }
    }

    /// Points earned are authoritative: nothing earned out of something
    /// possible, or a net penalty, is never shown as partially correct.
    pub fn forces_none_correct(&self) -> bool {
        self.earned.value() < 0.0 || (self.earned.is_zero() && !self.possible.is_zero())
    }
}

/// Point-based dimension, e.g. bugs exposed by a mutation suite.
pub fn points_correctness(earned: Option<Points>, possible: Option<Points>) -> CorrectnessLevel {
    let earned = match earned {
        Some(earned) => earned,
        None => return CorrectnessLevel::NotAvailable,
    };

    if Some(earned) == possible {
        return CorrectnessLevel::AllCorrect;
    }
    if earned.is_zero() && possible.map_or(true, |p| !p.is_zero()) {
        return CorrectnessLevel::NoneCorrect;
    }
    CorrectnessLevel::SomeCorrect
}
