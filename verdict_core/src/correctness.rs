use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::Error;

/// Display-level summary of one or more test outcomes.
///
/// Variants are declared from least to most informative, so the derived
/// ordering is `NotAvailable < InfoOnly < NoneCorrect < SomeCorrect < AllCorrect`.
/// The serialized names double as CSS class names in the result panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CorrectnessLevel {
    #[serde(rename = "not-available", alias = "not_available")]
    NotAvailable,
    #[serde(rename = "info-only", alias = "info_only")]
    InfoOnly,
    #[serde(rename = "none-correct", alias = "none_correct")]
    NoneCorrect,
    #[serde(rename = "some-correct", alias = "some_correct")]
    SomeCorrect,
    #[serde(rename = "all-correct", alias = "all_correct")]
    AllCorrect,
}

pub const ALL_LEVELS: [CorrectnessLevel; 5] = [
    CorrectnessLevel::NotAvailable,
    CorrectnessLevel::InfoOnly,
    CorrectnessLevel::NoneCorrect,
    CorrectnessLevel::SomeCorrect,
    CorrectnessLevel::AllCorrect,
];

impl CorrectnessLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            CorrectnessLevel::NotAvailable => "not-available",
            CorrectnessLevel::InfoOnly => "info-only",
            CorrectnessLevel::NoneCorrect => "none-correct",
            CorrectnessLevel::SomeCorrect => "some-correct",
            CorrectnessLevel::AllCorrect => "all-correct",
        }
    }

    /// True for the two levels that carry no pass/fail information.
    pub fn is_uninformative(self) -> bool {
        matches!(
            self,
            CorrectnessLevel::NotAvailable | CorrectnessLevel::InfoOnly
        )
    }

    /// A result panel with nothing to show cannot be toggled open.
    pub fn is_expandable(self) -> bool {
        self != CorrectnessLevel::NotAvailable
    }

    pub fn needs_attention(self) -> bool {
        matches!(
            self,
            CorrectnessLevel::NoneCorrect | CorrectnessLevel::SomeCorrect
        )
    }
}

impl Default for CorrectnessLevel {
    fn default() -> Self {
        CorrectnessLevel::NotAvailable
    }
}

impl fmt::Display for CorrectnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.css_class())
    }
}

impl FromStr for CorrectnessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.css_class() == normalized)
            .ok_or_else(|| Error::Argument(format!("unknown correctness level `{}`", s)))
    }
}
