use serde::Serialize;
use std::fmt;

use crate::correctness::CorrectnessLevel;

/// How a setup command finished, as shown next to its return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SetupOutcome {
    #[serde(rename = "Correct")]
    Correct,
    #[serde(rename = "Incorrect")]
    Incorrect,
    #[serde(rename = "Timed Out")]
    TimedOut,
}

impl SetupOutcome {
    /// A timeout wins over any return code; no code and no timeout means the
    /// setup result is hidden.
    pub fn from_setup(return_code: Option<i32>, timed_out: Option<bool>) -> Option<Self> {
        if timed_out == Some(true) {
            return Some(SetupOutcome::TimedOut);
        }
        match return_code {
            Some(0) => Some(SetupOutcome::Correct),
            Some(_) => Some(SetupOutcome::Incorrect),
            None => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SetupOutcome::Correct => "Correct",
            SetupOutcome::Incorrect => "Incorrect",
            SetupOutcome::TimedOut => "Timed Out",
        }
    }
}

impl fmt::Display for SetupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<SetupOutcome> for CorrectnessLevel {
    fn from(outcome: SetupOutcome) -> Self {
        match outcome {
            SetupOutcome::Correct => CorrectnessLevel::AllCorrect,
            SetupOutcome::Incorrect | SetupOutcome::TimedOut => CorrectnessLevel::NoneCorrect,
        }
    }
}

/// Setup return code rule shared by test suites and mutation suites.
pub fn setup_return_code_correctness(
    return_code: Option<i32>,
    timed_out: Option<bool>,
) -> CorrectnessLevel {
    SetupOutcome::from_setup(return_code, timed_out)
        .map(CorrectnessLevel::from)
        .unwrap_or(CorrectnessLevel::NotAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_out_wins() {
        assert_eq!(
            SetupOutcome::from_setup(Some(0), Some(true)),
            Some(SetupOutcome::TimedOut)
        );
        assert_eq!(
            setup_return_code_correctness(None, Some(true)),
            CorrectnessLevel::NoneCorrect
        );
    }

    #[test]
    fn return_code_decides() {
        assert_eq!(
            setup_return_code_correctness(Some(0), Some(false)),
            CorrectnessLevel::AllCorrect
        );
        assert_eq!(
            setup_return_code_correctness(Some(2), None),
            CorrectnessLevel::NoneCorrect
        );
        assert_eq!(SetupOutcome::from_setup(Some(1), None).unwrap().label(), "Incorrect");
    }

    #[test]
    fn nothing_known() {
        assert_eq!(SetupOutcome::from_setup(None, Some(false)), None);
        assert_eq!(
            setup_return_code_correctness(None, None),
            CorrectnessLevel::NotAvailable
        );
    }

    #[test]
    fn labels() {
        assert_eq!(SetupOutcome::TimedOut.to_string(), "Timed Out");
        assert_eq!(SetupOutcome::Correct.to_string(), "Correct");
    }
}
