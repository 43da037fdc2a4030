//! Correctness of each kind of result record, as shown in the submission
//! detail panels.

pub mod case;
pub mod command;
pub mod mutation;
pub mod suite;

use crate::{
    correctness::CorrectnessLevel,
    feedback::{
        CaseResultFeedback, CommandResultFeedback, MutationSuiteResultFeedback,
        SuiteResultFeedback,
    },
};

/// Overall correctness of one result record.
pub trait Summarize {
    fn correctness(&self) -> CorrectnessLevel;
}

impl Summarize for CommandResultFeedback {
    fn correctness(&self) -> CorrectnessLevel {
        command::correctness(self)
    }
}

impl Summarize for CaseResultFeedback {
    fn correctness(&self) -> CorrectnessLevel {
        case::correctness(self)
    }
}

impl Summarize for SuiteResultFeedback {
    fn correctness(&self) -> CorrectnessLevel {
        suite::correctness(self)
    }
}

impl Summarize for MutationSuiteResultFeedback {
    fn correctness(&self) -> CorrectnessLevel {
        mutation::correctness(self)
    }
}
