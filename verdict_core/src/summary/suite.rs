use crate::{
    aggregate::combine_all,
    correctness::CorrectnessLevel,
    feedback::SuiteResultFeedback,
    outcome::setup_return_code_correctness,
};

use super::case;

/// Correctness shown on the setup panel. A suite without a setup command has
/// no setup panel at all.
pub fn setup_correctness(suite: &SuiteResultFeedback) -> CorrectnessLevel {
    if suite.setup_name.is_none() {
        return CorrectnessLevel::NotAvailable;
    }
    match setup_return_code_correctness(suite.setup_return_code, suite.setup_timed_out) {
        CorrectnessLevel::NotAvailable => CorrectnessLevel::InfoOnly,
        level => level,
    }
}

pub fn correctness(suite: &SuiteResultFeedback) -> CorrectnessLevel {
    let levels = std::iter::once(setup_correctness(suite))
        .chain(suite.case_results.iter().map(case::correctness));
    combine_all(levels, Some(&suite.point_totals()))
}

/// The first suite opens its setup panel when setup is what failed.
pub fn setup_open_initially(suite: &SuiteResultFeedback, is_first_suite: bool) -> bool {
    is_first_suite && setup_correctness(suite) == CorrectnessLevel::NoneCorrect
}

/// Index of the test case panel that starts open: the first case needing
/// attention in the first suite, unless setup already failed.
pub fn first_case_open_initially(
    suite: &SuiteResultFeedback,
    is_first_suite: bool,
) -> Option<usize> {
    if !is_first_suite || setup_open_initially(suite, is_first_suite) {
        return None;
    }
    suite
        .case_results
        .iter()
        .position(|c| case::correctness(c).needs_attention())
}
