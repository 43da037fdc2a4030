use crate::{
    aggregate::combine_all,
    correctness::CorrectnessLevel,
    feedback::MutationSuiteResultFeedback,
    outcome::{setup_return_code_correctness, SetupOutcome},
    points::points_correctness,
};

pub fn setup_correctness(result: &MutationSuiteResultFeedback) -> CorrectnessLevel {
    setup_return_code_correctness(result.setup_return_code, result.setup_timed_out)
}

pub fn setup_outcome(result: &MutationSuiteResultFeedback) -> Option<SetupOutcome> {
    SetupOutcome::from_setup(result.setup_return_code, result.setup_timed_out)
}

/// How many of the student's tests survived the validity check.
pub fn validity_correctness(result: &MutationSuiteResultFeedback) -> CorrectnessLevel {
    let invalid_tests = match &result.invalid_tests {
        Some(invalid_tests) => invalid_tests,
        None => return CorrectnessLevel::NotAvailable,
    };

    if result.has_setup_command && result.setup_return_code != Some(0) {
        return CorrectnessLevel::NoneCorrect;
    }
    if invalid_tests.is_empty() {
        return CorrectnessLevel::AllCorrect;
    }
    if invalid_tests.len() == result.student_tests.len() {
        return CorrectnessLevel::NoneCorrect;
    }
    CorrectnessLevel::SomeCorrect
}

/// Points for exposed bugs; unavailable while the bug count is hidden.
pub fn bugs_exposed_correctness(result: &MutationSuiteResultFeedback) -> CorrectnessLevel {
    let earned = result.num_bugs_exposed.map(|_| result.total_points);
    points_correctness(earned, Some(result.total_points_possible))
}

pub fn correctness(result: &MutationSuiteResultFeedback) -> CorrectnessLevel {
    combine_all(
        vec![
            setup_correctness(result),
            validity_correctness(result),
            bugs_exposed_correctness(result),
        ],
        None,
    )
}

/// Student tests that passed the validity check, in submission order.
pub fn valid_tests(result: &MutationSuiteResultFeedback) -> Vec<&str> {
    let invalid = result.invalid_tests.as_deref().unwrap_or(&[]);
    result
        .student_tests
        .iter()
        .filter(|name| !invalid.contains(*name))
        .map(String::as_str)
        .collect()
}

pub fn test_timed_out(result: &MutationSuiteResultFeedback, test_name: &str) -> bool {
    result
        .timed_out_tests
        .as_ref()
        .map_or(false, |names| names.iter().any(|name| name == test_name))
}

pub fn show_setup_section(result: &MutationSuiteResultFeedback) -> bool {
    let settings = &result.fdbk_settings;
    settings.show_setup_stdout
        || settings.show_setup_stderr
        || result.setup_return_code.is_some()
        || result.setup_timed_out == Some(true)
}

pub fn show_buggy_implementations_section(result: &MutationSuiteResultFeedback) -> bool {
    let settings = &result.fdbk_settings;
    settings.show_grade_buggy_impls_stdout
        || settings.show_grade_buggy_impls_stderr
        || result.num_bugs_exposed.is_some()
}
