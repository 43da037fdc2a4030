//! Result-feedback records as served by the grading API.
//!
//! Only the fields the correctness rules read are modelled; anything else in a
//! document is ignored. Every field defaults, so partial documents load.

use serde::{Deserialize, Serialize};

use crate::points::{PointTotals, Points};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedReturnCode {
    None,
    Zero,
    Nonzero,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandFeedbackSettings {
    pub show_actual_return_code: bool,
    pub show_actual_stdout: bool,
    pub show_actual_stderr: bool,
    pub show_whether_timed_out: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandResultFeedback {
    pub pk: u64,
    #[serde(rename = "ag_test_command_name")]
    pub name: String,
    pub fdbk_settings: CommandFeedbackSettings,
    pub timed_out: Option<bool>,
    pub return_code_correct: Option<bool>,
    pub expected_return_code: Option<ExpectedReturnCode>,
    pub actual_return_code: Option<i32>,
    pub stdout_correct: Option<bool>,
    pub stderr_correct: Option<bool>,
    pub total_points: Points,
    pub total_points_possible: Points,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseResultFeedback {
    pub pk: u64,
    #[serde(rename = "ag_test_case_name")]
    pub name: String,
    pub total_points: Points,
    pub total_points_possible: Points,
    #[serde(rename = "ag_test_command_results")]
    pub command_results: Vec<CommandResultFeedback>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteResultFeedback {
    pub pk: u64,
    #[serde(rename = "ag_test_suite_name")]
    pub name: String,
    pub total_points: Points,
    pub total_points_possible: Points,
    pub setup_name: Option<String>,
    pub setup_return_code: Option<i32>,
    pub setup_timed_out: Option<bool>,
    #[serde(rename = "ag_test_case_results")]
    pub case_results: Vec<CaseResultFeedback>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationFeedbackSettings {
    pub show_setup_return_code: bool,
    pub show_setup_stdout: bool,
    pub show_setup_stderr: bool,
    pub show_invalid_test_names: bool,
    pub show_points: bool,
    pub show_get_test_names_return_code: bool,
    pub show_get_test_names_stdout: bool,
    pub show_get_test_names_stderr: bool,
    pub show_validity_check_stdout: bool,
    pub show_validity_check_stderr: bool,
    pub show_grade_buggy_impls_stdout: bool,
    pub show_grade_buggy_impls_stderr: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationSuiteResultFeedback {
    pub pk: u64,
    #[serde(rename = "mutation_test_suite_name")]
    pub name: String,
    pub fdbk_settings: MutationFeedbackSettings,
    pub has_setup_command: bool,
    pub setup_command_name: Option<String>,
    pub setup_return_code: Option<i32>,
    pub setup_timed_out: Option<bool>,
    pub student_tests: Vec<String>,
    pub discarded_tests: Vec<String>,
    pub invalid_tests: Option<Vec<String>>,
    pub timed_out_tests: Option<Vec<String>>,
    pub num_bugs_exposed: Option<u32>,
    pub bugs_exposed: Option<Vec<String>>,
    pub total_points: Points,
    pub total_points_possible: Points,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionResultFeedback {
    pub pk: u64,
    pub total_points: Points,
    pub total_points_possible: Points,
    #[serde(rename = "ag_test_suite_results")]
    pub suite_results: Vec<SuiteResultFeedback>,
    #[serde(rename = "mutation_test_suite_results")]
    pub mutation_suite_results: Vec<MutationSuiteResultFeedback>,
}

macro_rules! impl_point_totals {
    ($($record:ty),*) => {
        $(
            impl $record {
                pub fn point_totals(&self) -> PointTotals {
                    PointTotals {
                        earned: self.total_points,
                        possible: self.total_points_possible,
                    }
                }
            }
        )*
    };
}

impl_point_totals!(
    CommandResultFeedback,
    CaseResultFeedback,
    SuiteResultFeedback,
    MutationSuiteResultFeedback,
    SubmissionResultFeedback
);
