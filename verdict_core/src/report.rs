use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::{
    aggregate::combine_all,
    correctness::CorrectnessLevel,
    error::{Error, Result},
    feedback::{
        CaseResultFeedback, CommandResultFeedback, MutationSuiteResultFeedback,
        SubmissionResultFeedback, SuiteResultFeedback,
    },
    outcome::SetupOutcome,
    points::Points,
    summary::{case, command, mutation, suite, Summarize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(Error::Argument(format!(
                "cannot tell the format of `{}`, expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }
}

/// A submission result loaded from a feedback document.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub feedback: SubmissionResultFeedback,
}

impl SubmissionReport {
    pub fn from_string(content: &str, format: DocumentFormat) -> Result<Self> {
        let feedback = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(SubmissionReport { feedback })
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let p = Path::new(path);
        if !p.exists() {
            return Err(Error::NotFound(path.to_string()));
        }
        let format = DocumentFormat::from_path(p)?;
        let content = fs::read_to_string(p)?;
        let report = Self::from_string(&content, format)?;

        debug!(
            "loaded submission {} from {}: {} suites, {} mutation suites",
            report.feedback.pk,
            path,
            report.feedback.suite_results.len(),
            report.feedback.mutation_suite_results.len()
        );
        Ok(report)
    }

    pub fn breakdown(&self) -> Breakdown {
        Breakdown::from_feedback(&self.feedback)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandBreakdown {
    pub name: String,
    pub return_code: CorrectnessLevel,
    pub stdout: CorrectnessLevel,
    pub stderr: CorrectnessLevel,
    pub output: CorrectnessLevel,
    pub overall: CorrectnessLevel,
}

impl From<&CommandResultFeedback> for CommandBreakdown {
    fn from(cmd: &CommandResultFeedback) -> Self {
        CommandBreakdown {
            name: cmd.name.clone(),
            return_code: command::return_code_correctness(cmd),
            stdout: command::stream_correctness(cmd.stdout_correct),
            stderr: command::stream_correctness(cmd.stderr_correct),
            output: command::output_correctness(cmd),
            overall: cmd.correctness(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseBreakdown {
    pub name: String,
    pub return_code: CorrectnessLevel,
    pub output: CorrectnessLevel,
    pub overall: CorrectnessLevel,
    pub open_initially: bool,
    pub commands: Vec<CommandBreakdown>,
}

impl CaseBreakdown {
    fn new(case_result: &CaseResultFeedback, open_initially: bool) -> Self {
        CaseBreakdown {
            name: case_result.name.clone(),
            return_code: case::return_code_correctness(case_result),
            output: case::output_correctness(case_result),
            overall: case_result.correctness(),
            open_initially,
            commands: case_result
                .command_results
                .iter()
                .map(CommandBreakdown::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteBreakdown {
    pub name: String,
    pub setup: CorrectnessLevel,
    pub setup_open_initially: bool,
    pub overall: CorrectnessLevel,
    pub total_points: Points,
    pub total_points_possible: Points,
    pub cases: Vec<CaseBreakdown>,
}

impl SuiteBreakdown {
    fn new(suite_result: &SuiteResultFeedback, is_first_suite: bool) -> Self {
        let open_case = suite::first_case_open_initially(suite_result, is_first_suite);
        SuiteBreakdown {
            name: suite_result.name.clone(),
            setup: suite::setup_correctness(suite_result),
            setup_open_initially: suite::setup_open_initially(suite_result, is_first_suite),
            overall: suite_result.correctness(),
            total_points: suite_result.total_points,
            total_points_possible: suite_result.total_points_possible,
            cases: suite_result
                .case_results
                .iter()
                .enumerate()
                .map(|(i, c)| CaseBreakdown::new(c, open_case == Some(i)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationSuiteBreakdown {
    pub name: String,
    pub setup: CorrectnessLevel,
    pub setup_outcome: Option<SetupOutcome>,
    pub validity: CorrectnessLevel,
    pub bugs_exposed: CorrectnessLevel,
    pub overall: CorrectnessLevel,
    pub num_bugs_exposed: Option<u32>,
    pub valid_tests: Vec<String>,
    pub timed_out_tests: Vec<String>,
}

impl From<&MutationSuiteResultFeedback> for MutationSuiteBreakdown {
    fn from(result: &MutationSuiteResultFeedback) -> Self {
        MutationSuiteBreakdown {
            name: result.name.clone(),
            setup: mutation::setup_correctness(result),
            setup_outcome: mutation::setup_outcome(result),
            validity: mutation::validity_correctness(result),
            bugs_exposed: mutation::bugs_exposed_correctness(result),
            overall: result.correctness(),
            num_bugs_exposed: result.num_bugs_exposed,
            valid_tests: mutation::valid_tests(result)
                .into_iter()
                .map(String::from)
                .collect(),
            timed_out_tests: result
                .student_tests
                .iter()
                .filter(|name| mutation::test_timed_out(result, name))
                .cloned()
                .collect(),
        }
    }
}

/// Correctness of every panel of a submission, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub submission: u64,
    pub total_points: Points,
    pub total_points_possible: Points,
    pub overall: CorrectnessLevel,
    pub suites: Vec<SuiteBreakdown>,
    pub mutation_suites: Vec<MutationSuiteBreakdown>,
}

impl Breakdown {
    pub fn from_feedback(feedback: &SubmissionResultFeedback) -> Self {
        let suites: Vec<SuiteBreakdown> = feedback
            .suite_results
            .iter()
            .enumerate()
            .map(|(i, s)| SuiteBreakdown::new(s, i == 0))
            .collect();
        let mutation_suites: Vec<MutationSuiteBreakdown> = feedback
            .mutation_suite_results
            .iter()
            .map(MutationSuiteBreakdown::from)
            .collect();

        let overall = combine_all(
            suites
                .iter()
                .map(|s| s.overall)
                .chain(mutation_suites.iter().map(|m| m.overall)),
            Some(&feedback.point_totals()),
        );

        Breakdown {
            submission: feedback.pk,
            total_points: feedback.total_points,
            total_points_possible: feedback.total_points_possible,
            overall,
            suites,
            mutation_suites,
        }
    }
}
