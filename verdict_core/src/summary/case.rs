use crate::{
    aggregate::{combine, dimension_correctness},
    correctness::CorrectnessLevel,
    feedback::CaseResultFeedback,
};

use super::command::{shows_output_info, shows_return_code_info};

pub fn return_code_correctness(case: &CaseResultFeedback) -> CorrectnessLevel {
    let commands = &case.command_results;
    dimension_correctness(
        commands.iter().map(|cmd| cmd.return_code_correct),
        commands.iter().any(shows_return_code_info),
    )
}

pub fn output_correctness(case: &CaseResultFeedback) -> CorrectnessLevel {
    let commands = &case.command_results;
    dimension_correctness(
        commands
            .iter()
            .flat_map(|cmd| vec![cmd.stdout_correct, cmd.stderr_correct]),
        commands.iter().any(shows_output_info),
    )
}

pub fn correctness(case: &CaseResultFeedback) -> CorrectnessLevel {
    combine(
        return_code_correctness(case),
        output_correctness(case),
        Some(&case.point_totals()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        correctness::CorrectnessLevel::*,
        feedback::CommandResultFeedback,
        points::Points,
    };

    fn make_case(signals: &[(Option<bool>, Option<bool>, Option<bool>)]) -> CaseResultFeedback {
        CaseResultFeedback {
            command_results: signals
                .iter()
                .enumerate()
                .map(|(i, &(rc, stdout, stderr))| CommandResultFeedback {
                    pk: i as u64,
                    return_code_correct: rc,
                    stdout_correct: stdout,
                    stderr_correct: stderr,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn check(
        case: &CaseResultFeedback,
        return_code: CorrectnessLevel,
        output: CorrectnessLevel,
        overall: CorrectnessLevel,
    ) {
        assert_eq!(return_code_correctness(case), return_code);
        assert_eq!(output_correctness(case), output);
        assert_eq!(correctness(case), overall);
    }

    #[test]
    fn no_commands() {
        check(&make_case(&[]), NotAvailable, NotAvailable, NotAvailable);
    }

    #[test]
    fn all_signals_hidden() {
        let case = make_case(&[(None, None, None), (None, None, None), (None, None, None)]);
        check(&case, NotAvailable, NotAvailable, NotAvailable);
    }

    #[test]
    fn hidden_signals_with_visible_output() {
        let mut case = make_case(&[(None, None, None), (None, None, None), (None, None, None)]);
        case.command_results[2].fdbk_settings.show_actual_stdout = true;
        check(&case, NotAvailable, InfoOnly, InfoOnly);
    }

    #[test]
    fn hidden_signals_with_visible_return_code() {
        let mut case = make_case(&[(None, None, None), (None, None, None), (None, None, None)]);
        case.command_results[1].actual_return_code = Some(2);
        check(&case, InfoOnly, NotAvailable, InfoOnly);

        case.command_results[0].fdbk_settings.show_actual_stderr = true;
        check(&case, InfoOnly, InfoOnly, InfoOnly);
    }

    #[test]
    fn return_code_timeout_is_info() {
        let mut case = make_case(&[(None, None, None), (None, None, None)]);
        case.command_results[1].timed_out = Some(false);
        assert_eq!(return_code_correctness(&case), NotAvailable);
        case.command_results[1].timed_out = Some(true);
        assert_eq!(return_code_correctness(&case), InfoOnly);
    }

    #[test]
    fn return_code_hidden() {
        let f = Some(false);
        let t = Some(true);
        check(&make_case(&[(None, f, f), (None, f, f), (None, f, f)]), NotAvailable, NoneCorrect, NoneCorrect);
        check(&make_case(&[(None, t, t), (None, f, f), (None, f, f)]), NotAvailable, SomeCorrect, SomeCorrect);
        check(&make_case(&[(None, t, t), (None, t, t), (None, t, t)]), NotAvailable, AllCorrect, AllCorrect);
    }

    #[test]
    fn return_code_info_only() {
        let f = Some(false);
        let t = Some(true);
        let with_info = |mut case: CaseResultFeedback| {
            case.command_results[0].fdbk_settings.show_actual_return_code = true;
            case
        };
        check(&with_info(make_case(&[(None, f, f), (None, f, f), (None, f, f)])), InfoOnly, NoneCorrect, NoneCorrect);
        check(&with_info(make_case(&[(None, f, t), (None, t, t), (None, None, f)])), InfoOnly, SomeCorrect, SomeCorrect);
        check(&with_info(make_case(&[(None, t, t), (None, None, t), (None, t, None)])), InfoOnly, AllCorrect, AllCorrect);
    }

    #[test]
    fn return_code_none_correct() {
        let f = Some(false);
        let t = Some(true);
        check(&make_case(&[(f, None, None), (f, None, None), (f, None, None)]), NoneCorrect, NotAvailable, NoneCorrect);
        check(&make_case(&[(f, f, None), (f, None, f), (f, f, f)]), NoneCorrect, NoneCorrect, NoneCorrect);
        check(&make_case(&[(f, f, None), (f, None, t), (f, f, f)]), NoneCorrect, SomeCorrect, SomeCorrect);
        check(&make_case(&[(f, t, t), (f, t, t), (f, t, t)]), NoneCorrect, AllCorrect, SomeCorrect);

        let mut case = make_case(&[(f, None, None), (f, None, None), (f, None, None)]);
        case.command_results[1].fdbk_settings.show_actual_stderr = true;
        check(&case, NoneCorrect, InfoOnly, NoneCorrect);
    }

    #[test]
    fn return_code_some_correct() {
        let f = Some(false);
        let t = Some(true);
        check(&make_case(&[(f, None, None), (t, None, None), (t, None, None)]), SomeCorrect, NotAvailable, SomeCorrect);
        check(&make_case(&[(f, f, f), (t, None, None), (t, None, f)]), SomeCorrect, NoneCorrect, SomeCorrect);
        check(&make_case(&[(f, None, None), (t, t, None), (t, None, f)]), SomeCorrect, SomeCorrect, SomeCorrect);
        check(&make_case(&[(f, t, None), (t, t, t), (t, None, t)]), SomeCorrect, AllCorrect, SomeCorrect);
    }

    #[test]
    fn return_code_all_correct() {
        let f = Some(false);
        let t = Some(true);
        check(&make_case(&[(t, None, None), (t, None, None), (t, None, None)]), AllCorrect, NotAvailable, AllCorrect);
        check(&make_case(&[(t, f, f), (t, f, f), (t, f, f)]), AllCorrect, NoneCorrect, SomeCorrect);
        check(&make_case(&[(t, t, f), (t, f, t), (t, t, t)]), AllCorrect, SomeCorrect, SomeCorrect);
        check(&make_case(&[(t, t, t), (t, t, t), (t, t, t)]), AllCorrect, AllCorrect, AllCorrect);

        let mut case = make_case(&[(t, None, None), (t, None, None), (t, None, None)]);
        case.command_results[2].fdbk_settings.show_actual_stdout = true;
        check(&case, AllCorrect, InfoOnly, AllCorrect);
    }

    #[test]
    fn return_code_ignores_hidden_commands() {
        let f = Some(false);
        let t = Some(true);
        assert_eq!(return_code_correctness(&make_case(&[(t, None, None), (None, None, None), (t, None, None)])), AllCorrect);
        assert_eq!(return_code_correctness(&make_case(&[(t, None, None), (f, None, None), (None, None, None)])), SomeCorrect);
        assert_eq!(return_code_correctness(&make_case(&[(f, None, None), (None, None, None), (f, None, None)])), NoneCorrect);
    }

    #[test]
    fn single_command_all_correct() {
        let mut case = make_case(&[(Some(true), None, None)]);
        case.command_results[0].actual_return_code = Some(0);
        case.command_results[0].total_points = Points(1.0);
        case.command_results[0].total_points_possible = Points(1.0);
        check(&case, AllCorrect, NotAvailable, AllCorrect);
    }

    #[test]
    fn zero_points_forces_none_correct() {
        let f = Some(false);
        let t = Some(true);
        let mut case = make_case(&[(f, t, t), (f, t, t), (t, t, t)]);
        case.total_points = Points(0.0);
        case.total_points_possible = Points(10.0);
        check(&case, SomeCorrect, AllCorrect, NoneCorrect);
    }
}
