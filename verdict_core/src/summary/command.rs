use crate::{
    aggregate::{combine, dimension_correctness, signal_correctness},
    correctness::CorrectnessLevel,
    feedback::CommandResultFeedback,
};

/// Whether something about the return code is worth showing even when its
/// correctness is hidden.
pub(crate) fn shows_return_code_info(cmd: &CommandResultFeedback) -> bool {
    cmd.fdbk_settings.show_actual_return_code
        || cmd.actual_return_code.is_some()
        || cmd.timed_out == Some(true)
}

pub(crate) fn shows_output_info(cmd: &CommandResultFeedback) -> bool {
    cmd.fdbk_settings.show_actual_stdout || cmd.fdbk_settings.show_actual_stderr
}

pub fn return_code_correctness(cmd: &CommandResultFeedback) -> CorrectnessLevel {
    dimension_correctness(
        std::iter::once(cmd.return_code_correct),
        shows_return_code_info(cmd),
    )
}

/// Correctness of stdout alone or stderr alone.
pub fn stream_correctness(signal: Option<bool>) -> CorrectnessLevel {
    signal_correctness(signal)
}

pub fn output_correctness(cmd: &CommandResultFeedback) -> CorrectnessLevel {
    dimension_correctness(
        vec![cmd.stdout_correct, cmd.stderr_correct],
        shows_output_info(cmd),
    )
}

pub fn correctness(cmd: &CommandResultFeedback) -> CorrectnessLevel {
    combine(
        return_code_correctness(cmd),
        output_correctness(cmd),
        Some(&cmd.point_totals()),
    )
}
