//! Rules that reduce tri-state signals and per-dimension levels to a single
//! [`CorrectnessLevel`].
//!
//! A signal is an `Option<bool>`: `Some(true)` passed, `Some(false)` failed,
//! `None` was not run or is hidden by the feedback settings.

use log::trace;

use crate::{correctness::CorrectnessLevel, points::PointTotals};

/// Reduces every signal of one dimension (say, the return code of each
/// command in a case).
///
/// `show_info` marks a dimension whose signals are all hidden but which still
/// has something to display, such as an actual return code.
pub fn dimension_correctness<I>(signals: I, show_info: bool) -> CorrectnessLevel
where
    I: IntoIterator<Item = Option<bool>>,
{
    let mut any_correct = false;
    let mut any_incorrect = false;
    for signal in signals.into_iter().flatten() {
        if signal {
            any_correct = true;
        } else {
            any_incorrect = true;
        }
    }

    match (any_correct, any_incorrect) {
        (true, false) => CorrectnessLevel::AllCorrect,
        (false, true) => CorrectnessLevel::NoneCorrect,
        (true, true) => CorrectnessLevel::SomeCorrect,
        (false, false) if show_info => CorrectnessLevel::InfoOnly,
        (false, false) => CorrectnessLevel::NotAvailable,
    }
}

/// A single stdout or stderr check.
pub fn signal_correctness(signal: Option<bool>) -> CorrectnessLevel {
    dimension_correctness(std::iter::once(signal), false)
}

/// Pairwise merge of two dimension levels, ignoring points.
///
/// Uninformative levels never outweigh an informative one, and any
/// disagreement between informative levels is `SomeCorrect`. In particular
/// `NoneCorrect` merged with `AllCorrect` is `SomeCorrect` in either order.
pub fn merge(first: CorrectnessLevel, second: CorrectnessLevel) -> CorrectnessLevel {
    match (first.is_uninformative(), second.is_uninformative()) {
        (true, true) => first.max(second),
        (true, false) => second,
        (false, true) => first,
        (false, false) if first == second => first,
        (false, false) => CorrectnessLevel::SomeCorrect,
    }
}

/// Applies the points override to an already merged level.
pub fn with_points(level: CorrectnessLevel, points: Option<&PointTotals>) -> CorrectnessLevel {
    if level.is_uninformative() {
        return level;
    }
    match points {
        Some(points) if points.forces_none_correct() => {
            trace!("points {:?} force none-correct over {}", points, level);
            CorrectnessLevel::NoneCorrect
        }
        _ => level,
    }
}

/// Two-dimension combiner, e.g. return code correctness and output
/// correctness of a test case.
pub fn combine(
    first: CorrectnessLevel,
    second: CorrectnessLevel,
    points: Option<&PointTotals>,
) -> CorrectnessLevel {
    with_points(merge(first, second), points)
}

/// Left-to-right fold of [`merge`] over any number of levels, with the points
/// override applied once at the end. An empty input is `NotAvailable`.
pub fn combine_all<I>(levels: I, points: Option<&PointTotals>) -> CorrectnessLevel
where
    I: IntoIterator<Item = CorrectnessLevel>,
{
    let folded = levels
        .into_iter()
        .fold(CorrectnessLevel::NotAvailable, merge);
    with_points(folded, points)
}
