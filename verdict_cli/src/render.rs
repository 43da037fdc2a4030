use verdict_core::report::Breakdown;

const MARK_OPEN: &str = "*";

/// Plain-text tree of a breakdown. Panels that start open are marked with `*`.
pub fn render_text(breakdown: &Breakdown) -> String {
    let mut lines = vec![format!(
        "submission {}: {} ({}/{})",
        breakdown.submission,
        breakdown.overall,
        breakdown.total_points,
        breakdown.total_points_possible
    )];

    for suite in breakdown.suites.iter() {
        lines.push(format!(
            "  suite {}: {} ({}/{})",
            suite.name, suite.overall, suite.total_points, suite.total_points_possible
        ));
        if suite.setup.is_expandable() {
            lines.push(format!(
                "    setup: {}{}",
                suite.setup,
                open_mark(suite.setup_open_initially)
            ));
        }
        for case in suite.cases.iter() {
            lines.push(format!(
                "    case {}: {}{} [return code {}, output {}]",
                case.name,
                case.overall,
                open_mark(case.open_initially),
                case.return_code,
                case.output
            ));
            lines.extend(case.commands.iter().map(|cmd| {
                format!(
                    "      command {}: {} [return code {}, stdout {}, stderr {}]",
                    cmd.name, cmd.overall, cmd.return_code, cmd.stdout, cmd.stderr
                )
            }));
        }
    }

    for suite in breakdown.mutation_suites.iter() {
        lines.push(format!("  mutation suite {}: {}", suite.name, suite.overall));
        if let Some(outcome) = suite.setup_outcome {
            lines.push(format!("    setup: {} ({})", suite.setup, outcome));
        }
        lines.push(format!("    validity: {}", suite.validity));
        lines.push(format!(
            "    bugs exposed: {}{}",
            suite.bugs_exposed,
            suite
                .num_bugs_exposed
                .map(|n| format!(" ({})", n))
                .unwrap_or_default()
        ));
        if !suite.valid_tests.is_empty() {
            lines.push(format!("    valid tests: {}", suite.valid_tests.join(", ")));
        }
        if !suite.timed_out_tests.is_empty() {
            lines.push(format!("    timed out: {}", suite.timed_out_tests.join(", ")));
        }
    }

    lines.join("\n")
}

fn open_mark(open: bool) -> &'static str {
    if open {
        MARK_OPEN
    } else {
        ""
    }
}
