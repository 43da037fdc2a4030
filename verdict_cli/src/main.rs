mod render;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use verdict_core::{
    correctness::ALL_LEVELS,
    error::Result,
    feedback::CommandResultFeedback,
    report::SubmissionReport,
    summary::command,
    Points,
};

#[derive(Parser)]
#[command(
    version,
    name = "verdict",
    author = "Kanari",
    about = "Summarize autograder submission results into correctness levels."
)]
struct Opts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Show the correctness of every panel of a submission result document
    Show(ShowConfig),
    /// Evaluate a single command result given on the command line
    Case(CaseConfig),
    /// List the correctness levels and their css class names
    Levels,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
struct ShowConfig {
    /// path of a submission result document (.json, .yaml or .yml)
    file: String,
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug)]
struct Signal(Option<bool>);

fn parse_signal(s: &str) -> std::result::Result<Signal, String> {
    match s {
        "true" | "pass" => Ok(Signal(Some(true))),
        "false" | "fail" => Ok(Signal(Some(false))),
        "null" | "none" | "hidden" => Ok(Signal(None)),
        _ => Err(format!("`{}` is not one of true, false, null", s)),
    }
}

#[derive(Parser, Debug)]
struct CaseConfig {
    #[arg(long, value_parser = parse_signal, default_value = "null")]
    return_code: Signal,
    #[arg(long, value_parser = parse_signal, default_value = "null")]
    stdout: Signal,
    #[arg(long, value_parser = parse_signal, default_value = "null")]
    stderr: Signal,
    /// the actual return code is shown even if its correctness is hidden
    #[arg(long)]
    show_return_code: bool,
    /// the actual output is shown even if its correctness is hidden
    #[arg(long)]
    show_output: bool,
    #[arg(long, default_value = "0")]
    total_points: Points,
    #[arg(long, default_value = "0")]
    total_points_possible: Points,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    if let Err(e) = run(opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<()> {
    match opts.subcmd {
        SubCommand::Show(config) => {
            let report = SubmissionReport::from_file(&config.file)?;
            let breakdown = report.breakdown();
            info!("submission {} is {}", breakdown.submission, breakdown.overall);

            let out = match config.format {
                OutputFormat::Text => render::render_text(&breakdown),
                OutputFormat::Json => serde_json::to_string_pretty(&breakdown)?,
                OutputFormat::Yaml => serde_yaml::to_string(&breakdown)?,
            };
            println!("{}", out);
        }
        SubCommand::Case(config) => {
            let cmd = command_from_flags(&config);
            println!("return code: {}", command::return_code_correctness(&cmd));
            println!("stdout:      {}", command::stream_correctness(cmd.stdout_correct));
            println!("stderr:      {}", command::stream_correctness(cmd.stderr_correct));
            println!("output:      {}", command::output_correctness(&cmd));
            println!("overall:     {}", command::correctness(&cmd));
        }
        SubCommand::Levels => {
            for (rank, level) in ALL_LEVELS.iter().enumerate() {
                println!("{} {:<14} expandable={}", rank, level, level.is_expandable());
            }
        }
    }

    Ok(())
}

fn command_from_flags(config: &CaseConfig) -> CommandResultFeedback {
    let mut cmd = CommandResultFeedback {
        name: "command".into(),
        return_code_correct: config.return_code.0,
        stdout_correct: config.stdout.0,
        stderr_correct: config.stderr.0,
        total_points: config.total_points,
        total_points_possible: config.total_points_possible,
        ..Default::default()
    };
    cmd.fdbk_settings.show_actual_return_code = config.show_return_code;
    cmd.fdbk_settings.show_actual_stdout = config.show_output;
    cmd
}
