use anyhow::Result;
use ci_scripts::{
    arguments::LintArguments,
    headers::{LintMode, SUCCESS_MESSAGE, SourceLanguage, go_source::GoSource},
};
use clap::Parser;
use log::{LevelFilter, debug};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = LintArguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let report = GoSource::lint(&args.path, args.lint_mode())?;
    debug!(
        "Scanned {} file(s), {} without header",
        report.scanned,
        report.violations.len()
    );

    if report.is_failure() {
        for line in report.violation_lines() {
            println!("{line}");
        }
        return Ok(ExitCode::FAILURE);
    }

    if report.mode == LintMode::Check {
        println!("{SUCCESS_MESSAGE}");
    }
    Ok(ExitCode::SUCCESS)
}
