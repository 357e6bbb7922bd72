//! Pure formatting functions for UI output.
//!
//! Every function here builds a string; writing it anywhere is the caller's
//! job. Styling goes through `console`, which drops the escape codes when the
//! output is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::pipeline::{PipelineStep, RunLog};
use crate::version::VersionSuggestion;

/// Format an error message in red.
pub fn error_line(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a success message with a green checkmark.
pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn status_line(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format a boundary warning with a yellow warning sign.
pub fn warning_line(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Describe where the pre-filled version label came from.
pub fn suggestion_line(suggestion: &VersionSuggestion) -> String {
    match suggestion.source_tag() {
        Some(tag) => status_line(&format!(
            "Latest tag: {}  suggested: {}",
            style(tag).red(),
            style(suggestion.label()).green()
        )),
        None => status_line(&format!(
            "Suggested first version: {}",
            style(suggestion.label()).green()
        )),
    }
}

/// List the commands a publish run will execute, numbered in order.
pub fn plan_lines(steps: &[PipelineStep]) -> String {
    let mut out = format!("\n{}\n", style("Planned steps:").bold());
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<22} {}\n",
            i + 1,
            step.name,
            style(step.invocation.to_string()).cyan()
        ));
    }
    out
}

/// Report for a step failure.
///
/// Names the failing step and its error text, followed by the output of the
/// steps that did run.
pub fn failure_report(step: &str, output: &str, log: &RunLog) -> String {
    let mut out = error_line(&format!("Stap mislukt: {}\n\n{}", step, output));
    if !log.is_empty() {
        out.push_str(&format!(
            "\n\n{}{}",
            style("Completed before the failure:").bold(),
            log.render()
        ));
    }
    out
}

/// Report for a fully published version.
pub fn success_report(version: &str, log: &RunLog) -> String {
    format!(
        "{}\n{}",
        success_line(&format!("Versie {} opgeslagen en gepusht!", version)),
        log.render()
    )
}
