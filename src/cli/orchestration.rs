//! Main workflow orchestration logic
//!
//! Drives the publish form: choose a folder, pre-fill the version from the
//! latest tag, ask for a message, show the plan, run the pipeline and report.
//! The form owns the only mutable state ([FormState]); publishing reads it
//! once into an immutable [PublishRequest].

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::ValidationError;
use crate::pipeline::{self, PublishOutcome, PublishRequest};
use crate::runner::CommandRunner;
use crate::ui::{formatter, Terminal};
use crate::version::{self, VersionSuggestion};

/// Arguments for the publish form
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormArgs {
    /// Project folder to start with
    pub repo: Option<PathBuf>,

    /// Version label overriding the suggestion
    pub tag: Option<String>,

    /// Commit message to start with
    pub message: Option<String>,

    /// Run without prompts
    pub assume_yes: bool,

    /// Show the planned commands instead of running them
    pub dry_run: bool,
}

/// How the form ended
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    /// Every step succeeded
    Published { version: String },
    /// The plan was shown, nothing was run
    DryRun,
    /// The user declined to publish or to retry
    Cancelled,
    /// The input was rejected before any command ran
    Invalid(ValidationError),
    /// A pipeline step failed
    Failed { step: String },
}

impl FormResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, FormResult::Invalid(_) | FormResult::Failed { .. })
    }
}

/// Mutable form fields, kept between retries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub repo_path: Option<PathBuf>,
    pub version: String,
    pub message: String,
}

impl FormState {
    pub fn from_args(args: &FormArgs) -> Self {
        FormState {
            repo_path: args.repo.clone(),
            version: args.tag.clone().unwrap_or_default(),
            message: args.message.clone().unwrap_or_default(),
        }
    }

    /// Snapshot of the fields for one publish attempt.
    pub fn to_request(&self) -> PublishRequest {
        PublishRequest::new(
            self.repo_path.clone().unwrap_or_default(),
            self.version.as_str(),
            self.message.as_str(),
        )
    }
}

fn show_suggestion<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    suggestion: &VersionSuggestion,
) -> Result<()> {
    term.show(&formatter::suggestion_line(suggestion))?;
    if let Some(warning) = BoundaryWarning::for_suggestion(suggestion) {
        term.show(&formatter::warning_line(&warning))?;
    }
    Ok(())
}

/// Validates, shows the plan and, unless this is a dry run, publishes.
///
/// `confirm` is asked after the plan is shown; returning `false` cancels.
fn publish_state<R, W, C, F>(
    state: &FormState,
    dry_run: bool,
    config: &Config,
    runner: &C,
    term: &mut Terminal<R, W>,
    confirm: F,
) -> Result<FormResult>
where
    R: BufRead,
    W: Write,
    C: CommandRunner + ?Sized,
    F: FnOnce(&mut Terminal<R, W>) -> Result<bool>,
{
    let request = match state.to_request().validate() {
        Ok(request) => request,
        Err(e) => {
            term.show(&formatter::error_line(&e.to_string()))?;
            return Ok(FormResult::Invalid(e));
        }
    };

    let steps = pipeline::plan(&request, &config.git);
    term.show(&formatter::plan_lines(&steps))?;

    if dry_run {
        term.show(&formatter::status_line("Dry run: no commands were executed"))?;
        return Ok(FormResult::DryRun);
    }

    if !confirm(term)? {
        return Ok(FormResult::Cancelled);
    }

    term.show(&formatter::status_line(&format!(
        "Publishing {} in {}",
        request.version,
        request.repo_path.display()
    )))?;

    match pipeline::execute(&steps, runner) {
        PublishOutcome::Published(log) => {
            term.show(&formatter::success_report(&request.version, &log))?;
            Ok(FormResult::Published {
                version: request.version,
            })
        }
        PublishOutcome::StepFailed { step, output, log } => {
            term.show(&formatter::failure_report(&step, &output, &log))?;
            Ok(FormResult::Failed { step })
        }
    }
}

/// Runs the interactive form until the user publishes or gives up.
///
/// After a validation error or a failed step the fields are kept and the
/// user is offered another attempt.
pub fn run_form<R, W, C>(
    args: &FormArgs,
    config: &Config,
    runner: &C,
    term: &mut Terminal<R, W>,
) -> Result<FormResult>
where
    R: BufRead,
    W: Write,
    C: CommandRunner + ?Sized,
{
    let mut state = FormState::from_args(args);
    let mut suggested_for: Option<PathBuf> = None;
    // An explicit --tag wins over the first suggestion only
    let mut keep_version = args.tag.is_some();

    loop {
        state.repo_path = term.prompt_folder(state.repo_path.as_deref())?;

        match state.repo_path.clone() {
            Some(repo) if suggested_for.as_ref() != Some(&repo) => {
                let suggestion = version::suggest(&repo, runner, config);
                debug!("suggestion for {}: {:?}", repo.display(), suggestion);
                show_suggestion(term, &suggestion)?;
                if !keep_version {
                    state.version = suggestion.label().to_string();
                }
                suggested_for = Some(repo);
            }
            Some(_) => {}
            // choosing the same folder again must refresh the suggestion
            None => suggested_for = None,
        }
        keep_version = false;

        state.version = term.prompt_with_default("Versie/tag", &state.version)?;
        state.message = term.prompt_with_default("Commit-message", &state.message)?;

        let result = publish_state(&state, args.dry_run, config, runner, term, |t| {
            t.confirm_action("Versie opslaan en pushen?")
        })?;

        match result {
            FormResult::Invalid(_) | FormResult::Failed { .. } => {
                if !term.confirm_action("Opnieuw proberen?")? {
                    return Ok(result);
                }
            }
            other => return Ok(other),
        }
    }
}

/// Publishes straight from the arguments, without any prompt.
///
/// The version falls back to the suggestion when no tag was given.
pub fn run_unattended<R, W, C>(
    args: &FormArgs,
    config: &Config,
    runner: &C,
    term: &mut Terminal<R, W>,
) -> Result<FormResult>
where
    R: BufRead,
    W: Write,
    C: CommandRunner + ?Sized,
{
    let mut state = FormState::from_args(args);

    if args.tag.is_none() {
        if let Some(repo) = state.repo_path.as_deref() {
            let suggestion = version::suggest(repo, runner, config);
            show_suggestion(term, &suggestion)?;
            state.version = suggestion.label().to_string();
        }
    }

    publish_state(&state, args.dry_run, config, runner, term, |_| Ok(true))
}

/// Prints the suggested label for `repo` and returns it.
pub fn print_suggestion<R, W, C>(
    repo: &Path,
    config: &Config,
    runner: &C,
    term: &mut Terminal<R, W>,
) -> Result<VersionSuggestion>
where
    R: BufRead,
    W: Write,
    C: CommandRunner + ?Sized,
{
    let suggestion = version::suggest(repo, runner, config);
    term.show(suggestion.label())?;
    Ok(suggestion)
}
