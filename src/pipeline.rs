//! The publish pipeline
//!
//! Turns a [PublishRequest] into five git invocations and runs them in order:
//! stage everything, commit, tag, push, push tags. The first failing step
//! stops the run; nothing that already happened is undone.

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::GitConfig;
use crate::error::ValidationError;
use crate::runner::{CommandRunner, Invocation};

pub const STEP_ADD: &str = "Bestanden toevoegen";
pub const STEP_COMMIT: &str = "Commit maken";
pub const STEP_PUSH: &str = "Code pushen";
pub const STEP_PUSH_TAGS: &str = "Tags pushen";

/// Display name of the tag step, which includes the version label.
pub fn tag_step_name(version: &str) -> String {
    format!("Nieuwe tag {}", version)
}

/// The three form fields, read once when publishing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub repo_path: PathBuf,
    pub version: String,
    pub message: String,
}

impl PublishRequest {
    pub fn new(
        repo_path: impl Into<PathBuf>,
        version: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        PublishRequest {
            repo_path: repo_path.into(),
            version: version.into(),
            message: message.into(),
        }
    }

    /// Checks the fields in form order and trims the version and message.
    ///
    /// The repository path is only checked for emptiness; whether it exists
    /// is the runner's business.
    pub fn validate(&self) -> Result<PublishRequest, ValidationError> {
        if self.repo_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRepository);
        }

        let version = self.version.trim();
        if version.is_empty() {
            return Err(ValidationError::MissingVersion);
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        Ok(PublishRequest::new(self.repo_path.clone(), version, message))
    }
}

/// One named command of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    pub name: String,
    pub invocation: Invocation,
}

/// Output of one step that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub step: String,
    pub output: String,
}

/// Output of the succeeded steps, in execution order.
///
/// A failing step halts the run and is reported next to the log
/// ([PublishOutcome::StepFailed]), so it never becomes an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLog {
    entries: Vec<StepResult>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: &str, output: impl Into<String>) {
        self.entries.push(StepResult {
            step: step.to_string(),
            output: output.into(),
        });
    }

    pub fn entries(&self) -> &[StepResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined report: a `[step]` header followed by the step's output.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("\n[{}]\n{}\n", e.step, e.output))
            .collect()
    }
}

/// Result of a publish run that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// All five steps succeeded
    Published(RunLog),
    /// `step` failed with `output`; `log` holds the steps that succeeded before it
    StepFailed {
        step: String,
        output: String,
        log: RunLog,
    },
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PublishOutcome::Published(_))
    }

    pub fn log(&self) -> &RunLog {
        match self {
            PublishOutcome::Published(log) => log,
            PublishOutcome::StepFailed { log, .. } => log,
        }
    }
}

/// Builds the five steps for a request without running anything.
///
/// The request is used as given; call [PublishRequest::validate] first.
pub fn plan(request: &PublishRequest, git: &GitConfig) -> Vec<PipelineStep> {
    let repo: &Path = &request.repo_path;
    let step = |name: String, args: Vec<&str>| PipelineStep {
        name,
        invocation: Invocation::new(git.program.as_str(), args, repo),
    };

    vec![
        step(STEP_ADD.to_string(), vec!["add", "."]),
        step(
            STEP_COMMIT.to_string(),
            vec!["commit", "-m", request.message.as_str()],
        ),
        // "--" keeps a label starting with '-' from being read as an option
        step(
            tag_step_name(&request.version),
            vec!["tag", "--", request.version.as_str()],
        ),
        step(STEP_PUSH.to_string(), vec!["push"]),
        step(STEP_PUSH_TAGS.to_string(), vec!["push", "--tags"]),
    ]
}

/// Runs steps in order, stopping at the first failure.
pub fn execute<R: CommandRunner + ?Sized>(steps: &[PipelineStep], runner: &R) -> PublishOutcome {
    let mut log = RunLog::new();

    for step in steps {
        info!("step '{}': {}", step.name, step.invocation);
        let outcome = runner.run(&step.invocation);

        if !outcome.success {
            warn!("step '{}' failed: {}", step.name, outcome.output);
            return PublishOutcome::StepFailed {
                step: step.name.clone(),
                output: outcome.output,
                log,
            };
        }
        log.push(&step.name, outcome.output);
    }

    PublishOutcome::Published(log)
}

/// Validates the request and runs the full pipeline.
///
/// A validation error means no command was run at all.
pub fn publish<R: CommandRunner + ?Sized>(
    request: &PublishRequest,
    runner: &R,
    git: &GitConfig,
) -> Result<PublishOutcome, ValidationError> {
    let request = request.validate()?;
    Ok(execute(&plan(&request, git), runner))
}
