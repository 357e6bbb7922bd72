//! External command execution
//!
//! Every interaction with git goes through the [CommandRunner] trait. A
//! command is described by an [Invocation] (program, argument list, working
//! directory) and its result is always a [StepOutcome], never an error: a
//! non-zero exit, a missing executable and an inaccessible directory all end
//! up as a failed outcome carrying a text the user can read.
//!
//! - [system::SystemRunner]: spawns real processes with `std::process::Command`
//! - [mock::ScriptedRunner]: replays prepared outcomes and records invocations
//!
//! No shell is involved, so user supplied text (commit messages, tag names)
//! always reaches git as exactly one argument.

pub mod mock;
pub mod system;

pub use mock::ScriptedRunner;
pub use system::SystemRunner;

use std::fmt;
use std::path::{Path, PathBuf};

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }
}

/// Renders the invocation as a command line a user could paste into a shell.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,:/=+@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Result of running one command.
///
/// `output` holds trimmed stdout on success, trimmed stderr on a non-zero
/// exit, or a description of why the command could not be run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub success: bool,
    pub output: String,
}

impl StepOutcome {
    pub fn ok(output: impl Into<String>) -> Self {
        StepOutcome {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        StepOutcome {
            success: false,
            output: output.into(),
        }
    }
}

/// Executes external commands.
///
/// Implementations must not panic or return errors for failing commands;
/// every failure mode is reported through [StepOutcome::failed].
pub trait CommandRunner: Send + Sync {
    /// Run the invocation to completion and capture its outcome.
    fn run(&self, invocation: &Invocation) -> StepOutcome;
}
