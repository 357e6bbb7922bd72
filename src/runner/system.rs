use log::debug;
use std::process::Command;

use super::{CommandRunner, Invocation, StepOutcome};

/// Runs invocations as real child processes and waits for them.
///
/// There is no timeout: a command waiting on the network blocks until it
/// finishes. Stdin is not forwarded, so a command that tries to read from it
/// sees end of input instead of hanging on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> StepOutcome {
        debug!("running `{}` in {}", invocation, invocation.cwd.display());

        let result = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .output();

        match result {
            Ok(output) if output.status.success() => {
                StepOutcome::ok(String::from_utf8_lossy(&output.stdout).trim())
            }
            Ok(output) => {
                debug!("`{}` exited with {}", invocation, output.status);
                StepOutcome::failed(String::from_utf8_lossy(&output.stderr).trim())
            }
            Err(e) => {
                debug!("`{}` could not be started: {}", invocation, e);
                StepOutcome::failed(format!(
                    "Failed to execute {} in {}: {}",
                    invocation.program,
                    invocation.cwd.display(),
                    e
                ))
            }
        }
    }
}
