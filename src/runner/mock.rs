use std::collections::VecDeque;
use std::sync::Mutex;

use super::{CommandRunner, Invocation, StepOutcome};

/// Runner for testing without spawning processes
///
/// Hands out prepared outcomes in order and records every invocation it
/// receives. Once the script is exhausted every further call succeeds with
/// empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outcomes: Mutex<VecDeque<StepOutcome>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    /// Create a runner where every command succeeds silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that replays the given outcomes in order
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = StepOutcome>) -> Self {
        ScriptedRunner {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue one more outcome
    pub fn push_outcome(&self, outcome: StepOutcome) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(outcome);
    }

    /// Every invocation seen so far, in call order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> StepOutcome {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(invocation.clone());

        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| StepOutcome::ok(""))
    }
}
