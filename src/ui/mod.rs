//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling
//!
//! Prompts read from any `BufRead` and write to any `Write`, so the form can
//! be driven by scripted input in tests. End of input counts as pressing
//! Enter.

use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::boundary::BoundaryWarning;

pub mod formatter;

/// Line-based terminal used by the publish form.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Terminal::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Consumes the terminal and returns its writer (useful in tests).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of (already formatted) text.
    pub fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut input = String::new();
        self.input.read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Prompts for a line of text, pre-filled with `default`.
    ///
    /// Pressing Enter keeps the default. Typing `-` clears the field.
    pub fn prompt_with_default(&mut self, label: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, default)?;
        }

        let answer = self.read_answer()?;
        Ok(match answer.as_str() {
            "" => default.to_string(),
            "-" => String::new(),
            _ => answer,
        })
    }

    /// Prompts for the project folder.
    ///
    /// Only an existing directory is accepted; anything else shows a warning
    /// and asks again. Pressing Enter keeps `current` (which may be `None`).
    pub fn prompt_folder(&mut self, current: Option<&Path>) -> Result<Option<PathBuf>> {
        loop {
            let default = current
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let answer = self.prompt_with_default("Projectmap", &default)?;

            if answer.is_empty() {
                return Ok(None);
            }
            if answer == default {
                return Ok(current.map(Path::to_path_buf));
            }

            let path = PathBuf::from(&answer);
            if path.is_dir() {
                return Ok(Some(path));
            }

            let warning = BoundaryWarning::FolderMissing { path: answer };
            self.show(&formatter::warning_line(&warning))?;
        }
    }

    /// Prompts user to confirm an action with a yes/no prompt.
    ///
    /// Accepts "y" or "yes" (case-insensitive); anything else, including
    /// Enter, means no.
    pub fn confirm_action(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "\n{} (y/N): ", prompt)?;
        let response = self.read_answer()?.to_lowercase();
        Ok(response == "y" || response == "yes")
    }
}
