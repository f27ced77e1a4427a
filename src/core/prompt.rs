//! Line-oriented console used by every interactive prompt.
//!
//! Generic over its reader and writer so sessions can be scripted in tests.

use crate::errors::{AppError, AppResult};
use std::fmt;
use std::io::{self, BufRead, ErrorKind, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one trimmed line.
    ///
    /// End of input and interrupted reads mean the operator gave up:
    /// both return [`AppError::Cancelled`].
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(AppError::Cancelled),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::Interrupted => Err(AppError::Cancelled),
            Err(e) => Err(e.into()),
        }
    }

    /// Ask and fall back to `default` when the answer is empty.
    pub fn ask_or(&mut self, prompt: &str, default: &str) -> AppResult<String> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Yes/no question; `y` or `yes` (any case) count as yes.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    pub fn say<T: fmt::Display>(&mut self, text: T) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
