pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;

use crate::domain::{Confirmation, Contact, Notice, NoticeKind};
use crate::errors::AppError;
use std::io::{BufRead, Write};
use tracing::warn;

/// Line-based terminal over any reader/writer pair, so the shell can be
/// driven from stdin or from a buffer in tests.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` means end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}\n> ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn show_notice(&mut self, notice: &Notice) -> Result<(), AppError> {
        match notice.kind {
            NoticeKind::Success => self.say(&notice.message),
            NoticeKind::Error => self.say(&format!("! {}", notice.message)),
        }
    }
}

impl<R: BufRead, W: Write> Confirmation for Terminal<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        match self.ask(&format!("{} (y/n)", question)) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "could not read confirmation, treating as no");
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn display_contact(contact: &Contact) -> String {
    format!("{:<25} {}", contact.name, contact.number)
}
