/// Yes/no decision asked for before a destructive change.
///
/// The manager never decides on its own whether to overwrite or delete; the
/// caller passes either a fixed answer (`bool`) or something that asks the
/// user, such as the terminal prompt in the shell.
pub trait Confirmation {
    fn confirm(&mut self, question: &str) -> bool;
}

impl Confirmation for bool {
    fn confirm(&mut self, _question: &str) -> bool {
        *self
    }
}

/// Records every question it was asked, then answers with a fixed value.
#[derive(Debug, Default)]
pub struct RecordingConfirmation {
    pub answer: bool,
    pub asked: Vec<String>,
}

impl RecordingConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl Confirmation for RecordingConfirmation {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answer
    }
}
