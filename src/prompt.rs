//! Input source for the tutor.

use std::collections::VecDeque;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::TutorError;

/// Asks the user a question. `Ok(None)` means input has ended (EOF or Ctrl-C).
///
/// Answers are trimmed. An empty answer yields `default` when one is given.
pub trait Prompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<Option<String>, TutorError>;
}

fn resolve(answer: &str, default: Option<&str>) -> String {
    let answer = answer.trim();
    match default {
        Some(default) if answer.is_empty() => default.to_owned(),
        _ => answer.to_owned(),
    }
}

fn prompt_text(question: &str, default: Option<&str>) -> String {
    match default {
        Some(default) => format!("{question} ({default}): "),
        None => format!("{question}: "),
    }
}

/// Interactive prompter backed by a rustyline editor with in-memory history.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> Result<Self, TutorError> {
        let editor = DefaultEditor::new().map_err(|e| TutorError::Input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Prompter for LinePrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<Option<String>, TutorError> {
        match self.editor.readline(&prompt_text(question, default)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(|e| TutorError::Input(e.to_string()))?;
                }
                Ok(Some(resolve(&line, default)))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                tracing::debug!("input closed");
                Ok(None)
            }
            Err(err) => Err(TutorError::Input(err.to_string())),
        }
    }
}

/// Replays a fixed list of answers, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<Option<String>, TutorError> {
        self.asked.push(question.to_owned());
        Ok(self
            .answers
            .pop_front()
            .map(|answer| resolve(&answer, default)))
    }
}
