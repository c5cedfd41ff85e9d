//! Interactive input surface.
//!
//! Prompt reads are the only blocking calls in the runtime. A `Prompt` is
//! total: cancel, end of input and terminal failures all come back as an
//! empty answer, which integer parsing then turns into NaN.

use std::collections::VecDeque;

/// Fixed text used by plain prompt reads ("enter a number").
pub const NUMBER_PROMPT: &str = "Syötä luku";

pub trait Prompt {
    /// Shows `message` and blocks until an answer is available.
    fn ask(&mut self, message: &str) -> String;
}

/// Replays queued answers in order; empty once they run out.
///
/// Used by tests and by embedders that feed input from somewhere other than
/// a terminal. Every message asked is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Queues one more answer.
    pub fn push_answer(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Messages shown so far, oldest first.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> String {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or_default()
    }
}
