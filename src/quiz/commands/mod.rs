//! # Command Layer
//!
//! One module per verb. Each handler composes the store, validation, and (for the interactive
//! verbs) the session, and returns a [`CmdResult`]: the messages to show plus whatever
//! structured data the verb produced.
//!
//! Handlers never print. The only output they produce mid-flow goes through the session
//! (the play loop announces each turn as it happens); everything else is returned and emitted by
//! the repl once the handler finishes.

use crate::game::GameOutcome;
use crate::model::QuizRecord;

pub mod add;
pub mod credits;
pub mod delete;
pub mod edit;
pub mod help;
pub mod helpers;
pub mod list;
pub mod play;
pub mod show;
pub mod test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of a single `test` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<QuizRecord>,
    pub listed: Vec<(usize, QuizRecord)>,
    pub verdict: Option<Verdict>,
    pub outcome: Option<GameOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, records: Vec<QuizRecord>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, listed: Vec<(usize, QuizRecord)>) -> Self {
        self.listed = listed;
        self
    }
}
