use super::LineIo;
use crate::commands::{CmdMessage, MessageLevel};
use crate::error::{QuizError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;

type Responder = Box<dyn FnMut(&str) -> Option<String> + Send>;

/// A `LineIo` driven by a script instead of a terminal.
///
/// Replies come from a fixed queue or from a responder that sees each prompt. Everything
/// emitted is recorded for inspection.
pub struct ScriptedIo {
    replies: VecDeque<String>,
    responder: Option<Responder>,
    prompts: Vec<String>,
    prefills: Vec<Option<String>>,
    output: Vec<CmdMessage>,
    close_calls: usize,
}

impl ScriptedIo {
    pub fn new<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            responder: None,
            prompts: Vec::new(),
            prefills: Vec::new(),
            output: Vec::new(),
            close_calls: 0,
        }
    }

    /// Replies are computed from the prompt text. Returning `None` closes the input.
    pub fn with_responder(responder: impl FnMut(&str) -> Option<String> + Send + 'static) -> Self {
        let mut io = Self::new(Vec::<String>::new());
        io.responder = Some(Box::new(responder));
        io
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn prefills(&self) -> &[Option<String>] {
        &self.prefills
    }

    pub fn output(&self) -> &[CmdMessage] {
        &self.output
    }

    /// Emitted lines, without levels.
    pub fn lines(&self) -> Vec<&str> {
        self.output.iter().map(|m| m.content.as_str()).collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter(|m| matches!(m.level, MessageLevel::Error))
            .map(|m| m.content.as_str())
            .collect()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|m| m.content.contains(needle))
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls
    }
}

#[async_trait]
impl LineIo for ScriptedIo {
    fn emit(&mut self, message: &CmdMessage) {
        self.output.push(message.clone());
    }

    async fn read_line(&mut self, prompt: &str, initial: Option<&str>) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.prefills.push(initial.map(str::to_string));
        let reply = match self.responder.as_mut() {
            Some(responder) => responder(prompt),
            None => self.replies.pop_front(),
        };
        reply.ok_or(QuizError::InputClosed)
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}
