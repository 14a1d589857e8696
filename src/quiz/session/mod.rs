//! # Session Layer
//!
//! Turns a line-based input channel into awaitable prompts.
//!
//! [`LineIo`] is the whole of what the core needs from a terminal: emit a message, read one line
//! given a prompt, and close. [`Session`] wraps one and is what commands and the game loop talk
//! to. Exactly one prompt is outstanding at a time; every `ask` is awaited before the next one
//! is issued, and nothing times out.

use crate::commands::CmdMessage;
use crate::error::Result;
use async_trait::async_trait;

pub mod scripted;
pub mod terminal;

/// A line-based interactive channel.
#[async_trait]
pub trait LineIo: Send {
    /// Show one message to the user.
    fn emit(&mut self, message: &CmdMessage);

    /// Request one line of input. `initial` pre-loads the editable line where supported.
    /// Resolves to `QuizError::InputClosed` once no more input can arrive.
    async fn read_line(&mut self, prompt: &str, initial: Option<&str>) -> Result<String>;

    /// End the interactive session.
    fn close(&mut self);
}

pub struct Session<I: LineIo> {
    io: I,
    closed: bool,
}

impl<I: LineIo> Session<I> {
    pub fn new(io: I) -> Self {
        Self { io, closed: false }
    }

    /// Ask a question and wait for the trimmed reply.
    pub async fn ask(&mut self, prompt: &str) -> Result<String> {
        let line = self.io.read_line(prompt, None).await?;
        Ok(line.trim().to_string())
    }

    /// Like [`Session::ask`], with the editable line pre-filled with `initial`.
    pub async fn ask_prefilled(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let line = self.io.read_line(prompt, Some(initial)).await?;
        Ok(line.trim().to_string())
    }

    pub fn emit(&mut self, message: CmdMessage) {
        self.io.emit(&message);
    }

    pub fn emit_all(&mut self, messages: &[CmdMessage]) {
        for message in messages {
            self.io.emit(message);
        }
    }

    pub fn close(&mut self) {
        if !self.closed {
            self.io.close();
            self.closed = true;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn into_inner(self) -> I {
        self.io
    }
}
