//! The terminal `LineIo`.
//!
//! Line editing is blocking, so it runs on a dedicated input thread. Each call to `read_line`
//! sends a [`PromptRequest`] carrying a oneshot sender; the thread answers it once the user
//! submits a line, which resolves the awaiting future. This is the only place that touches
//! the raw input channel.

use super::LineIo;
use crate::commands::{CmdMessage, MessageLevel};
use crate::error::{QuizError, Result};
use async_trait::async_trait;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;
use tokio::sync::oneshot;

struct PromptRequest {
    prompt: String,
    initial: Option<String>,
    reply: oneshot::Sender<Option<String>>,
}

pub struct TerminalIo {
    requests: Option<mpsc::Sender<PromptRequest>>,
}

impl TerminalIo {
    /// Starts the input thread. A line editor is used when stdin is a terminal; otherwise lines
    /// are read plainly, which keeps piped input working.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = mpsc::channel::<PromptRequest>();
        let interactive = std::io::stdin().is_terminal();

        thread::Builder::new()
            .name("quiz-input".to_string())
            .spawn(move || {
                if interactive {
                    match DefaultEditor::new() {
                        Ok(editor) => serve_editor(editor, rx),
                        Err(e) => {
                            tracing::warn!(error = %e, "line editor unavailable, reading plain lines");
                            serve_plain(rx)
                        }
                    }
                } else {
                    serve_plain(rx)
                }
            })
            .map_err(QuizError::Io)?;

        Ok(Self { requests: Some(tx) })
    }
}

fn serve_editor(mut editor: DefaultEditor, rx: mpsc::Receiver<PromptRequest>) {
    while let Ok(request) = rx.recv() {
        let initial = request.initial.as_deref().unwrap_or("");
        let line = match editor.readline_with_initial(&request.prompt, (initial, "")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted) => Some(String::new()),
            Err(ReadlineError::Eof) => None,
            Err(e) => {
                tracing::error!(error = %e, "failed to read line");
                None
            }
        };
        let closed = line.is_none();
        let _ = request.reply.send(line);
        if closed {
            break;
        }
    }
}

fn serve_plain(rx: mpsc::Receiver<PromptRequest>) {
    let stdin = std::io::stdin();
    while let Ok(request) = rx.recv() {
        print!("{}", request.prompt);
        let _ = std::io::stdout().flush();

        let mut buf = String::new();
        let line = match stdin.lock().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::error!(error = %e, "failed to read line");
                None
            }
        };
        let closed = line.is_none();
        let _ = request.reply.send(line);
        if closed {
            break;
        }
    }
}

#[async_trait]
impl LineIo for TerminalIo {
    fn emit(&mut self, message: &CmdMessage) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }

    async fn read_line(&mut self, prompt: &str, initial: Option<&str>) -> Result<String> {
        let (reply, answer) = oneshot::channel();
        let request = PromptRequest {
            prompt: prompt.red().to_string(),
            initial: initial.map(str::to_string),
            reply,
        };
        self.requests
            .as_ref()
            .ok_or(QuizError::InputClosed)?
            .send(request)
            .map_err(|_| QuizError::InputClosed)?;

        match answer.await {
            Ok(Some(line)) => Ok(line),
            Ok(None) | Err(_) => {
                self.requests = None;
                Err(QuizError::InputClosed)
            }
        }
    }

    fn close(&mut self) {
        // Dropping the sender lets the input thread finish once it is idle.
        self.requests = None;
    }
}
