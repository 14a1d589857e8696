//! The play loop.
//!
//! Each turn draws one of the remaining quizzes uniformly at random, asks it, and either ends
//! the game (wrong answer) or removes it and goes on. The draw happens per turn over whatever is
//! left, not as an up-front shuffle. Turns are driven by an explicit loop awaiting one prompt
//! at a time.

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::QuizRecord;
use crate::session::{LineIo, Session};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every quiz was answered correctly.
    Won { score: u32 },
    /// A wrong answer ended the game.
    Lost { score: u32 },
}

impl GameOutcome {
    pub fn score(&self) -> u32 {
        match self {
            GameOutcome::Won { score } | GameOutcome::Lost { score } => *score,
        }
    }
}

/// State of one play session. Discarded when the game ends.
#[derive(Debug, Clone)]
pub struct GameState {
    remaining: Vec<QuizRecord>,
    score: u32,
}

impl GameState {
    pub fn new(records: Vec<QuizRecord>) -> Self {
        Self {
            remaining: records,
            score: 0,
        }
    }

    pub fn remaining(&self) -> &[QuizRecord] {
        &self.remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.remaining.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.remaining.len()))
        }
    }

    fn answered(&mut self, index: usize) -> QuizRecord {
        self.score += 1;
        self.remaining.remove(index)
    }
}

pub async fn play<I: LineIo, R: Rng>(
    session: &mut Session<I>,
    state: &mut GameState,
    rng: &mut R,
) -> Result<GameOutcome> {
    loop {
        let Some(index) = state.draw(rng) else {
            session.emit(CmdMessage::info("Nothing left to ask. Game over."));
            return Ok(GameOutcome::Won { score: state.score });
        };
        tracing::trace!(remaining = state.remaining.len(), index, "turn");

        let prompt = format!("{}? ", state.remaining[index].question);
        let reply = session.ask(&prompt).await?;

        if !state.remaining[index].is_answered_by(&reply) {
            session.emit(CmdMessage::error("INCORRECT"));
            return Ok(GameOutcome::Lost { score: state.score });
        }

        state.answered(index);
        session.emit(CmdMessage::success(format!(
            "CORRECT - {} correct so far.",
            state.score
        )));
    }
}
