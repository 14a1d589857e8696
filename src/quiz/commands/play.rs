use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::game::{self, GameOutcome, GameState};
use crate::session::{LineIo, Session};
use crate::store::{Persistence, QuizStore};
use rand::Rng;

pub async fn run<P: Persistence, I: LineIo, R: Rng>(
    store: &QuizStore<P>,
    session: &mut Session<I>,
    rng: &mut R,
) -> Result<CmdResult> {
    let mut state = GameState::new(store.get_all());
    let outcome = game::play(session, &mut state, rng).await?;

    let summary = match outcome {
        GameOutcome::Won { score } => CmdMessage::success(format!("Final score: {}", score)),
        GameOutcome::Lost { score } => {
            CmdMessage::warning(format!("Game over. Final score: {}", score))
        }
    };
    let mut result = CmdResult::default().with_message(summary);
    result.outcome = Some(outcome);
    Ok(result)
}
