use crate::commands::helpers::fetch;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{LineIo, Session};
use crate::store::{Persistence, QuizStore};
use crate::validation::validate_record;

/// Re-asks both fields of a quiz, each prompt pre-filled with the current text.
pub async fn run<P: Persistence, I: LineIo>(
    store: &mut QuizStore<P>,
    session: &mut Session<I>,
    id: Option<&str>,
) -> Result<CmdResult> {
    let (index, current) = fetch(store, id)?;

    let question = session
        .ask_prefilled(" Enter the question: ", &current.question)
        .await?;
    let answer = session
        .ask_prefilled(" Enter the answer: ", &current.answer)
        .await?;
    validate_record(&question, &answer)?;

    store.update(index, &question, &answer)?;
    let updated = store.get_by_index(index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Quiz {} changed to: {} => {}",
            index, updated.question, updated.answer
        )))
        .with_affected(vec![updated]))
}
