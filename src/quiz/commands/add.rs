use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::QuizRecord;
use crate::session::{LineIo, Session};
use crate::store::{Persistence, QuizStore};
use crate::validation::validate_record;

pub async fn run<P: Persistence, I: LineIo>(
    store: &mut QuizStore<P>,
    session: &mut Session<I>,
) -> Result<CmdResult> {
    let question = session.ask(" Enter a question: ").await?;
    let answer = session.ask(" Enter the answer: ").await?;
    validate_record(&question, &answer)?;

    store.add(&question, &answer)?;
    let record = QuizRecord::new(&question, &answer);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added: {} => {}",
            record.question, record.answer
        )))
        .with_affected(vec![record]))
}
