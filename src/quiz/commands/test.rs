use crate::commands::helpers::fetch;
use crate::commands::{CmdMessage, CmdResult, Verdict};
use crate::error::Result;
use crate::session::{LineIo, Session};
use crate::store::{Persistence, QuizStore};

pub async fn run<P: Persistence, I: LineIo>(
    store: &QuizStore<P>,
    session: &mut Session<I>,
    id: Option<&str>,
) -> Result<CmdResult> {
    let (index, record) = fetch(store, id)?;
    session.emit(CmdMessage::info(format!("[{}]: {}", index, record.question)));

    let reply = session.ask(" Enter the answer: ").await?;
    let mut result = CmdResult::default();
    if record.is_answered_by(&reply) {
        result.verdict = Some(Verdict::Correct);
        result.add_message(CmdMessage::success("CORRECT"));
    } else {
        result.verdict = Some(Verdict::Incorrect);
        result.add_message(CmdMessage::error("INCORRECT"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::session::scripted::ScriptedIo;
    use crate::store::memory::MemoryPersistence;

    #[tokio::test]
    async fn matching_ignores_case() {
        let store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let mut session = Session::new(ScriptedIo::new(["roma"]));

        let result = run(&store, &mut session, Some("0")).await.unwrap();

        assert_eq!(result.verdict, Some(Verdict::Correct));
        assert_eq!(result.messages[0].content, "CORRECT");
        assert!(session.io().printed("Capital de Italia"));
    }

    #[tokio::test]
    async fn wrong_answer_is_incorrect() {
        let store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let mut session = Session::new(ScriptedIo::new(["Paris"]));

        let result = run(&store, &mut session, Some("0")).await.unwrap();

        assert_eq!(result.verdict, Some(Verdict::Incorrect));
        assert_eq!(result.messages[0].content, "INCORRECT");
    }

    #[tokio::test]
    async fn unknown_id_does_not_prompt() {
        let store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let mut session = Session::new(ScriptedIo::new(["Roma"]));

        let err = run(&store, &mut session, Some("5")).await.unwrap_err();

        assert!(matches!(err, QuizError::NotFound(5)));
        assert!(session.io().prompts().is_empty());
    }
}
