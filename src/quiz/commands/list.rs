use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Persistence, QuizStore};

pub fn run<P: Persistence>(store: &QuizStore<P>) -> Result<CmdResult> {
    let listed: Vec<_> = store.get_all().into_iter().enumerate().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("There are no quizzes."));
    }
    for (index, record) in &listed {
        result.add_message(CmdMessage::info(format!("[{}]: {}", index, record.question)));
    }
    Ok(result.with_listed(listed))
}
