use crate::commands::helpers::resolve_index;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Persistence, QuizStore};

pub fn run<P: Persistence>(store: &mut QuizStore<P>, id: Option<&str>) -> Result<CmdResult> {
    let index = resolve_index(id)?;
    let removed = store.delete_by_index(index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted quiz {}: {}",
            index, removed.question
        )))
        .with_affected(vec![removed]))
}
