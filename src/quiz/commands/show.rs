use crate::commands::helpers::{describe, fetch};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Persistence, QuizStore};

pub fn run<P: Persistence>(store: &QuizStore<P>, id: Option<&str>) -> Result<CmdResult> {
    let (index, record) = fetch(store, id)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(describe(index, &record)))
        .with_listed(vec![(index, record)]))
}
