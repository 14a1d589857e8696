use crate::commands::{CmdMessage, CmdResult};

pub fn run() -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info("Authors:"))
        .with_message(CmdMessage::success(format!(
            "{} {} - the quizcli contributors.",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )))
}
