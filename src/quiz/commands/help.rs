use crate::commands::{CmdMessage, CmdResult};

const COMMANDS: &[(&str, &str)] = &[
    ("h|help", "Show this help."),
    ("list", "List the existing quizzes."),
    ("show <id>", "Show the question and answer of a quiz."),
    ("add", "Add a new quiz interactively."),
    ("delete <id>", "Delete a quiz."),
    ("edit <id>", "Edit a quiz."),
    ("test <id>", "Try to answer a quiz."),
    ("p|play", "Play: answer every quiz, in random order."),
    ("credits", "Show the credits."),
    ("q|quit", "Quit the program."),
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::info("Commands:"));
    for (usage, about) in COMMANDS {
        result.add_message(CmdMessage::info(format!("  {:<12} {}", usage, about)));
    }
    result
}
