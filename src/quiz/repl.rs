//! # Session Loop
//!
//! Reads one command line at a time, dispatches it to its handler, and waits for the handler's
//! whole chain to finish before prompting again.
//!
//! Every handler ends the same way: on success its messages are emitted; on a non-fatal error
//! the error is reported on the error channel. Either way the loop prompts again. Storage errors
//! are fatal and end the session with an error.

use crate::commands::helpers::error_messages;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{QuizError, Result};
use crate::session::{LineIo, Session};
use crate::store::{Persistence, QuizStore};
use rand::Rng;
use std::str::FromStr;
use thiserror::Error;

pub const PROMPT: &str = "quiz > ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown command: '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let id = words.next().map(str::to_string);

        match verb.as_str() {
            "h" | "help" => Ok(Command::Help),
            "list" => Ok(Command::List),
            "show" => Ok(Command::Show(id)),
            "add" => Ok(Command::Add),
            "delete" => Ok(Command::Delete(id)),
            "edit" => Ok(Command::Edit(id)),
            "test" => Ok(Command::Test(id)),
            "p" | "play" => Ok(Command::Play),
            "credits" => Ok(Command::Credits),
            "q" | "quit" => Ok(Command::Quit),
            _ => Err(UnknownCommand(verb)),
        }
    }
}

pub async fn dispatch<P: Persistence, I: LineIo, R: Rng>(
    store: &mut QuizStore<P>,
    session: &mut Session<I>,
    rng: &mut R,
    command: Command,
) -> Result<CmdResult> {
    match command {
        Command::Help => Ok(commands::help::run()),
        Command::List => commands::list::run(store),
        Command::Show(id) => commands::show::run(store, id.as_deref()),
        Command::Add => commands::add::run(store, session).await,
        Command::Delete(id) => commands::delete::run(store, id.as_deref()),
        Command::Edit(id) => commands::edit::run(store, session, id.as_deref()).await,
        Command::Test(id) => commands::test::run(store, session, id.as_deref()).await,
        Command::Play => commands::play::run(store, session, rng).await,
        Command::Credits => Ok(commands::credits::run()),
        Command::Quit => {
            session.close();
            Ok(CmdResult::default().with_message(CmdMessage::info("Bye!")))
        }
    }
}

/// Runs one command and reports its result. Only fatal errors are returned.
pub async fn execute<P: Persistence, I: LineIo, R: Rng>(
    store: &mut QuizStore<P>,
    session: &mut Session<I>,
    rng: &mut R,
    command: Command,
) -> Result<()> {
    match dispatch(store, session, rng, command).await {
        Ok(result) => session.emit_all(&result.messages),
        Err(QuizError::InputClosed) => session.close(),
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            for line in error_messages(&e) {
                session.emit(CmdMessage::error(line));
            }
        }
    }
    Ok(())
}

/// Prompts for commands until `quit` or end of input.
pub async fn run_session<P: Persistence, I: LineIo, R: Rng>(
    store: &mut QuizStore<P>,
    session: &mut Session<I>,
    rng: &mut R,
) -> Result<()> {
    while !session.is_closed() {
        let line = match session.ask(PROMPT).await {
            Ok(line) => line,
            Err(QuizError::InputClosed) => {
                session.close();
                break;
            }
            Err(e) => return Err(e),
        };
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                session.emit(CmdMessage::error(e.to_string()));
                session.emit(CmdMessage::info("Use 'help' to see the available commands."));
                continue;
            }
        };
        tracing::debug!(?command, "dispatching");
        execute(store, session, rng, command).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_records;
    use crate::session::scripted::ScriptedIo;
    use crate::store::memory::MemoryPersistence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    async fn run_script(
        store: &mut QuizStore<MemoryPersistence>,
        lines: &[&str],
    ) -> (Result<()>, Session<ScriptedIo>) {
        let mut session = Session::new(ScriptedIo::new(lines.iter().copied()));
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_session(store, &mut session, &mut rng).await;
        (result, session)
    }

    #[test]
    fn parses_verbs_and_aliases() {
        assert_eq!("h".parse::<Command>(), Ok(Command::Help));
        assert_eq!("HELP".parse::<Command>(), Ok(Command::Help));
        assert_eq!("p".parse::<Command>(), Ok(Command::Play));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("show 3".parse::<Command>(), Ok(Command::Show(Some("3".into()))));
        assert_eq!("  edit   2abc ".parse::<Command>(), Ok(Command::Edit(Some("2abc".into()))));
        assert_eq!("delete".parse::<Command>(), Ok(Command::Delete(None)));
    }

    #[test]
    fn unknown_verb_is_rejected() {
        assert_eq!(
            "fly 3".parse::<Command>(),
            Err(UnknownCommand("fly".to_string()))
        );
    }

    #[tokio::test]
    async fn errors_are_reported_and_session_continues() {
        let mut store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let (result, session) =
            run_script(&mut store, &["show", "show abc", "show 9", "fly", "show 0", "quit"]).await;

        assert!(result.is_ok());
        let errors = session.io().errors();
        assert_eq!(errors[0], "Missing parameter <id>.");
        assert!(errors[1].contains("not a number"));
        assert_eq!(errors[2], "No quiz is associated with id=9.");
        assert_eq!(errors[3], "Unknown command: 'fly'");
        assert!(session.io().printed("[0]: Capital de Italia => Roma"));
        assert!(session.is_closed());
    }

    #[tokio::test]
    async fn test_command_reads_its_answer_from_the_session() {
        let mut store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let (_, session) = run_script(&mut store, &["test 0", "roma", "test 0", "Paris", "q"]).await;

        let verdicts: Vec<_> = session
            .io()
            .lines()
            .into_iter()
            .filter(|l| l.ends_with("CORRECT"))
            .collect();
        assert_eq!(verdicts, ["CORRECT", "INCORRECT"]);
    }

    #[tokio::test]
    async fn add_then_delete_round_trip() {
        let mut store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let (result, _) = run_script(
            &mut store,
            &["add", "Capital de Grecia", "Atenas", "delete 0", "quit"],
        )
        .await;

        assert!(result.is_ok());
        let all = store.get_all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], seed_records()[1]);
        assert_eq!(all[3].answer, "Atenas");
        assert_eq!(store.backend().snapshot().unwrap(), all);
    }

    #[tokio::test]
    async fn invalid_add_is_reported_per_field() {
        let mut store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let (_, session) = run_script(&mut store, &["add", "", "", "q"]).await;

        let errors = session.io().errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "The quiz is invalid:");
        assert_eq!(store.count(), 4);
    }

    #[tokio::test]
    async fn end_of_input_ends_the_session() {
        let mut store = QuizStore::open(MemoryPersistence::new()).unwrap();
        let (result, session) = run_script(&mut store, &["list", "", "add", "only a question"]).await;

        assert!(result.is_ok());
        assert!(session.is_closed());
        assert_eq!(store.count(), 4);
    }

    #[tokio::test]
    async fn write_failure_is_fatal() {
        let mut store = QuizStore::open(MemoryPersistence::new()).unwrap();
        store.backend().set_simulate_write_error(true);
        let (result, session) = run_script(&mut store, &["delete 0", "list", "q"]).await;

        assert!(matches!(result, Err(QuizError::Io(_))));
        assert!(!session.io().printed("Capital"));
    }
}
