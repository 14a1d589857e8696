use clap::Parser;
use quiz::config::QuizPaths;
use quiz::error::Result;
use quiz::model::Scope;
use quiz::repl::run_session;
use quiz::session::terminal::TerminalIo;
use quiz::session::Session;
use quiz::store::fs::JsonFile;
use quiz::store::QuizStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "quiz=debug" } else { "quiz=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };
    let path = QuizPaths::discover().store_file(scope, cli.file.as_deref())?;
    tracing::debug!(path = %path.display(), ?scope, "opening store");

    let mut store = QuizStore::open(JsonFile::new(path))?;
    let mut session = Session::new(TerminalIo::spawn()?);
    let mut rng = StdRng::from_entropy();

    run_session(&mut store, &mut session, &mut rng).await
}
