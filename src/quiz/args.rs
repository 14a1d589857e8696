use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quiz", version)]
#[command(about = "Interactive command-line quiz", long_about = None)]
pub struct Cli {
    /// Use the user-wide quiz store instead of the one in the current directory
    #[arg(short, long)]
    pub global: bool,

    /// Path to the quiz store file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
