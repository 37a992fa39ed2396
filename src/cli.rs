//! Command-line definition

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nag", about = "Conversational task tracker for the terminal")]
pub struct Cli {
    /// Tasks file to load and save (defaults to the platform data directory)
    #[arg(long, env = "NAG_FILE")]
    pub file: Option<PathBuf>,
}
