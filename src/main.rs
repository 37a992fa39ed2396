//! Nag - conversational task tracker for the terminal

use anyhow::Result;
use clap::Parser;
use nag::chat;
use nag::cli::Cli;
use nag::task::Storage;

fn main() -> Result<()> {
    if std::env::var("NAG_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("nag=debug")
            .init();
    }

    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(Storage::default_path);
    let storage = Storage::new(path);

    chat::run(&storage)
}
