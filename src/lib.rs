//! dropmark - Raindrop CSV exports as markdown bookmark notes

pub mod cli;
pub mod console;
pub mod domain;
pub mod import;
pub mod infra;
pub mod render;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_edit, handle_import, handle_list, handle_remove, handle_search},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let bookmarks_dir = config.bookmarks_dir(cli.dir.as_ref());

    match &cli.command {
        Command::Import(args) => handle_import(args, &bookmarks_dir, &config, cli.verbose > 0),
        Command::List(args) => handle_list(args, &bookmarks_dir),
        Command::Remove(_) => handle_remove(&bookmarks_dir),
        Command::Edit(args) => handle_edit(args, &bookmarks_dir, &config),
        Command::Search(args) => handle_search(args, &bookmarks_dir),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
