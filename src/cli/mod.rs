//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// dropmark - Raindrop CSV exports as markdown bookmark notes
#[derive(Parser, Debug)]
#[command(name = "dropmark", version, about, long_about = None)]
pub struct Cli {
    /// Bookmarks directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Verbose output (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a Raindrop CSV export as one note per bookmark
    Import(ImportArgs),

    /// List bookmark notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Interactively remove a bookmark note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Interactively edit a bookmark note field by field
    Edit(EditArgs),

    /// Fuzzy-search bookmarks by title, tags, or url
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Path to the Raindrop CSV export
    pub csv: PathBuf,

    /// Custom note template file (default: built-in layout)
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` (remove) command
#[derive(Parser, Debug)]
pub struct RemoveArgs {}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Custom note template file used when re-rendering
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
