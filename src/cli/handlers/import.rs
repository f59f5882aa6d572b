//! Import command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::renderer_for;
use crate::cli::ImportArgs;
use crate::cli::config::Config;
use crate::console::StdioConsole;
use crate::import::parse_raindrop_csv;
use crate::store::write_bookmarks_to_dir;

pub fn handle_import(
    args: &ImportArgs,
    bookmarks_dir: &Path,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    let bookmarks = parse_raindrop_csv(&args.csv)
        .with_context(|| format!("failed to import {}", args.csv.display()))?;

    let renderer = renderer_for(config.template(args.template.as_ref()))?;

    let mut console = StdioConsole;
    let outcome = write_bookmarks_to_dir(&bookmarks, bookmarks_dir, &renderer, &mut console)
        .with_context(|| format!("failed to write notes to {}", bookmarks_dir.display()))?;

    if verbose {
        for path in &outcome.written {
            println!("wrote: {}", path.display());
        }
    }
    if outcome.failed > 0 {
        println!(
            "Imported {} bookmark(s), {} failed",
            outcome.written.len(),
            outcome.failed
        );
    } else {
        println!("Imported {} bookmark(s)", outcome.written.len());
    }
    Ok(())
}
