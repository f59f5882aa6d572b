//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::StderrReport;
use crate::cli::ListArgs;
use crate::cli::output::{BookmarkListing, Output, OutputFormat};
use crate::console::StdioConsole;
use crate::store::{load_bookmarks_from_dir, print_bookmarks_from_dir};

pub fn handle_list(args: &ListArgs, bookmarks_dir: &Path) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            let mut console = StdioConsole;
            print_bookmarks_from_dir(bookmarks_dir, &mut console)
                .with_context(|| format!("failed to list {}", bookmarks_dir.display()))?;
        }
        OutputFormat::Json => {
            let bookmarks = load_bookmarks_from_dir(bookmarks_dir, &mut StderrReport)
                .with_context(|| format!("failed to list {}", bookmarks_dir.display()))?;
            let listings: Vec<BookmarkListing> = bookmarks
                .iter()
                .map(|s| BookmarkListing {
                    title: s.bookmark.title.clone(),
                    url: s.bookmark.url.clone(),
                    path: s.path.to_string_lossy().to_string(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Paths => {
            let bookmarks = load_bookmarks_from_dir(bookmarks_dir, &mut StderrReport)
                .with_context(|| format!("failed to list {}", bookmarks_dir.display()))?;
            for stored in &bookmarks {
                println!("{}", stored.path.display());
            }
        }
    }
    Ok(())
}
