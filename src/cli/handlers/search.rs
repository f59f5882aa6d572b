//! Search command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::StderrReport;
use crate::cli::SearchArgs;
use crate::cli::output::{BookmarkListing, Output, OutputFormat};
use crate::console::StdioConsole;
use crate::store::fuzzy_search_bookmarks_dir;

pub fn handle_search(args: &SearchArgs, bookmarks_dir: &Path) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            let mut console = StdioConsole;
            fuzzy_search_bookmarks_dir(bookmarks_dir, &args.query, &mut console)
                .with_context(|| format!("search failed for query: {}", args.query))?;
        }
        OutputFormat::Json => {
            let matches = fuzzy_search_bookmarks_dir(bookmarks_dir, &args.query, &mut StderrReport)
                .with_context(|| format!("search failed for query: {}", args.query))?;
            let listings: Vec<BookmarkListing> = matches
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
            let matches = fuzzy_search_bookmarks_dir(bookmarks_dir, &args.query, &mut StderrReport)
                .with_context(|| format!("search failed for query: {}", args.query))?;
            for stored in &matches {
                println!("{}", stored.path.display());
            }
        }
    }
    Ok(())
}
