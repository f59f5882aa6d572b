//! Remove command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::console::StdioConsole;
use crate::store::remove_bookmark_interactive_dir;

pub fn handle_remove(bookmarks_dir: &Path) -> Result<()> {
    let mut console = StdioConsole;
    remove_bookmark_interactive_dir(bookmarks_dir, &mut console)
        .with_context(|| format!("failed to remove a bookmark from {}", bookmarks_dir.display()))
}
