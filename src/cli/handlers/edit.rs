//! Edit command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::renderer_for;
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::console::StdioConsole;
use crate::store::edit_bookmark_interactive_dir;

pub fn handle_edit(args: &EditArgs, bookmarks_dir: &Path, config: &Config) -> Result<()> {
    let renderer = renderer_for(config.template(args.template.as_ref()))?;
    let mut console = StdioConsole;
    edit_bookmark_interactive_dir(bookmarks_dir, &renderer, &mut console)
        .with_context(|| format!("failed to edit a bookmark in {}", bookmarks_dir.display()))
}
