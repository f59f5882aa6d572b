//! Command handlers for the CLI.

mod edit;
mod import;
mod list;
mod remove;
mod search;

use std::path::Path;

use anyhow::{Context, Result};

use crate::console::Report;
use crate::render::Renderer;

// Re-export public items
pub use edit::handle_edit;
pub use import::handle_import;
pub use list::handle_list;
pub use remove::handle_remove;
pub use search::handle_search;

/// Builds the renderer for an optional template path.
pub(crate) fn renderer_for(template: Option<&Path>) -> Result<Renderer> {
    match template {
        Some(path) => Renderer::from_template_file(path)
            .with_context(|| format!("failed to load template {}", path.display())),
        None => Ok(Renderer::default_layout()),
    }
}

/// Report sink that goes to stderr. Used by machine-readable output
/// modes so warnings don't corrupt stdout.
pub(crate) struct StderrReport;

impl Report for StderrReport {
    fn line(&mut self, text: &str) {
        eprintln!("{text}");
    }
}
