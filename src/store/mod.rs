//! Directory store: a filesystem directory as the authoritative
//! collection of bookmark notes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::console::{Prompt, Report};
use crate::domain::Bookmark;
use crate::infra::{
    FsError, read_bookmark, remove_note_file, scan_bookmarks_dir, write_note_file,
    zettelkasten_filename,
};
use crate::render::Renderer;

/// A bookmark together with the file that backs it.
#[derive(Debug, Clone)]
pub struct StoredBookmark {
    pub path: PathBuf,
    pub bookmark: Bookmark,
    pub body: String,
}

/// Result of a batch write: the paths that were written, plus a count
/// of bookmarks that failed to render or write.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

/// Allocates collision-free filenames within one batch.
///
/// Two bookmarks created within the same timestamp resolution get a
/// numeric disambiguator before the extension. Names already present
/// on disk count as taken.
#[derive(Debug, Default)]
pub struct FilenameAllocator {
    used: HashSet<String>,
}

impl FilenameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, dir: &Path, base: &str) -> String {
        if self.claim(dir, base) {
            return base.to_string();
        }
        let stem = base.strip_suffix(".md").unwrap_or(base);
        let mut n = 1;
        loop {
            let candidate = format!("{stem}-{n}.md");
            if self.claim(dir, &candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn claim(&mut self, dir: &Path, name: &str) -> bool {
        if self.used.contains(name) || dir.join(name).exists() {
            return false;
        }
        self.used.insert(name.to_string());
        true
    }
}

/// Renders and writes each bookmark to its own note file in `dir`.
///
/// A single bookmark's render or write failure is reported and the
/// batch continues; each individual write is atomic.
pub fn write_bookmarks_to_dir(
    bookmarks: &[Bookmark],
    dir: &Path,
    renderer: &Renderer,
    report: &mut impl Report,
) -> Result<WriteOutcome, FsError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| FsError::Io {
            path: dir.into(),
            source: e,
        })?;
    }

    let mut allocator = FilenameAllocator::new();
    let mut outcome = WriteOutcome::default();

    for bookmark in bookmarks {
        let name = allocator.allocate(dir, &zettelkasten_filename(bookmark, Utc::now()));
        let path = dir.join(&name);

        let content = match renderer.render(bookmark) {
            Ok(content) => content,
            Err(err) => {
                report.line(&format!("error: failed to render '{}': {err}", bookmark.title));
                outcome.failed += 1;
                continue;
            }
        };
        match write_note_file(&path, &content) {
            Ok(()) => outcome.written.push(path),
            Err(err) => {
                report.line(&format!("error: failed to write '{}': {err}", bookmark.title));
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

/// Loads every parseable bookmark note in `dir`, ordered by filename.
///
/// Files that fail to parse are reported and skipped; they never abort
/// the listing.
pub fn load_bookmarks_from_dir(
    dir: &Path,
    report: &mut impl Report,
) -> Result<Vec<StoredBookmark>, FsError> {
    let mut bookmarks = Vec::new();
    for path in scan_bookmarks_dir(dir)? {
        match read_bookmark(&path) {
            Ok(parsed) => bookmarks.push(StoredBookmark {
                path,
                bookmark: parsed.bookmark,
                body: parsed.body,
            }),
            Err(err) => report.line(&format!("warning: skipping {}: {err}", path.display())),
        }
    }
    Ok(bookmarks)
}

/// Lists all bookmarks in `dir` with 1-based indices.
pub fn print_bookmarks_from_dir(
    dir: &Path,
    report: &mut impl Report,
) -> Result<Vec<StoredBookmark>, FsError> {
    let bookmarks = load_bookmarks_from_dir(dir, report)?;
    if bookmarks.is_empty() {
        report.line("No bookmarks found");
    } else {
        display_listing(&bookmarks, report);
    }
    Ok(bookmarks)
}

fn display_listing(bookmarks: &[StoredBookmark], report: &mut impl Report) {
    for (i, stored) in bookmarks.iter().enumerate() {
        report.line(&format!(
            "{}. {}  {}",
            i + 1,
            stored.bookmark.title,
            stored.bookmark.url
        ));
    }
}

/// Outcome of the interactive selection prompt.
enum Selection {
    Index(usize),
    Aborted,
    Invalid(String),
}

/// Reads a 1-based index. Empty input aborts; anything that isn't an
/// index in range is invalid. Neither mutates the directory.
fn read_selection(
    console: &mut (impl Prompt + Report),
    count: usize,
    action: &str,
) -> std::io::Result<Selection> {
    let input = console.prompt(&format!("Select a bookmark to {action} (1-{count}): "))?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Selection::Aborted);
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(Selection::Index(n - 1)),
        _ => Ok(Selection::Invalid(trimmed.to_string())),
    }
}

/// Interactively removes one bookmark note from `dir`.
///
/// Lists bookmarks with indices, reads one index, deletes the backing
/// file. Invalid or empty input leaves the directory untouched.
pub fn remove_bookmark_interactive_dir(
    dir: &Path,
    console: &mut (impl Prompt + Report),
) -> anyhow::Result<()> {
    let bookmarks = load_bookmarks_from_dir(dir, console)?;
    if bookmarks.is_empty() {
        console.line("No bookmarks found");
        return Ok(());
    }
    display_listing(&bookmarks, console);

    match read_selection(console, bookmarks.len(), "remove")? {
        Selection::Index(i) => {
            let stored = &bookmarks[i];
            remove_note_file(&stored.path)?;
            console.line(&format!("Removed: {}", stored.bookmark.title));
        }
        Selection::Aborted => console.line("Aborted"),
        Selection::Invalid(input) => console.line(&format!("Invalid selection: {input}")),
    }
    Ok(())
}

/// Fields offered by the interactive edit, in prompt order.
///
/// `id` is traceability-only and `favorite` is a flag rather than
/// text; both carry over unchanged.
const EDITABLE_FIELDS: [&str; 8] = [
    "title", "note", "excerpt", "url", "tags", "created", "cover", "highlights",
];

/// Interactively edits one bookmark note in `dir`.
///
/// Prompts for each field with the current value as the
/// default-on-empty-input, rebuilds the bookmark, and re-renders it to
/// the original file path. The filename is preserved even when the
/// edited title would sanitize to a different slug; renaming here
/// would risk orphaned files.
pub fn edit_bookmark_interactive_dir(
    dir: &Path,
    renderer: &Renderer,
    console: &mut (impl Prompt + Report),
) -> anyhow::Result<()> {
    let bookmarks = load_bookmarks_from_dir(dir, console)?;
    if bookmarks.is_empty() {
        console.line("No bookmarks found");
        return Ok(());
    }
    display_listing(&bookmarks, console);

    let stored = match read_selection(console, bookmarks.len(), "edit")? {
        Selection::Index(i) => &bookmarks[i],
        Selection::Aborted => {
            console.line("Aborted");
            return Ok(());
        }
        Selection::Invalid(input) => {
            console.line(&format!("Invalid selection: {input}"));
            return Ok(());
        }
    };

    let updated = prompt_field_updates(&stored.bookmark, console)?;
    let content = renderer.render(&updated)?;
    write_note_file(&stored.path, &content)?;
    console.line(&format!("Updated: {}", updated.title));
    Ok(())
}

/// Prompts for every editable field, keeping the current value on
/// empty input. Returns a fresh Bookmark; the original is untouched.
fn prompt_field_updates(
    current: &Bookmark,
    console: &mut impl Prompt,
) -> std::io::Result<Bookmark> {
    let mut updated = current.clone();
    for field in EDITABLE_FIELDS {
        let current_value = match field {
            "title" => &current.title,
            "note" => &current.note,
            "excerpt" => &current.excerpt,
            "url" => &current.url,
            "tags" => &current.tags,
            "created" => &current.created,
            "cover" => &current.cover,
            "highlights" => &current.highlights,
            _ => unreachable!(),
        };
        let input = console.prompt(&format!("{field} [{current_value}]: "))?;
        if !input.is_empty() {
            updated.set_field(field, &input);
        }
    }
    Ok(updated)
}

/// Case-insensitive fuzzy search over title, tags, and url.
///
/// Three distinct outcomes, reported verbatim:
/// - no note files at all: "No bookmark files found"
/// - notes but no match: "No bookmarks matched the query"
/// - matches: one line per match with title and url
///
/// Returns the matching bookmarks for programmatic use.
pub fn fuzzy_search_bookmarks_dir(
    dir: &Path,
    query: &str,
    report: &mut impl Report,
) -> Result<Vec<StoredBookmark>, FsError> {
    let paths = scan_bookmarks_dir(dir)?;
    if paths.is_empty() {
        report.line("No bookmark files found");
        return Ok(Vec::new());
    }

    let bookmarks = load_bookmarks_from_dir(dir, report)?;
    let needle = query.to_lowercase();
    let matches: Vec<StoredBookmark> = bookmarks
        .into_iter()
        .filter(|s| bookmark_matches(&s.bookmark, &needle))
        .collect();

    if matches.is_empty() {
        report.line("No bookmarks matched the query");
    } else {
        for stored in &matches {
            report.line(&format!("{}  {}", stored.bookmark.title, stored.bookmark.url));
        }
    }
    Ok(matches)
}

fn bookmark_matches(bookmark: &Bookmark, needle: &str) -> bool {
    bookmark.title.to_lowercase().contains(needle)
        || bookmark.tags.to_lowercase().contains(needle)
        || bookmark.url.to_lowercase().contains(needle)
}
