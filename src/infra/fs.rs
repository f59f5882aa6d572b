//! File I/O for bookmark notes with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::infra::frontmatter::{ParseError, ParsedBookmark, parse_bookmark};

/// Errors during file system operations on bookmark notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("bookmark file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse bookmark at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: {detail}")]
    InvalidEncoding { path: PathBuf, detail: String },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads and parses a bookmark note from a file path.
///
/// # Errors
///
/// Returns `FsError::NotFound`/`PermissionDenied`/`Io` for read
/// failures, `FsError::InvalidEncoding` for non-UTF-8 content, and
/// `FsError::Parse` when the file has no frontmatter block.
pub fn read_bookmark(path: &Path) -> Result<ParsedBookmark, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        detail: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    parse_bookmark(content).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Writes rendered note content to a file path atomically.
///
/// Uses a temporary file in the target directory and an atomic rename,
/// so the file either reflects the new content or is unchanged. Parent
/// directories are created if missing.
pub fn write_note_file(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
    }

    let dir = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content.as_bytes()).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Deletes a bookmark note file.
pub fn remove_note_file(path: &Path) -> Result<(), FsError> {
    std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
}

/// Scans a directory for bookmark note (.md) files.
///
/// Skips hidden files and directories (starting with `.`). Returns
/// absolute paths sorted by file name, which is chronological order
/// under the Zettelkasten naming scheme.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist and
/// `FsError::NotADirectory` if the path is not a directory.
pub fn scan_bookmarks_dir(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(has_md_extension)
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|e| e == "md")
}
