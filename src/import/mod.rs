//! Raindrop CSV export importer.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Bookmark, parse_truthy};

/// Errors during CSV import. Any of these aborts the whole import;
/// there are no partial CSV imports.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open CSV file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV file {path} has no recognizable header row")]
    MissingHeader { path: PathBuf },

    #[error("malformed CSV in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One raw CSV row. Columns are matched by header name, so column
/// order doesn't matter and missing columns fall back to defaults.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    note: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    created: String,
    #[serde(default)]
    cover: String,
    #[serde(default)]
    highlights: String,
    #[serde(default)]
    favorite: String,
}

impl From<RawRecord> for Bookmark {
    fn from(r: RawRecord) -> Self {
        Bookmark {
            id: r.id,
            title: r.title,
            note: r.note,
            excerpt: r.excerpt,
            url: r.url,
            tags: r.tags,
            created: r.created,
            cover: r.cover,
            highlights: r.highlights,
            favorite: parse_truthy(&r.favorite),
        }
    }
}

/// Expected column names. Used only to decide whether the first row
/// looks like a Raindrop header at all.
const EXPECTED_COLUMNS: [&str; 10] = [
    "id",
    "title",
    "note",
    "excerpt",
    "url",
    "tags",
    "created",
    "cover",
    "highlights",
    "favorite",
];

/// Parses a Raindrop CSV export into bookmarks, preserving row order.
///
/// The importer performs no validation beyond structural CSV parsing:
/// rows with empty title and url still import, since the Bookmark
/// contract tolerates empty strings.
///
/// # Errors
///
/// Returns `ImportError` if the file cannot be opened, has no
/// recognizable header row, or contains a structurally malformed row.
pub fn parse_raindrop_csv(path: &Path) -> Result<Vec<Bookmark>, ImportError> {
    let file = std::fs::File::open(path).map_err(|e| ImportError::Io {
        path: path.into(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| ImportError::Malformed {
        path: path.into(),
        source: e,
    })?;
    let recognized = headers
        .iter()
        .any(|h| EXPECTED_COLUMNS.contains(&h.trim().to_ascii_lowercase().as_str()));
    if headers.is_empty() || !recognized {
        return Err(ImportError::MissingHeader { path: path.into() });
    }

    let mut bookmarks = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        let record = record.map_err(|e| ImportError::Malformed {
            path: path.into(),
            source: e,
        })?;
        bookmarks.push(record.into());
    }

    Ok(bookmarks)
}
