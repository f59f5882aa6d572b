//! Zettelkasten filename generation for bookmark notes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::Bookmark;

/// Converts a bookmark title to a filesystem-safe slug.
///
/// - Converts to lowercase
/// - Replaces whitespace runs with single hyphens
/// - Keeps only alphanumeric characters, hyphens, and underscores
/// - Collapses consecutive hyphens
/// - Trims leading/trailing hyphens
/// - Truncates to 100 characters (at a hyphen boundary if possible)
/// - Returns "untitled" for empty results
///
/// # Examples
///
/// ```
/// use dropmark::infra::sanitize_title;
///
/// assert_eq!(sanitize_title("Test Title"), "test-title");
/// assert_eq!(sanitize_title("Rust: 2024 Edition!"), "rust-2024-edition");
/// assert_eq!(sanitize_title(""), "untitled");
/// ```
pub fn sanitize_title(title: &str) -> String {
    const MAX_LENGTH: usize = 100;

    let lower = title.to_lowercase();

    let mut result = String::new();
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c);
        } else if c.is_whitespace() || c == '-' {
            result.push('-');
        }
        // Path separators, control characters, and reserved
        // punctuation are dropped entirely.
    }

    // Collapse consecutive hyphens
    let mut collapsed = String::new();
    let mut prev_was_hyphen = false;
    for c in result.chars() {
        if c == '-' {
            if !prev_was_hyphen {
                collapsed.push(c);
            }
            prev_was_hyphen = true;
        } else {
            collapsed.push(c);
            prev_was_hyphen = false;
        }
    }

    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        return "untitled".to_string();
    }

    if trimmed.len() <= MAX_LENGTH {
        return trimmed.to_string();
    }

    // Prefer truncating at a hyphen boundary when it isn't too early
    let truncated = &trimmed[..MAX_LENGTH];
    if let Some(last_hyphen) = truncated.rfind('-')
        && last_hyphen > MAX_LENGTH / 2
    {
        return truncated[..last_hyphen].to_string();
    }

    truncated.trim_end_matches('-').to_string()
}

/// Generates a Zettelkasten filename for a bookmark.
///
/// Format: `{YYYYMMDDHHMMSS}-{slug}.md`. The timestamp prefix comes
/// from the bookmark's `created` field when it parses as a known
/// format, so filenames are deterministic for imported data; otherwise
/// the supplied wall-clock instant is used. Either way the prefix is
/// fixed-width and lexicographically chronological.
///
/// Collisions within a batch are the store's concern; see
/// [`crate::store::FilenameAllocator`].
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use dropmark::domain::Bookmark;
/// use dropmark::infra::zettelkasten_filename;
///
/// let bookmark = Bookmark {
///     title: "Test Title".to_string(),
///     created: "2025-01-01".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(
///     zettelkasten_filename(&bookmark, Utc::now()),
///     "20250101000000-test-title.md"
/// );
/// ```
pub fn zettelkasten_filename(bookmark: &Bookmark, now: DateTime<Utc>) -> String {
    let stamp = parse_created(&bookmark.created).unwrap_or(now.naive_utc());
    format!(
        "{}-{}.md",
        stamp.format("%Y%m%d%H%M%S"),
        sanitize_title(&bookmark.title)
    )
}

/// Attempts to parse the source's `created` representation.
///
/// Raindrop exports RFC 3339; hand-edited notes often carry a bare
/// date or a date-time without zone.
fn parse_created(created: &str) -> Option<NaiveDateTime> {
    let s = created.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}
