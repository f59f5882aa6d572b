//! Frontmatter parser for recovering bookmarks from note files.

use thiserror::Error;

use crate::domain::Bookmark;

/// Result of parsing a note file.
#[derive(Debug, Clone)]
pub struct ParsedBookmark {
    pub bookmark: Bookmark,
    pub body: String,
}

/// Errors during frontmatter parsing.
///
/// Only a missing frontmatter block is an error; it signals the file
/// is not a bookmark note at all. Everything inside the block is
/// recovered leniently.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing opening frontmatter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing frontmatter delimiter '---'")]
    MissingClosingDelimiter,
}

/// Parses note content with `key: value` frontmatter.
///
/// # Format
/// ```text
/// ---
/// id: 1
/// title: Test Title
/// url: http://example.com
/// ---
/// Body content here...
/// ```
///
/// Recovery rules, tolerant of hand-edited files:
/// - keys are matched by name regardless of order or surrounding
///   whitespace
/// - unknown keys and non `key: value` lines are ignored
/// - an empty value parses to an empty string
/// - values may contain colons (`highlights: Label:Text`)
/// - `\n`, `\r`, and `\\` escapes in values are decoded (the inverse
///   of [`escape_value`]), so multi-line field content survives the
///   line-oriented block
/// - a missing `id` defaults to empty; filenames and content are the
///   durable identity
///
/// # Errors
///
/// Returns `ParseError` if the content does not start with `---` or
/// has no closing `---` delimiter.
pub fn parse_bookmark(content: &str) -> Result<ParsedBookmark, ParseError> {
    // Opening delimiter must be at the very start
    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else if content == "---" {
        return Err(ParseError::MissingClosingDelimiter);
    } else {
        return Err(ParseError::MissingOpeningDelimiter);
    };

    let rest = &content[after_opening..];
    let closing_pos = find_closing_delimiter(rest)?;
    let block = &rest[..closing_pos];

    let after_closing = &rest[closing_pos..];
    let body_start = if after_closing.starts_with("---\r\n") {
        closing_pos + 5
    } else if after_closing.starts_with("---\n") {
        closing_pos + 4
    } else {
        // closing delimiter at EOF
        closing_pos + 3
    };
    let body = rest
        .get(body_start..)
        .unwrap_or_default()
        .trim_start_matches(['\r', '\n'])
        .to_string();

    let mut bookmark = Bookmark::default();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        bookmark.set_field(key.trim(), &unescape_value(value.trim()));
    }

    Ok(ParsedBookmark { bookmark, body })
}

/// Encodes a field value onto a single frontmatter line.
///
/// Newlines and carriage returns become `\n`/`\r` escapes and
/// backslashes are doubled. Quoted CSV fields can legitimately carry
/// embedded newlines; left raw they would spill extra lines into the
/// frontmatter block. [`parse_bookmark`] decodes the escapes.
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_value`]. Unrecognized escape sequences pass
/// through untouched.
fn unescape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Finds the position of the closing `---` delimiter.
///
/// The delimiter must start a line and be exactly `---` followed by a
/// newline or EOF.
fn find_closing_delimiter(content: &str) -> Result<usize, ParseError> {
    let mut pos = 0;
    let bytes = content.as_bytes();

    while pos < bytes.len() {
        if content[pos..].starts_with("---") {
            let after = pos + 3;
            if after >= bytes.len()
                || bytes[after] == b'\n'
                || (bytes[after] == b'\r' && bytes.get(after + 1) == Some(&b'\n'))
            {
                return Ok(pos);
            }
        }
        match content[pos..].find('\n') {
            Some(offset) => pos += offset + 1,
            None => break,
        }
    }

    Err(ParseError::MissingClosingDelimiter)
}
