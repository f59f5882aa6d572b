//! The Bookmark value type.

use serde::{Deserialize, Serialize};

/// A single bookmark record.
///
/// This is a plain owned value: every field is fully owned data, and
/// every read from disk produces a fresh instance. Edits construct a
/// new `Bookmark` rather than mutating in place.
///
/// All string fields tolerate being empty; `id` is traceability-only
/// and never used for filenames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub url: String,
    /// Delimiter-separated tag tokens, owned by the source format and
    /// passed through opaquely.
    #[serde(default)]
    pub tags: String,
    /// Creation timestamp in the source's own format, not reformatted.
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub cover: String,
    /// May contain an internal `Label:Text` convention; never parsed
    /// into sub-fields.
    #[serde(default)]
    pub highlights: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Bookmark {
    /// Assigns a frontmatter field by key. Returns `false` for unknown
    /// keys so callers can tell they were ignored.
    pub fn set_field(&mut self, key: &str, value: &str) -> bool {
        match key {
            "id" => self.id = value.to_string(),
            "title" => self.title = value.to_string(),
            "note" => self.note = value.to_string(),
            "excerpt" => self.excerpt = value.to_string(),
            "url" => self.url = value.to_string(),
            "tags" => self.tags = value.to_string(),
            "created" => self.created = value.to_string(),
            "cover" => self.cover = value.to_string(),
            "highlights" => self.highlights = value.to_string(),
            "favorite" => self.favorite = parse_truthy(value),
            _ => return false,
        }
        true
    }
}

/// Parses the external boolean representation.
///
/// Accepts case-insensitive `true`/`false`, `1`/`0`, and treats blank
/// or unrecognized tokens as `false`.
pub fn parse_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_bookmark_is_all_empty() {
        let b = Bookmark::default();
        assert_eq!(b.id, "");
        assert_eq!(b.title, "");
        assert_eq!(b.tags, "");
        assert!(!b.favorite);
    }

    #[test]
    fn parse_truthy_accepts_common_tokens() {
        assert!(parse_truthy("true"));
        assert!(parse_truthy("TRUE"));
        assert!(parse_truthy("True"));
        assert!(parse_truthy("1"));
        assert!(!parse_truthy("false"));
        assert!(!parse_truthy("0"));
        assert!(!parse_truthy(""));
        assert!(!parse_truthy("yes?"));
    }

    #[test]
    fn set_field_assigns_known_keys() {
        let mut b = Bookmark::default();
        assert!(b.set_field("title", "Test Title"));
        assert!(b.set_field("favorite", "true"));
        assert_eq!(b.title, "Test Title");
        assert!(b.favorite);
    }

    #[test]
    fn set_field_rejects_unknown_keys() {
        let mut b = Bookmark::default();
        assert!(!b.set_field("color", "red"));
        assert_eq!(b, Bookmark::default());
    }

    #[test]
    fn bookmarks_compare_field_for_field() {
        let a = Bookmark {
            title: "Same".to_string(),
            url: "http://example.com".to_string(),
            ..Default::default()
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
