//! Note rendering: Bookmark -> markdown with frontmatter.

use std::path::Path;

use minijinja::{Environment, context};
use thiserror::Error;

use crate::domain::Bookmark;
use crate::infra::escape_value;

/// Default note layout.
///
/// Whatever template is in use, the output must carry the same
/// frontmatter contract so the parser can round-trip it. The
/// `frontmatter` filter keeps each field value on its own line;
/// body placements take the value raw.
pub const DEFAULT_NOTE_TEMPLATE: &str = "\
---
id: {{ id | frontmatter }}
title: {{ title | frontmatter }}
note: {{ note | frontmatter }}
excerpt: {{ excerpt | frontmatter }}
url: {{ url | frontmatter }}
tags: {{ tags | frontmatter }}
created: {{ created | frontmatter }}
cover: {{ cover | frontmatter }}
favorite: {{ favorite | lower }}
highlights: {{ highlights | frontmatter }}
---

# {{ title }}

{{ excerpt }}

{{ note }}
";

/// Errors during template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template file {path}: {source}")]
    TemplateRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders bookmarks to note text through an injectable template.
///
/// Two variants: the built-in default layout, or an external template
/// file. Both receive the same context mapping (every Bookmark field
/// by name) and must emit a parseable frontmatter block.
pub struct Renderer {
    env: Environment<'static>,
}

const TEMPLATE_NAME: &str = "bookmark";

impl Renderer {
    /// Renderer backed by the built-in default layout.
    pub fn default_layout() -> Self {
        let mut env = base_environment();
        env.add_template(TEMPLATE_NAME, DEFAULT_NOTE_TEMPLATE)
            .expect("built-in template is valid");
        Self { env }
    }

    /// Renderer backed by an external template file.
    ///
    /// The file sees the same context and the same `frontmatter`
    /// filter as the built-in layout; multi-line fields placed in a
    /// frontmatter block should pass through the filter.
    pub fn from_template_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|e| RenderError::TemplateRead {
            path: path.into(),
            source: e,
        })?;
        let mut env = base_environment();
        env.add_template_owned(TEMPLATE_NAME.to_string(), source)?;
        Ok(Self { env })
    }

    /// Renders one bookmark to note text.
    pub fn render(&self, bookmark: &Bookmark) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        let text = tmpl.render(context! {
            id => bookmark.id,
            title => bookmark.title,
            note => bookmark.note,
            excerpt => bookmark.excerpt,
            url => bookmark.url,
            tags => bookmark.tags,
            created => bookmark.created,
            cover => bookmark.cover,
            favorite => bookmark.favorite,
            highlights => bookmark.highlights,
        })?;
        Ok(text)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::default_layout()
    }
}

fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("frontmatter", |value: String| escape_value(&value));
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::parse_bookmark;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_bookmark() -> Bookmark {
        Bookmark {
            id: "1".to_string(),
            title: "Test Title".to_string(),
            excerpt: "Excerpt text".to_string(),
            url: "http://example.com".to_string(),
            tags: "tag1".to_string(),
            created: "2025-01-01".to_string(),
            highlights: "Highlight:Highlight 1".to_string(),
            favorite: true,
            ..Default::default()
        }
    }

    #[test]
    fn default_layout_emits_frontmatter_and_body() {
        let text = Renderer::default_layout()
            .render(&sample_bookmark())
            .unwrap();

        assert!(text.starts_with("---\n"));
        assert!(text.contains("title: Test Title"));
        assert!(text.contains("url: http://example.com"));
        assert!(text.contains("favorite: true"));
        assert!(text.contains("highlights: Highlight:Highlight 1"));
        assert!(text.contains("# Test Title"));
        assert!(text.contains("Excerpt text"));
    }

    #[test]
    fn default_layout_round_trips_through_parser() {
        let bookmark = sample_bookmark();
        let text = Renderer::default_layout().render(&bookmark).unwrap();

        let parsed = parse_bookmark(&text).unwrap();
        assert_eq!(parsed.bookmark, bookmark);
    }

    #[test]
    fn empty_optional_fields_round_trip_as_empty() {
        let bookmark = Bookmark {
            title: "Sparse".to_string(),
            url: "http://example.com".to_string(),
            ..Default::default()
        };
        let text = Renderer::default_layout().render(&bookmark).unwrap();

        let parsed = parse_bookmark(&text).unwrap();
        assert_eq!(parsed.bookmark, bookmark);
        assert_eq!(parsed.bookmark.note, "");
        assert!(!parsed.bookmark.favorite);
    }

    #[test]
    fn parse_then_render_is_idempotent() {
        let renderer = Renderer::default_layout();
        let first = renderer.render(&sample_bookmark()).unwrap();
        let reparsed = parse_bookmark(&first).unwrap();
        let second = renderer.render(&reparsed.bookmark).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn file_template_is_used_for_rendering() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "---\ntitle: {{{{ title }}}}\nurl: {{{{ url }}}}\n---\nCUSTOM {{{{ title }}}}\n"
        )
        .unwrap();

        let renderer = Renderer::from_template_file(file.path()).unwrap();
        let text = renderer.render(&sample_bookmark()).unwrap();

        assert!(text.contains("CUSTOM Test Title"));
        let parsed = parse_bookmark(&text).unwrap();
        assert_eq!(parsed.bookmark.title, "Test Title");
    }

    #[test]
    fn missing_template_file_is_read_error() {
        let result = Renderer::from_template_file(Path::new("/no/such/template.md.j2"));
        assert!(matches!(result, Err(RenderError::TemplateRead { .. })));
    }

    #[test]
    fn markdown_values_are_not_escaped() {
        let bookmark = Bookmark {
            title: "Ampersands & <Brackets>".to_string(),
            ..Default::default()
        };
        let text = Renderer::default_layout().render(&bookmark).unwrap();
        assert!(text.contains("title: Ampersands & <Brackets>"));
    }

    #[test]
    fn multiline_note_cannot_overwrite_other_fields() {
        let bookmark = Bookmark {
            title: "Real Title".to_string(),
            note: "first line\ntitle: INJECTED".to_string(),
            ..Default::default()
        };
        let text = Renderer::default_layout().render(&bookmark).unwrap();

        let parsed = parse_bookmark(&text).unwrap();
        assert_eq!(parsed.bookmark.title, "Real Title");
        assert_eq!(parsed.bookmark.note, "first line\ntitle: INJECTED");
    }

    #[test]
    fn multiline_highlights_with_delimiter_line_round_trip() {
        let bookmark = Bookmark {
            title: "Delimiters".to_string(),
            highlights: "one\n---\ntwo".to_string(),
            created: "2025-01-01".to_string(),
            favorite: true,
            ..Default::default()
        };
        let text = Renderer::default_layout().render(&bookmark).unwrap();

        let parsed = parse_bookmark(&text).unwrap();
        assert_eq!(parsed.bookmark, bookmark);
    }

    #[test]
    fn multiline_values_render_on_single_frontmatter_lines() {
        let bookmark = Bookmark {
            title: "One Line".to_string(),
            excerpt: "spans\nlines".to_string(),
            ..Default::default()
        };
        let text = Renderer::default_layout().render(&bookmark).unwrap();
        assert!(text.contains("excerpt: spans\\nlines"));
    }
}
