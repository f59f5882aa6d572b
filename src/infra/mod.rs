//! Infrastructure: filenames, frontmatter, file I/O.

pub mod filename;
pub mod frontmatter;
pub mod fs;

pub use filename::{sanitize_title, zettelkasten_filename};
pub use frontmatter::{ParseError, ParsedBookmark, escape_value, parse_bookmark};
pub use fs::{FsError, read_bookmark, remove_note_file, scan_bookmarks_dir, write_note_file};
