//! Domain types for bookmark notes.

mod bookmark;

pub use bookmark::{Bookmark, parse_truthy};
