//! Shared test harness for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Raindrop export with a single bookmark row.
pub const SAMPLE_CSV: &str = "id,title,note,excerpt,url,tags,created,cover,highlights,favorite\n\
    1,Test Title,,Excerpt text,http://example.com,tag1,2025-01-01,,Highlight:Highlight 1,true\n";

/// Isolated test environment with a temporary bookmarks directory.
///
/// The temp directory is cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let dir = temp_dir.path().join("bookmarks");
        std::fs::create_dir(&dir).expect("failed to create bookmarks directory");
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// A `dropmark` command pointed at this environment's directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dropmark").expect("binary builds");
        cmd.arg("--dir").arg(&self.dir);
        cmd
    }

    /// Writes a file next to the bookmarks directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Imports the single-row sample CSV into the directory.
    pub fn import_sample(&self) {
        let csv = self.write_file("export.csv", SAMPLE_CSV);
        self.cmd().arg("import").arg(&csv).assert().success();
    }

    /// Note files currently in the directory, sorted by name.
    pub fn note_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .expect("failed to read bookmarks directory")
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|e| e == "md"))
            .collect();
        files.sort();
        files
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
