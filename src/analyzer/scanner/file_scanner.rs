//! File Walker
//!
//! Recursive directory enumeration with a fixed prune list. Unlike a
//! gitignore-aware walker, the ignore set here is closed and baked in
//! ([`crate::constants::IGNORE_DIRS`]) so two runs over identical trees see
//! identical files regardless of repository configuration.
//!
//! Every walk is best-effort: unreadable entries and symlink loops are
//! dropped silently, never surfaced as errors.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::constants::{is_ignored_dir, is_ignored_file};

/// Lazy, restartable walker over candidate files under one root.
///
/// Each call to [`FileScanner::walk`] starts a fresh traversal, yielding
/// paths relative to the root.
pub struct FileScanner {
    root: PathBuf,
    extension: Option<String>,
    skip_ignored_names: bool,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: None,
            skip_ignored_names: false,
        }
    }

    /// Restrict the walk to files with this extension (no leading dot).
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Additionally drop files named in the fixed inventory exclusion list
    /// (lockfiles, OS metadata). Used by the fallback "all files" pass.
    pub fn skip_ignored_names(mut self) -> Self {
        self.skip_ignored_names = true;
        self
    }

    /// Walk the tree, yielding root-relative paths of matching files.
    ///
    /// Each call starts a fresh traversal; the iterator owns everything it
    /// needs (`use<>`) and outlives the scanner.
    pub fn walk(&self) -> impl Iterator<Item = PathBuf> + use<> {
        let root = self.root.clone();
        let extension = self.extension.clone();
        let skip_names = self.skip_ignored_names;

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .follow_links(false)
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                if !is_dir {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !is_ignored_dir(name))
            });

        builder
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .filter(move |entry| match &extension {
                Some(ext) => {
                    entry.path().extension().and_then(|e| e.to_str()) == Some(ext.as_str())
                }
                None => true,
            })
            .filter(move |entry| {
                !skip_names
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !is_ignored_file(name))
            })
            .filter_map(move |entry| {
                entry
                    .path()
                    .strip_prefix(&root)
                    .ok()
                    .map(Path::to_path_buf)
            })
    }

    /// Collect the walk into a vector of relative paths.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.walk().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_prunes_ignored_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/main.go");
        touch(dir.path(), "node_modules/pkg/index.js");
        touch(dir.path(), "target/debug/out");
        touch(dir.path(), ".git/config");

        let mut paths = FileScanner::new(dir.path()).paths();
        paths.sort();
        assert_eq!(paths, vec![PathBuf::from("src/main.go")]);
    }

    #[test]
    fn test_extension_filter() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.go");
        touch(dir.path(), "b.py");
        touch(dir.path(), "nested/c.go");

        let mut paths = FileScanner::new(dir.path()).with_extension("go").paths();
        paths.sort();
        assert_eq!(
            paths,
            vec![PathBuf::from("a.go"), PathBuf::from("nested/c.go")]
        );
    }

    #[test]
    fn test_hidden_files_are_kept() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".env");
        touch(dir.path(), ".config/settings.toml");

        let paths = FileScanner::new(dir.path()).paths();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_skip_ignored_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "README.md");
        touch(dir.path(), "package-lock.json");
        touch(dir.path(), ".DS_Store");

        let paths = FileScanner::new(dir.path()).skip_ignored_names().paths();
        assert_eq!(paths, vec![PathBuf::from("README.md")]);

        // Without the toggle the lockfile is still enumerated
        let all = FileScanner::new(dir.path()).paths();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_walk_is_restartable() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "one.py");
        touch(dir.path(), "two.py");

        let scanner = FileScanner::new(dir.path()).with_extension("py");
        let first: Vec<_> = scanner.walk().collect();
        let second: Vec<_> = scanner.walk().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first.len(), second.len());
    }
}
