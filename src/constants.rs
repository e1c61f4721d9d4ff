//! Global Constants
//!
//! Fixed ignore sets applied during directory walks. These are closed lists,
//! not user configuration: directories that never carry API signal and
//! files that are lockfile or OS noise.

/// Directory names pruned from every walk, wherever they appear in the tree.
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "vendor",
    ".idea",
    ".vscode",
    "__pycache__",
    ".pytest_cache",
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    "coverage",
    ".nyc_output",
];

/// File names excluded when enumerating the full inventory for the
/// generic fallback ecosystem (lockfiles, VCS metadata, OS droppings).
pub const IGNORE_FILES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    ".gitignore",
    ".gitattributes",
    "package-lock.json",
    "yarn.lock",
    "go.sum",
    "Pipfile.lock",
    "poetry.lock",
    "composer.lock",
];

/// Check whether a directory name is on the prune list.
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORE_DIRS.contains(&name)
}

/// Check whether a file name is on the inventory exclusion list.
pub fn is_ignored_file(name: &str) -> bool {
    IGNORE_FILES.contains(&name)
}
