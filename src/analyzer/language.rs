//! Ecosystem Detection
//!
//! Single source of truth for deciding which language ecosystem a project
//! root belongs to. Detection is marker-first: a recognized manifest or
//! config file at the root wins outright, independent of what the rest of
//! the tree contains. Only when no marker matches does detection fall back
//! to an extension histogram over the whole tree.
//!
//! Determinism: all iteration happens over [`Ecosystem::DETECTION_ORDER`],
//! a fixed array, so identical filesystem contents always produce the same
//! answer. Histogram ties resolve to the earlier entry in that order.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::scanner::FileScanner;

/// Per-ecosystem metadata: report label, root marker patterns, and the
/// extensions counted by the histogram fallback.
struct EcosystemMeta {
    label: &'static str,
    /// Exact filenames, or globs when they contain `*`, checked at the root.
    markers: &'static [&'static str],
    extensions: &'static [&'static str],
}

/// The closed set of recognized project ecosystems.
///
/// Go, Python and JavaScript/TypeScript have dedicated extractors; Php and
/// Swift are detected but analyzed by the generic fallback, as is Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Ecosystem {
    Go,
    Python,
    JavaScript,
    TypeScript,
    Php,
    Swift,
    #[default]
    Unknown,
}

impl Ecosystem {
    /// Fixed iteration order for marker checks and histogram tie-breaking.
    pub const DETECTION_ORDER: &'static [Ecosystem] = &[
        Ecosystem::Go,
        Ecosystem::Python,
        Ecosystem::JavaScript,
        Ecosystem::TypeScript,
        Ecosystem::Php,
        Ecosystem::Swift,
    ];

    fn meta(&self) -> EcosystemMeta {
        match self {
            Ecosystem::Go => EcosystemMeta {
                label: "go",
                markers: &["go.mod", "go.sum"],
                extensions: &["go"],
            },
            Ecosystem::Python => EcosystemMeta {
                label: "python",
                markers: &["pyproject.toml", "setup.py", "requirements.txt", "Pipfile"],
                extensions: &["py"],
            },
            Ecosystem::JavaScript => EcosystemMeta {
                label: "javascript",
                markers: &["package.json"],
                extensions: &["js"],
            },
            Ecosystem::TypeScript => EcosystemMeta {
                label: "typescript",
                markers: &["tsconfig.json"],
                extensions: &["ts"],
            },
            Ecosystem::Php => EcosystemMeta {
                label: "php",
                markers: &["composer.json"],
                extensions: &["php"],
            },
            Ecosystem::Swift => EcosystemMeta {
                label: "swift",
                markers: &["Package.swift", "*.xcodeproj"],
                extensions: &["swift"],
            },
            Ecosystem::Unknown => EcosystemMeta {
                label: "unknown",
                markers: &[],
                extensions: &[],
            },
        }
    }

    /// Label used for the report's `language` field.
    pub fn label(&self) -> &'static str {
        self.meta().label
    }

    /// Canonical source extension scanned by this ecosystem's extractor.
    pub fn extension(&self) -> Option<&'static str> {
        self.meta().extensions.first().copied()
    }

    /// Map a file extension to its ecosystem, if recognized.
    pub fn from_extension(ext: &str) -> Self {
        for eco in Self::DETECTION_ORDER {
            if eco.meta().extensions.contains(&ext) {
                return *eco;
            }
        }
        Ecosystem::Unknown
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Check one marker pattern against the root directory (non-recursive).
fn marker_present(root: &Path, marker: &str) -> bool {
    if !marker.contains('*') {
        return root.join(marker).exists();
    }
    let Ok(pattern) = glob::Pattern::new(marker) else {
        return false;
    };
    let Ok(entries) = fs::read_dir(root) else {
        return false;
    };
    entries.filter_map(|e| e.ok()).any(|entry| {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name))
    })
}

/// Decide which ecosystem a project root belongs to.
pub fn detect(root: &Path) -> Ecosystem {
    // Phase 1: root markers, in fixed priority order.
    for eco in Ecosystem::DETECTION_ORDER {
        for marker in eco.meta().markers {
            if marker_present(root, marker) {
                // A tsconfig.json alongside package.json upgrades the match:
                // TypeScript is a strict superset signal over plain JS.
                if *eco == Ecosystem::JavaScript && root.join("tsconfig.json").exists() {
                    return Ecosystem::TypeScript;
                }
                return *eco;
            }
        }
    }

    // Phase 2: extension histogram over the whole tree.
    let mut counts = [0usize; Ecosystem::DETECTION_ORDER.len()];
    for path in FileScanner::new(root).walk() {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if let Some(idx) = Ecosystem::DETECTION_ORDER
            .iter()
            .position(|eco| eco.meta().extensions.contains(&ext))
        {
            counts[idx] += 1;
        }
    }

    let mut best = Ecosystem::Unknown;
    let mut best_count = 0usize;
    for (idx, eco) in Ecosystem::DETECTION_ORDER.iter().enumerate() {
        // Strictly greater: ties keep the earlier ecosystem in the order.
        if counts[idx] > best_count {
            best = *eco;
            best_count = counts[idx];
        }
    }
    best
}
