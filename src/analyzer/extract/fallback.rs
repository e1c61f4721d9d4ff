//! Generic Fallback Extractor
//!
//! For ecosystems with no dedicated extractor (PHP, Swift) and for projects
//! nothing recognized at all. No manifest, no declarations: the report
//! carries only the ecosystem label, the directory name, and the full file
//! inventory minus lockfile/OS-metadata noise.

use std::path::Path;

use super::project_name;
use crate::analyzer::language::Ecosystem;
use crate::analyzer::scanner::FileScanner;
use crate::types::{Report, Result};

pub fn extract(root: &Path, ecosystem: Ecosystem) -> Result<Report> {
    let mut report = Report::new(ecosystem.label(), project_name(root));

    let scanner = FileScanner::new(root).skip_ignored_names();
    for rel in scanner.walk() {
        report.files.push(rel.to_string_lossy().to_string());
    }

    Ok(report)
}
