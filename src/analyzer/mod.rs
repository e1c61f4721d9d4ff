//! Analysis Orchestrator
//!
//! Composes the pipeline: validate the root path, detect the ecosystem,
//! dispatch to the matching extractor, post-process the report. Dispatch is
//! a `match` over the closed [`Ecosystem`] enum with the generic fallback
//! as the default arm, so every detector output maps to exactly one
//! extractor.

pub mod extract;
pub mod language;
pub mod scanner;

use std::path::Path;

use crate::types::{Report, Result, ScoutError};

pub use language::{Ecosystem, detect};
pub use scanner::FileScanner;

/// Analyze one project root and produce its report.
///
/// The only entry point the CLI layer calls. Fails with
/// [`ScoutError::PathNotFound`] when the root does not exist; per-file scan
/// failures inside the extractors never abort the run.
pub fn analyze<P: AsRef<Path>>(root: P) -> Result<Report> {
    let raw = root.as_ref();
    if !raw.exists() {
        return Err(ScoutError::path_not_found(raw.display().to_string()));
    }
    let root = raw.canonicalize()?;

    let ecosystem = language::detect(&root);
    tracing::debug!(%ecosystem, root = %root.display(), "detected ecosystem");

    let mut report = match ecosystem {
        Ecosystem::Go => extract::go::extract(&root)?,
        Ecosystem::Python => extract::python::extract(&root)?,
        Ecosystem::JavaScript | Ecosystem::TypeScript => {
            extract::js_ts::extract(&root, ecosystem)?
        }
        Ecosystem::Php | Ecosystem::Swift | Ecosystem::Unknown => {
            extract::fallback::extract(&root, ecosystem)?
        }
    };

    report.finish();
    Ok(report)
}
