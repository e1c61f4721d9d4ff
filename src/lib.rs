//! CodeScout - Project Surface Analyzer
//!
//! A lightweight static-analysis tool that inspects a project directory,
//! infers its dominant language ecosystem, and extracts a structured
//! summary of its public surface: declared types, exported functions,
//! dependencies and file inventory.
//!
//! ## How it works
//!
//! - **Detection**: root marker files decide the ecosystem (go.mod,
//!   pyproject.toml, package.json, ...); an extension histogram breaks the
//!   tie when no marker exists.
//! - **Extraction**: one regex-based extractor per ecosystem scans source
//!   text for exported declarations. Pattern matching, not parsing: no AST,
//!   no symbol resolution, best-effort on malformed input.
//! - **Report**: a single flat JSON document with a stable field set.
//!
//! ## Quick Start
//!
//! ```ignore
//! let report = codescout::analyze("path/to/project")?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: detection, file walking, extraction, orchestration
//! - [`types`]: the report model and error type
//! - [`constants`]: fixed ignore sets for directory walks

pub mod analyzer;
pub mod constants;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use analyzer::{Ecosystem, FileScanner, analyze, detect};
pub use types::{
    FieldEntry, FunctionEntity, Report, Result, ScoutError, TypeEntity, TypeKind,
};
