//! Core type definitions
//!
//! The report model shared by every extractor, plus the crate error type.

pub mod error;
pub mod report;

pub use error::{Result, ScoutError};
pub use report::{FieldEntry, FunctionEntity, Report, TypeEntity, TypeKind};
