//! Report Model
//!
//! The single structured output of one analysis run. A `Report` is created
//! empty, populated by exactly one extractor, post-processed once
//! ([`Report::finish`]) and then handed off for serialization unchanged.
//!
//! Serialization contract: every key is always present. Absent data renders
//! as an empty string or empty list, never as a missing key or null.
//! `files` is sorted and deduplicated; every other list preserves discovery
//! order.

use serde::{Deserialize, Serialize};

/// Kind tag for a recorded type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Struct,
    Interface,
    Class,
    Type,
}

/// One field inside a struct/interface body, captured as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Raw metadata attached to the field (e.g. a Go struct tag), or "".
    pub tag: String,
}

/// One exported/public type-like declaration.
///
/// Identity is name + file only; the same name found in two files yields two
/// entries, never a merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntity {
    pub name: String,
    pub kind: TypeKind,
    pub fields: Vec<FieldEntry>,
    pub doc: String,
    pub file: String,
}

/// One exported/public function or method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionEntity {
    pub name: String,
    /// Reconstructed from the match; not guaranteed syntactically valid.
    pub signature: String,
    pub doc: String,
    pub exported: bool,
    pub file: String,
    /// 1-based source line of the match, or 0 when not tracked.
    pub line: u32,
}

/// Aggregate result of one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub language: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub files: Vec<String>,
    pub types: Vec<TypeEntity>,
    pub functions: Vec<FunctionEntity>,
    pub dependencies: Vec<String>,
    /// Part of the model but outside the stable serialized field set.
    #[serde(skip)]
    pub entry_points: Vec<String>,
}

impl Report {
    /// Create an empty report for the given ecosystem label and project name.
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Post-process before serialization: `files` becomes sorted and
    /// duplicate-free. Called exactly once by the orchestrator.
    pub fn finish(&mut self) {
        self.files.sort();
        self.files.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_finish_sorts_and_dedups() {
        let mut report = Report::new("go", "demo");
        report.files = vec![
            "src/b.go".to_string(),
            "a.go".to_string(),
            "src/b.go".to_string(),
        ];
        report.finish();
        assert_eq!(report.files, vec!["a.go", "src/b.go"]);
    }

    #[test]
    fn test_empty_report_serializes_all_keys() {
        let report = Report::new("unknown", "empty");
        let value = serde_json::to_value(&report).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "language",
                "name",
                "description",
                "version",
                "files",
                "types",
                "functions",
                "dependencies"
            ]
        );
        assert_eq!(obj["description"], "");
        assert_eq!(obj["files"], serde_json::json!([]));
    }

    #[test]
    fn test_entry_points_not_serialized() {
        let mut report = Report::new("go", "demo");
        report.entry_points.push("cmd/main.go".to_string());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("entry_points").is_none());
    }

    #[test]
    fn test_type_kind_renders_lowercase() {
        assert_eq!(
            serde_json::to_string(&TypeKind::Interface).unwrap(),
            "\"interface\""
        );
        assert_eq!(
            serde_json::to_string(&TypeKind::Struct).unwrap(),
            "\"struct\""
        );
    }

    #[test]
    fn test_field_entry_type_key() {
        let field = FieldEntry {
            name: "Name".to_string(),
            ty: "string".to_string(),
            tag: String::new(),
        };
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "string");
    }

    proptest! {
        #[test]
        fn prop_finish_yields_sorted_unique_files(paths in proptest::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,2}", 0..32)) {
            let mut expected = paths.clone();
            expected.sort();
            expected.dedup();

            let mut report = Report::new("unknown", "prop");
            report.files = paths;
            report.finish();

            prop_assert_eq!(&report.files, &expected);
            prop_assert!(report.files.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
