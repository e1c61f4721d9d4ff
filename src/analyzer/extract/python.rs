//! Python Extractor
//!
//! Project metadata comes from `pyproject.toml` scanned as plain text for
//! `name = "..."` / `version = "..."` literals; declarations come from
//! `class` and `def` statements in `.py` files. Visibility rule: a leading
//! underscore marks a declaration private.
//!
//! The doc capture looks for a `"""..."""` string on the line above the
//! declaration, matching how module-level constants are often annotated;
//! a conventional docstring inside the body is not extracted.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{line_of_offset, project_name, read_source};
use crate::analyzer::scanner::FileScanner;
use crate::types::{FunctionEntity, Report, Result, TypeEntity, TypeKind};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name\s*=\s*["']([^"']+)["']"#).expect("name pattern compiles")
});

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version\s*=\s*["']([^"']+)["']"#).expect("version pattern compiles")
});

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:"""([^"]+)"""\s*\n)?class\s+(\w+)(?:\(([^)]*)\))?:"#)
        .expect("class pattern compiles")
});

static DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:"""([^"]+)"""\s*\n\s*)?def\s+(\w+)\s*\(([^)]*)\)(?:\s*->\s*(\S+))?:"#)
        .expect("def pattern compiles")
});

fn is_test_file(name: &str) -> bool {
    name.starts_with("test_") || name.ends_with("_test.py")
}

pub fn extract(root: &Path) -> Result<Report> {
    let mut report = Report::new("python", project_name(root));

    if let Ok(content) = fs::read_to_string(root.join("pyproject.toml")) {
        if let Some(cap) = NAME_RE.captures(&content) {
            report.name = cap[1].to_string();
        }
        if let Some(cap) = VERSION_RE.captures(&content) {
            report.version = cap[1].to_string();
        }
    }

    let scanner = FileScanner::new(root).with_extension("py");
    for rel in scanner.walk() {
        let Some(file_name) = rel.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_test_file(file_name) {
            continue;
        }

        let rel_str = rel.to_string_lossy().to_string();
        report.files.push(rel_str.clone());

        let Some(content) = read_source(&root.join(&rel)) else {
            continue;
        };
        scan_classes(&content, &rel_str, &mut report);
        scan_functions(&content, &rel_str, &mut report);
    }

    Ok(report)
}

fn scan_classes(content: &str, file: &str, report: &mut Report) {
    for cap in CLASS_RE.captures_iter(content) {
        let name = &cap[2];
        if name.starts_with('_') {
            continue;
        }
        report.types.push(TypeEntity {
            name: name.to_string(),
            kind: TypeKind::Class,
            fields: Vec::new(),
            doc: cap
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            file: file.to_string(),
        });
    }
}

fn scan_functions(content: &str, file: &str, report: &mut Report) {
    for cap in DEF_RE.captures_iter(content) {
        let name = &cap[2];
        if name.starts_with('_') {
            continue;
        }
        let mut signature = format!("def {}({})", name, &cap[3]);
        if let Some(ret) = cap.get(4) {
            signature.push_str(&format!(" -> {}", ret.as_str()));
        }

        let offset = cap.get(2).map(|m| m.start()).unwrap_or(0);
        report.functions.push(FunctionEntity {
            name: name.to_string(),
            signature,
            doc: cap
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            exported: true,
            file: file.to_string(),
            line: line_of_offset(content, offset),
        });
    }
}
