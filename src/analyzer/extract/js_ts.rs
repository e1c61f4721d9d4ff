//! JavaScript / TypeScript Extractor
//!
//! The one extractor shared by two ecosystem labels: the detected label
//! decides both the report's `language` field and which canonical
//! extension is scanned (`js` or `ts`). Metadata comes from `package.json`
//! parsed as real JSON; declarations are matched by an explicit `export`
//! keyword prefix.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{line_of_offset, project_name, read_source};
use crate::analyzer::language::Ecosystem;
use crate::analyzer::scanner::FileScanner;
use crate::types::{FunctionEntity, Report, Result, TypeEntity, TypeKind};

static FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(?:async\s+)?function\s+(\w+)\s*(?:<[^>]+>)?\s*\(([^)]*)\)")
        .expect("export function pattern compiles")
});

static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+class\s+(\w+)").expect("export class pattern compiles"));

/// Generated declarations and test/spec files carry no API signal.
fn is_skipped_file(name: &str) -> bool {
    name.contains(".d.ts") || name.contains(".spec.") || name.contains(".test.")
}

pub fn extract(root: &Path, ecosystem: Ecosystem) -> Result<Report> {
    let mut report = Report::new(ecosystem.label(), project_name(root));

    if let Ok(text) = fs::read_to_string(root.join("package.json")) {
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(pkg) => {
                if let Some(name) = pkg.get("name").and_then(|v| v.as_str()) {
                    report.name = name.to_string();
                }
                if let Some(version) = pkg.get("version").and_then(|v| v.as_str()) {
                    report.version = version.to_string();
                }
                if let Some(description) = pkg.get("description").and_then(|v| v.as_str()) {
                    report.description = description.to_string();
                }
                if let Some(deps) = pkg.get("dependencies").and_then(|v| v.as_object()) {
                    // Map keys keep document order (serde_json preserve_order)
                    report.dependencies = deps.keys().cloned().collect();
                }
            }
            Err(err) => {
                tracing::debug!(%err, "skipping malformed package.json");
            }
        }
    }

    let extension = if ecosystem == Ecosystem::TypeScript {
        "ts"
    } else {
        "js"
    };
    let scanner = FileScanner::new(root).with_extension(extension);
    for rel in scanner.walk() {
        let Some(file_name) = rel.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_skipped_file(file_name) {
            continue;
        }

        let rel_str = rel.to_string_lossy().to_string();
        report.files.push(rel_str.clone());

        let Some(content) = read_source(&root.join(&rel)) else {
            continue;
        };
        scan_declarations(&content, &rel_str, &mut report);
    }

    Ok(report)
}

fn scan_declarations(content: &str, file: &str, report: &mut Report) {
    for cap in FUNC_RE.captures_iter(content) {
        let name = &cap[1];
        let offset = cap.get(1).map(|m| m.start()).unwrap_or(0);
        report.functions.push(FunctionEntity {
            name: name.to_string(),
            signature: format!("function {}({})", name, &cap[2]),
            doc: String::new(),
            exported: true,
            file: file.to_string(),
            line: line_of_offset(content, offset),
        });
    }

    for cap in CLASS_RE.captures_iter(content) {
        report.types.push(TypeEntity {
            name: cap[1].to_string(),
            kind: TypeKind::Class,
            fields: Vec::new(),
            doc: String::new(),
            file: file.to_string(),
        });
    }
}
