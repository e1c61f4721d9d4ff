//! Go Extractor
//!
//! Project metadata comes from `go.mod` (module name, require-block
//! dependencies); declarations come from scanning every non-test `.go` file
//! for `type NAME struct|interface { ... }` blocks and `func` declarations,
//! optionally preceded by a `//` doc comment on the line above.
//!
//! The struct-body field scan is not brace-depth aware: the body is the
//! text up to the first `}`, so nested anonymous structs can yield partial
//! or spurious field entries. Accepted best-effort behavior.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{line_of_offset, project_name, read_source, starts_uppercase};
use crate::analyzer::scanner::FileScanner;
use crate::types::{FieldEntry, FunctionEntity, Report, Result, TypeEntity, TypeKind};

static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^module\s+(.+)$").expect("module pattern compiles"));

static DEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\t(\S+)\s+v[\d.]+").expect("dep pattern compiles"));

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?://\s*(.+)\n)?type\s+(\w+)\s+(struct|interface)\s*\{([^}]*)\}")
        .expect("type pattern compiles")
});

static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+(\S+)(?:\s+`([^`]+)`)?").expect("field pattern compiles"));

static FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?://\s*(.+)\n)?func\s+(?:\((\w+)\s+\*?(\w+)\)\s+)?(\w+)\s*\(([^)]*)\)\s*(?:\(([^)]*)\)|(\w+))?",
    )
    .expect("func pattern compiles")
});

pub fn extract(root: &Path) -> Result<Report> {
    let mut report = Report::new("go", project_name(root));

    if let Ok(content) = fs::read_to_string(root.join("go.mod")) {
        if let Some(cap) = MODULE_RE.captures(&content) {
            let module = cap[1].trim();
            if let Some(last) = module.rsplit('/').next() {
                report.name = last.to_string();
            }
        }
        for cap in DEP_RE.captures_iter(&content) {
            report.dependencies.push(cap[1].to_string());
        }
    }

    let scanner = FileScanner::new(root).with_extension("go");
    for rel in scanner.walk() {
        let Some(file_name) = rel.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name.contains("_test.go") {
            continue;
        }

        let rel_str = rel.to_string_lossy().to_string();
        report.files.push(rel_str.clone());

        let Some(content) = read_source(&root.join(&rel)) else {
            continue;
        };
        scan_types(&content, &rel_str, &mut report);
        scan_functions(&content, &rel_str, &mut report);
    }

    Ok(report)
}

fn scan_types(content: &str, file: &str, report: &mut Report) {
    for cap in TYPE_RE.captures_iter(content) {
        let name = &cap[2];
        if !starts_uppercase(name) {
            continue;
        }
        let kind = if &cap[3] == "struct" {
            TypeKind::Struct
        } else {
            TypeKind::Interface
        };
        let fields = FIELD_RE
            .captures_iter(&cap[4])
            .map(|f| FieldEntry {
                name: f[1].to_string(),
                ty: f[2].to_string(),
                tag: f.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
            })
            .collect();

        report.types.push(TypeEntity {
            name: name.to_string(),
            kind,
            fields,
            doc: cap
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            file: file.to_string(),
        });
    }
}

fn scan_functions(content: &str, file: &str, report: &mut Report) {
    for cap in FUNC_RE.captures_iter(content) {
        let name = &cap[4];
        if !starts_uppercase(name) {
            continue;
        }
        let params = &cap[5];

        let mut signature = match (cap.get(2), cap.get(3)) {
            (Some(recv_name), Some(recv_type)) => format!(
                "func ({} *{}) {}({})",
                recv_name.as_str(),
                recv_type.as_str(),
                name,
                params
            ),
            _ => format!("func {}({})", name, params),
        };

        let ret_multi = cap.get(6).map(|m| m.as_str()).filter(|s| !s.is_empty());
        let ret_single = cap.get(7).map(|m| m.as_str()).filter(|s| !s.is_empty());
        if let Some(ret) = ret_multi {
            signature.push_str(&format!(" ({ret})"));
        } else if let Some(ret) = ret_single {
            signature.push_str(&format!(" {ret}"));
        }

        // The match can start at the doc comment; the name sits on the
        // declaration line itself.
        let offset = cap.get(4).map(|m| m.start()).unwrap_or(0);
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_go_mod_name_and_deps() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "go.mod",
            "module github.com/acme/widget\n\ngo 1.22\n\nrequire (\n\tgithub.com/pkg/errors v0.9.1\n\tgolang.org/x/sync v0.7.0\n)\n",
        );
        let report = extract(dir.path()).unwrap();
        assert_eq!(report.name, "widget");
        assert_eq!(
            report.dependencies,
            vec!["github.com/pkg/errors", "golang.org/x/sync"]
        );
    }

    #[test]
    fn test_struct_with_fields_and_no_doc() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "types.go", "type Foo struct { Name string }\n");
        let report = extract(dir.path()).unwrap();

        assert_eq!(report.types.len(), 1);
        let ty = &report.types[0];
        assert_eq!(ty.name, "Foo");
        assert_eq!(ty.kind, TypeKind::Struct);
        assert_eq!(ty.doc, "");
        assert_eq!(ty.file, "types.go");
        assert_eq!(
            ty.fields,
            vec![FieldEntry {
                name: "Name".to_string(),
                ty: "string".to_string(),
                tag: String::new(),
            }]
        );
    }

    #[test]
    fn test_struct_tag_captured() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "user.go",
            "type User struct {\n\tID int `json:\"id\"`\n}\n",
        );
        let report = extract(dir.path()).unwrap();
        assert_eq!(report.types[0].fields[0].tag, "json:\"id\"");
    }

    #[test]
    fn test_unexported_type_is_dropped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bar.go", "type bar struct{}\n");
        let report = extract(dir.path()).unwrap();
        assert!(report.types.is_empty());
    }

    #[test]
    fn test_interface_kind() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "iface.go",
            "// Reader reads things\ntype Reader interface {\n\tRead(p []byte) (int, error)\n}\n",
        );
        let report = extract(dir.path()).unwrap();
        assert_eq!(report.types[0].kind, TypeKind::Interface);
        assert_eq!(report.types[0].doc, "Reader reads things");
    }

    #[test]
    fn test_function_signature_with_receiver_and_returns() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "svc.go",
            "// Fetch loads one record\nfunc (s *Server) Fetch(id string) (Record, error) {\n}\n\nfunc Count(items []int) int {\n}\n",
        );
        let report = extract(dir.path()).unwrap();
        assert_eq!(report.functions.len(), 2);

        let fetch = &report.functions[0];
        assert_eq!(fetch.name, "Fetch");
        assert_eq!(fetch.signature, "func (s *Server) Fetch(id string) (Record, error)");
        assert_eq!(fetch.doc, "Fetch loads one record");
        assert!(fetch.exported);
        assert_eq!(fetch.line, 2);

        let count = &report.functions[1];
        assert_eq!(count.signature, "func Count(items []int) int");
        assert_eq!(count.line, 5);
    }

    #[test]
    fn test_unexported_function_is_dropped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "m.go", "func helper(x int) int {\n}\n");
        let report = extract(dir.path()).unwrap();
        assert!(report.functions.is_empty());
    }

    #[test]
    fn test_test_files_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "main.go", "func Run() {\n}\n");
        write(dir.path(), "main_test.go", "func TestRun(t *testing.T) {\n}\n");
        let report = extract(dir.path()).unwrap();
        assert_eq!(report.files, vec!["main.go"]);
        assert_eq!(report.functions.len(), 1);
    }

    #[test]
    fn test_matches_within_one_file_keep_source_order() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "ord.go",
            "func Alpha() {\n}\n\nfunc Beta() {\n}\n\nfunc Gamma() {\n}\n",
        );
        let report = extract(dir.path()).unwrap();
        let names: Vec<&str> = report.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }
}
