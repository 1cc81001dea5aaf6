use repokit_core::domain::FileReport;
use std::fs;
use std::path::Path;

/// Parse a Rust source file without compiling it.
///
/// Read failures are reported like parse failures so the scan can go on.
pub fn check(path: &Path) -> FileReport {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return FileReport::failed(path, format!("failed to read file: {}", err)),
    };

    match syn::parse_file(&source) {
        Ok(_) => FileReport::ok(path),
        Err(err) => FileReport::failed(path, describe(&err)),
    }
}

/// `line L, column C: message`, both 1-based
fn describe(err: &syn::Error) -> String {
    let start = err.span().start();
    format!("line {}, column {}: {}", start.line, start.column + 1, err)
}
