use super::{report_env_error, EXIT_MISS};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;
use wherefrom_core::{plugin, scan_imports, ResolverConfig};

/// One scanned import with its resolution outcome.
#[derive(Debug, Serialize)]
struct CheckedImport {
    raw: String,
    kind: &'static str,
    line: u32,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

/// Run the check command: scan a file's imports and resolve each.
pub fn run(source_file: &Path, config: &ResolverConfig, json: bool) -> Result<u8> {
    let source = std::fs::read_to_string(source_file)
        .map_err(|e| miette!("cannot read {}: {e}", source_file.display()))?;

    let imports = scan_imports(&source);
    debug!(count = imports.len(), source = %source_file.display(), "scanned imports");

    let mut checked = Vec::with_capacity(imports.len());
    for import in imports {
        let result = match plugin::resolve(&import.raw, source_file, config) {
            Ok(result) => result,
            Err(err) => return Ok(report_env_error(&err, json)),
        };
        checked.push(CheckedImport {
            raw: import.raw,
            kind: import.kind.as_str(),
            line: import.line,
            found: result.found,
            path: result.path,
        });
    }

    let misses = checked.iter().filter(|c| !c.found).count();

    if json {
        let payload = serde_json::json!({
            "source": source_file.to_string_lossy(),
            "imports": checked,
            "misses": misses,
        });
        let out = serde_json::to_string_pretty(&payload).into_diagnostic()?;
        println!("{out}");
    } else {
        for import in &checked {
            if import.found {
                println!(
                    "  ok  {}:{} {} -> {}",
                    source_file.display(),
                    import.line,
                    import.raw,
                    import.path.as_deref().unwrap_or("?")
                );
            } else {
                println!(
                    "miss  {}:{} {}",
                    source_file.display(),
                    import.line,
                    import.raw
                );
            }
        }
        println!("{} imports, {} unresolved", checked.len(), misses);
    }

    Ok(if misses == 0 { 0 } else { EXIT_MISS })
}
