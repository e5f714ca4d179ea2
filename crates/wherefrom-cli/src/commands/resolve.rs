use super::{report_env_error, EXIT_MISS};
use miette::{IntoDiagnostic, Result};
use std::path::Path;
use tracing::debug;
use wherefrom_core::{plugin, ResolverConfig, INTERFACE_VERSION};

/// Run the resolve command.
///
/// When `json` is true, outputs a single JSON object to stdout:
/// `{"found":…,"path":…,"interfaceVersion":…}`.
pub fn run(
    specifier: &str,
    source_file: &Path,
    config: &ResolverConfig,
    json: bool,
) -> Result<u8> {
    debug!(specifier, source = %source_file.display(), "resolving");

    let result = match plugin::resolve(specifier, source_file, config) {
        Ok(result) => result,
        Err(err) => return Ok(report_env_error(&err, json)),
    };

    if json {
        let payload = serde_json::json!({
            "found": result.found,
            "path": result.path,
            "interfaceVersion": INTERFACE_VERSION,
        });
        let out = serde_json::to_string_pretty(&payload).into_diagnostic()?;
        println!("{out}");
    } else if let Some(path) = &result.path {
        println!("{path}");
    } else {
        println!("not found: {specifier}");
    }

    Ok(if result.found { 0 } else { EXIT_MISS })
}
