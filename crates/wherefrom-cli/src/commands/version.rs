use miette::{IntoDiagnostic, Result};
use wherefrom_core::version::version_string;
use wherefrom_core::{INTERFACE_VERSION, VERSION};

pub fn run(json: bool) -> Result<u8> {
    if json {
        let payload = serde_json::json!({
            "version": VERSION,
            "interfaceVersion": INTERFACE_VERSION,
        });
        println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
    } else {
        println!("{}", version_string());
    }
    Ok(0)
}
